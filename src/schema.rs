use serde_json::{json, Value};

/// Self-description printed in `--schema` mode.
pub fn schema() -> Value {
    json!({
        "summary": "Compress a file with gzip",
        "description": [
            "Compresses the single file passed as the `file` input with gzip",
            "at the default level and writes it to `filename` in the tree.",
            "The gzip header carries no file name or timestamp."
        ],
        "schema_2": {
            "options": {
                "additionalProperties": false,
                "required": ["filename"],
                "properties": {
                    "filename": {
                        "description": "Filename for the compressed artifact",
                        "type": "string"
                    }
                }
            },
            "inputs": {
                "type": "object",
                "additionalProperties": false,
                "required": ["file"],
                "properties": {
                    "file": {
                        "type": "object",
                        "additionalProperties": true
                    }
                }
            }
        }
    })
}
