//! Decoding and resolution of the stage arguments document.
//!
//! osbuild hands every stage a JSON document describing the output tree, the
//! staged inputs and the stage options. Only a handful of fields matter here:
//!
//! ```text
//! {
//!   "tree": "/run/osbuild/tree",
//!   "inputs": { "file": { "path": "/run/osbuild/inputs/file",
//!                         "data": { "files": { "sha256:...": {} } } } },
//!   "options": { "filename": "compressed.gz" }
//! }
//! ```
//!
//! Everything else in the document is ignored. Missing fields decode to empty
//! values and are rejected later by path resolution.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::StageError;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageArguments {
    /// Root of the output tree.
    pub tree: String,
    pub inputs: Inputs,
    pub options: Options,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Inputs {
    pub file: FileInput,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileInput {
    /// Directory holding the staged input content.
    pub path: String,
    pub data: FileData,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileData {
    /// Content identifier to per-file metadata. The metadata is never inspected.
    pub files: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Options {
    pub filename: String,
}

impl StageArguments {
    /// Decode an arguments document already held in memory.
    pub fn from_slice(data: &[u8]) -> Result<Self, StageError> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// Read and decode the arguments document at `path`.
pub fn load_arguments(path: &Path) -> Result<StageArguments, StageError> {
    let data = fs::read(path).map_err(|e| StageError::io("reading arguments", path, e))?;
    let args = StageArguments::from_slice(&data)?;
    debug!(
        "loaded arguments from {}: tree={:?} filename={:?}",
        path.display(),
        args.tree,
        args.options.filename
    );
    Ok(args)
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, StageError> {
    if value.is_empty() {
        return Err(StageError::MissingField(field));
    }
    Ok(value)
}

/// Join `name` under `base`, keeping `base` as a prefix even when `name` is
/// rooted. Nothing is normalized. A name that is empty once its leading `/`
/// are dropped would resolve to `base` itself and is rejected.
fn join_under(base: &str, name: &str, field: &'static str) -> Result<PathBuf, StageError> {
    let relative = non_empty(name.trim_start_matches('/'), field)?;
    Ok(Path::new(base).join(relative))
}

/// Locate the single staged input file named by `args`.
///
/// Fails unless `inputs.file.data.files` holds exactly one entry; there is no
/// policy for choosing among several candidates.
pub fn resolve_source(args: &StageArguments) -> Result<PathBuf, StageError> {
    let files = &args.inputs.file.data.files;
    if files.len() != 1 {
        let listing = serde_json::to_string(files)?;
        return Err(StageError::Resolution(listing));
    }
    let id = files
        .keys()
        .next()
        .ok_or_else(|| StageError::Resolution("{}".into()))?;
    let dir = non_empty(&args.inputs.file.path, "inputs.file.path")?;
    join_under(dir, id, "inputs.file.data.files")
}

/// Path of the compressed artifact inside the output tree.
pub fn resolve_target(args: &StageArguments) -> Result<PathBuf, StageError> {
    let tree = non_empty(&args.tree, "tree")?;
    join_under(tree, &args.options.filename, "options.filename")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_files(files: Value) -> StageArguments {
        let doc = json!({
            "tree": "/out",
            "inputs": { "file": { "path": "/in", "data": { "files": files } } },
            "options": { "filename": "compressed.gz" }
        });
        serde_json::from_value(doc).unwrap()
    }

    #[test]
    fn single_candidate_is_joined_onto_input_dir() {
        let args = with_files(json!({ "sha256:abc": {} }));
        assert_eq!(resolve_source(&args).unwrap(), PathBuf::from("/in/sha256:abc"));
    }

    #[test]
    fn target_is_tree_plus_filename() {
        let args = with_files(json!({ "sha256:abc": {} }));
        assert_eq!(resolve_target(&args).unwrap(), PathBuf::from("/out/compressed.gz"));
    }

    #[test]
    fn rooted_filename_stays_inside_tree() {
        let mut args = with_files(json!({ "sha256:abc": {} }));
        args.options.filename = "/etc/evil.gz".into();
        assert_eq!(resolve_target(&args).unwrap(), PathBuf::from("/out/etc/evil.gz"));
    }

    #[test]
    fn rooted_content_id_stays_inside_input_dir() {
        let args = with_files(json!({ "/etc/shadow": {} }));
        let source = resolve_source(&args).unwrap();
        assert_eq!(source, PathBuf::from("/in/etc/shadow"));
        assert!(source.starts_with("/in"));
    }

    #[test]
    fn empty_tree_is_rejected() {
        let mut args = with_files(json!({ "sha256:abc": {} }));
        args.tree.clear();
        assert!(matches!(resolve_target(&args), Err(StageError::MissingField("tree"))));
    }

    #[test]
    fn empty_or_root_filename_is_rejected() {
        let mut args = with_files(json!({ "sha256:abc": {} }));
        for name in ["", "/", "//"] {
            args.options.filename = name.into();
            assert!(matches!(
                resolve_target(&args),
                Err(StageError::MissingField("options.filename"))
            ));
        }
    }

    #[test]
    fn empty_input_dir_is_rejected() {
        let mut args = with_files(json!({ "sha256:abc": {} }));
        args.inputs.file.path.clear();
        assert!(matches!(
            resolve_source(&args),
            Err(StageError::MissingField("inputs.file.path"))
        ));
    }

    #[test]
    fn no_candidates_is_rejected() {
        let args = with_files(json!({}));
        match resolve_source(&args) {
            Err(StageError::Resolution(msg)) => assert_eq!(msg, "{}"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn several_candidates_are_listed_in_error() {
        let args = with_files(json!({ "sha256:aaa": {}, "sha256:bbb": { "x": 1 } }));
        let err = resolve_source(&args).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, StageError::Resolution(_)));
        assert!(msg.contains("sha256:aaa"));
        assert!(msg.contains("sha256:bbb"));
    }

    #[test]
    fn metadata_is_kept_opaque() {
        let args = with_files(json!({ "sha256:abc": { "mtime": 1, "nested": [true] } }));
        assert_eq!(
            args.inputs.file.data.files["sha256:abc"],
            json!({ "mtime": 1, "nested": [true] })
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let args = StageArguments::from_slice(b"{}").unwrap();
        assert_eq!(args, StageArguments::default());
        assert!(matches!(resolve_source(&args), Err(StageError::Resolution(_))));
        assert!(matches!(resolve_target(&args), Err(StageError::MissingField("tree"))));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let err = StageArguments::from_slice(br#"{"tree": 5}"#).unwrap_err();
        assert!(matches!(err, StageError::Decode(_)));
    }
}
