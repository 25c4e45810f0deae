use std::io;
use std::path::Path;

/// What the operator should look at, given which step of the stage failed.
fn hint(operation: &str, kind: io::ErrorKind) -> &'static str {
    use io::ErrorKind::*;
    match (operation, kind) {
        ("reading arguments", NotFound) => {
            "The orchestrator did not stage an arguments document at this path."
        }
        ("reading arguments", _) => "The arguments document must be a readable regular file.",
        ("opening source" | "reading source", NotFound) => {
            "The content id in inputs.file.data.files has no file in the staging directory."
        }
        ("opening source" | "reading source", _) => "The staged input could not be read.",
        ("creating target", NotFound) => {
            "The tree directory for options.filename does not exist; the stage does not create it."
        }
        (_, StorageFull | WriteZero) => "The output tree ran out of space.",
        (_, PermissionDenied) => "The stage lacks write access to the output tree.",
        _ => "Re-run the stage once the tree is writable.",
    }
}

/// Format an I/O error with the failing step, the path and a hint.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        hint(operation, err.kind())
    )
}

/// Render an error and every `source()` below it, one cause per line.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        out.push_str(&format!("\n  caused by: {e}"));
        cause = e.source();
    }
    out
}
