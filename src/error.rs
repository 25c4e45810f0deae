use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::io_utils::format_io_error;

#[derive(Error, Debug)]
pub enum StageError {
    /// Filesystem failure while opening, creating, reading or writing.
    #[error("{}", format_io_error(.operation, .path, .source))]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The arguments document is not valid JSON or has the wrong shape.
    #[error("malformed stage arguments: {0}")]
    Decode(#[from] serde_json::Error),

    /// A path field needed to build the source or target was empty.
    #[error("stage arguments are missing `{0}`")]
    MissingField(&'static str),

    /// `inputs.file.data.files` did not hold exactly one entry.
    #[error("unexpected amount of destination files {0}")]
    Resolution(String),
}

impl StageError {
    /// Attach the failing operation and path to an I/O error.
    pub fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        StageError::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}
