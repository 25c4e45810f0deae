//! osbuild stage that gzips one staged input file into the output tree.
//!
//! The orchestrator passes parameters through a JSON arguments document
//! (see [`arguments`]). [`Stage::run`] loads it, resolves the single input
//! file and compresses it to `<tree>/<options.filename>`.

pub mod arguments;
mod compress;
mod config;
mod error;
pub mod io_utils;
mod schema;
mod stage;

pub use arguments::{load_arguments, resolve_source, resolve_target, StageArguments};
pub use compress::{compress_file, compress_stream};
pub use config::{StageConfig, DEFAULT_ARGUMENTS_PATH};
pub use error::StageError;
pub use schema::schema;
pub use stage::{Plan, Stage};
