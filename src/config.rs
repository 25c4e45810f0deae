use std::path::PathBuf;

/// Location osbuild stages the API arguments document at.
pub const DEFAULT_ARGUMENTS_PATH: &str = "/run/osbuild/api/arguments";

/// Runtime configuration for a single stage invocation.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Where the arguments document is read from.
    pub arguments_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            arguments_path: PathBuf::from(DEFAULT_ARGUMENTS_PATH),
        }
    }
}

impl StageConfig {
    /// Use a different arguments document.
    pub fn with_arguments_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.arguments_path = path.into();
        self
    }
}
