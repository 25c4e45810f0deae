use std::path::PathBuf;

use log::debug;

use crate::arguments::{load_arguments, resolve_source, resolve_target};
use crate::{compress_file, StageConfig, StageError};

/// Paths one invocation reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// One invocation of the gzip stage.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    config: StageConfig,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Load the arguments document and work out source and target.
    /// Touches nothing but the arguments file.
    pub fn plan(&self) -> Result<Plan, StageError> {
        let args = load_arguments(&self.config.arguments_path)?;
        let source = resolve_source(&args)?;
        let target = resolve_target(&args)?;
        debug!("source={} target={}", source.display(), target.display());
        Ok(Plan { source, target })
    }

    /// Run the stage to completion.
    pub fn run(&self) -> Result<Plan, StageError> {
        let plan = self.plan()?;
        compress_file(&plan.source, &plan.target)?;
        Ok(plan)
    }
}
