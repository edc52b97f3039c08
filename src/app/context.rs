use crate::domain::LauncherConfig;
use crate::ports::ProcessRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProcessRunner> {
    config: LauncherConfig,
    runner: P,
}

impl<P: ProcessRunner> AppContext<P> {
    /// Create a new application context.
    pub fn new(config: LauncherConfig, runner: P) -> Self {
        Self { config, runner }
    }

    /// Get a reference to the launcher configuration.
    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &P {
        &self.runner
    }
}
