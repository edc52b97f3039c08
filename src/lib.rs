//! annotator-launcher: prepare `annotator-out/` and run the annotator archive.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::SystemProcessRunner;
use app::{AppContext, commands};
use ports::ProcessRunner;

pub use domain::{
    AnnotatorCommand, AnnotatorPaths, AnnotatorToggle, AnnotatorToggles, AppError,
    LauncherConfig,
};

/// Create the output directory and write `paths.tsv` using the default configuration.
pub fn prepare() -> Result<AnnotatorPaths, AppError> {
    prepare_with(&LauncherConfig::default())
}

/// Create the output directory and write `paths.tsv` for `config`.
pub fn prepare_with(config: &LauncherConfig) -> Result<AnnotatorPaths, AppError> {
    commands::prepare::execute(config)
}

/// Prepare, then run the annotator with the default configuration.
///
/// Blocks until the annotator exits. Its exit status is not checked.
pub fn run() -> Result<(), AppError> {
    run_with(LauncherConfig::default(), SystemProcessRunner::new())
}

/// Prepare, then run the annotator for `config` through `runner`.
pub fn run_with<P: ProcessRunner>(config: LauncherConfig, runner: P) -> Result<(), AppError> {
    let ctx = AppContext::new(config, runner);
    commands::run::execute(&ctx)
}
