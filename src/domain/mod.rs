mod annotator_command;
mod annotator_paths;
mod error;
mod launcher_config;
mod toggles;

pub use annotator_command::AnnotatorCommand;
pub use annotator_paths::{AnnotatorPaths, CHECKER_XML, PATHS_FILE_NAME, SCANNER_XML};
pub use error::AppError;
pub use launcher_config::{LauncherConfig, default_repo_root};
pub use toggles::{AnnotatorToggle, AnnotatorToggles};
