//! Launcher configuration domain models.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::AppError;
use super::toggles::AnnotatorToggles;

/// Deployment-specific values for one annotator run.
///
/// `Default` carries the values the `annotator` binary always uses. The
/// TOML form exists for programs that embed the launcher as a library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Repository whose build the annotator drives.
    pub repo_root: PathBuf,
    /// Output directory name under `repo_root`.
    pub out_dir_name: String,
    /// VM executable used to run the archive.
    pub vm: String,
    /// Path to the annotator archive.
    pub annotator_jar: PathBuf,
    /// Build script, relative to `repo_root`.
    pub build_script: String,
    /// Initializer class passed via `-i`.
    pub initializer: String,
    /// Annotation passed via `-n`.
    pub annotation: String,
    /// Checker name passed via `-cn`.
    pub checker_name: String,
    /// Value of `--depth`.
    pub depth: u32,
    /// Optional flags appended after `--depth`.
    pub toggles: AnnotatorToggles,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            repo_root: default_repo_root(),
            out_dir_name: "annotator-out".to_string(),
            vm: "java".to_string(),
            annotator_jar: PathBuf::from("/var/core.jar"),
            build_script: "./build.sh".to_string(),
            initializer: "edu.Initializer".to_string(),
            annotation: "com.example.x.ucrtainting.qual.RUntainted".to_string(),
            checker_name: "UCRTaint".to_string(),
            depth: 25,
            toggles: AnnotatorToggles::default(),
        }
    }
}

/// The launcher crate sits one directory below the repository root.
pub fn default_repo_root() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir.parent().unwrap_or(crate_dir).to_path_buf()
}

impl LauncherConfig {
    /// Default configuration rooted at `repo_root`.
    pub fn for_repo(repo_root: impl Into<PathBuf>) -> Self {
        Self { repo_root: repo_root.into(), ..Self::default() }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: LauncherConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.vm.trim().is_empty() {
            return Err(AppError::config_error("vm must not be empty"));
        }
        if self.annotator_jar.as_os_str().is_empty() {
            return Err(AppError::config_error("annotator_jar must not be empty"));
        }
        let out_dir = Path::new(&self.out_dir_name);
        let single_component = out_dir.components().count() == 1;
        if self.out_dir_name.is_empty() || out_dir.is_absolute() || !single_component {
            return Err(AppError::config_error(format!(
                "out_dir_name '{}' must be a single relative directory name",
                self.out_dir_name
            )));
        }
        Ok(())
    }
}
