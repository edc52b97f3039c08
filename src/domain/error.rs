use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launcher operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Output directory could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path-mapping file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    PathsFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The annotator process could not be started.
    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::OutputDir { source, .. }
            | AppError::PathsFile { source, .. }
            | AppError::Spawn { source, .. } => source.kind(),
            AppError::Configuration(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_error_keeps_not_found_kind() {
        let err = AppError::Spawn {
            program: "java".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("Failed to launch 'java'"));
    }

    #[test]
    fn configuration_errors_are_invalid_input() {
        let err = AppError::config_error("depth must be positive");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "depth must be positive");
    }

    #[test]
    fn output_dir_error_names_the_path() {
        let err = AppError::OutputDir {
            path: PathBuf::from("/repo/annotator-out"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(err.to_string().contains("/repo/annotator-out"));
    }
}
