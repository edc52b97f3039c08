//! Output directory and path-mapping file preparation.

use std::fs;

use tracing::info;

use crate::domain::{AnnotatorPaths, AppError, LauncherConfig};

/// Ensure the output directory exists and (re)write `paths.tsv` inside it.
///
/// Other files in the output directory are left alone.
pub fn execute(config: &LauncherConfig) -> Result<AnnotatorPaths, AppError> {
    let paths = AnnotatorPaths::from_config(config);

    fs::create_dir_all(paths.out_dir())
        .map_err(|source| AppError::OutputDir { path: paths.out_dir().to_path_buf(), source })?;

    let paths_file = paths.paths_file();
    fs::write(&paths_file, paths.paths_line().as_encoded_bytes())
        .map_err(|source| AppError::PathsFile { path: paths_file.clone(), source })?;

    info!(
        out_dir = %paths.out_dir().display(),
        paths_file = %paths_file.display(),
        "prepared annotator output"
    );
    Ok(paths)
}
