use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::LauncherConfig;

pub const PATHS_FILE_NAME: &str = "paths.tsv";
pub const CHECKER_XML: &str = "checker.xml";
pub const SCANNER_XML: &str = "scanner.xml";

/// Filesystem locations derived from a [`LauncherConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorPaths {
    repo_root: PathBuf,
    out_dir: PathBuf,
}

impl AnnotatorPaths {
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self {
            repo_root: config.repo_root.clone(),
            out_dir: config.repo_root.join(&config.out_dir_name),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn paths_file(&self) -> PathBuf {
        self.out_dir.join(PATHS_FILE_NAME)
    }

    pub fn checker_xml(&self) -> PathBuf {
        self.out_dir.join(CHECKER_XML)
    }

    pub fn scanner_xml(&self) -> PathBuf {
        self.out_dir.join(SCANNER_XML)
    }

    /// Content of `paths.tsv`: checker and scanner paths, tab separated.
    pub fn paths_line(&self) -> OsString {
        let mut line = OsString::from(self.checker_xml());
        line.push("\t");
        line.push(self.scanner_xml());
        line.push("\n");
        line
    }
}
