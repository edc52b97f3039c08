//! Shared testing utilities for annotator launcher tests.

use annotator_launcher::{AnnotatorCommand, AppError, LauncherConfig, ports::ProcessRunner};
use assert_cmd::Command;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway repository root for a single test.
#[allow(dead_code)]
pub struct TestRepo {
    root: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root().join("annotator-out")
    }

    pub fn config(&self) -> LauncherConfig {
        LauncherConfig::for_repo(self.root())
    }

    /// Expected content of `paths.tsv` for this root.
    pub fn expected_paths_line(&self) -> String {
        let out = self.out_dir();
        format!("{}\t{}\n", out.join("checker.xml").display(), out.join("scanner.xml").display())
    }
}

/// Build a command for invoking the compiled `annotator` binary.
#[allow(dead_code)]
pub fn cli() -> Command {
    Command::cargo_bin("annotator").expect("Failed to locate annotator binary")
}

/// Captures commands handed to the runner instead of spawning them.
#[derive(Default)]
#[allow(dead_code)]
pub struct CapturingRunner {
    pub seen: RefCell<Vec<AnnotatorCommand>>,
}

impl ProcessRunner for &CapturingRunner {
    fn run(&self, command: &AnnotatorCommand) -> Result<Option<i32>, AppError> {
        self.seen.borrow_mut().push(command.clone());
        Ok(Some(0))
    }
}
