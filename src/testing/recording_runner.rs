use std::io;
use std::sync::Mutex;

use crate::domain::{AnnotatorCommand, AppError};
use crate::ports::ProcessRunner;

/// Records every command instead of spawning it.
pub struct RecordingRunner {
    pub commands: Mutex<Vec<AnnotatorCommand>>,
    exit_code: Option<i32>,
    fail_spawn: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self { commands: Mutex::new(Vec::new()), exit_code: Some(0), fail_spawn: false }
    }

    pub fn exiting_with(code: i32) -> Self {
        Self { exit_code: Some(code), ..Self::new() }
    }

    /// Behaves like a VM executable that is not installed.
    pub fn missing_program() -> Self {
        Self { fail_spawn: true, ..Self::new() }
    }

    pub fn recorded(&self) -> Vec<AnnotatorCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &AnnotatorCommand) -> Result<Option<i32>, AppError> {
        self.commands.lock().unwrap().push(command.clone());
        if self.fail_spawn {
            return Err(AppError::Spawn {
                program: command.program().to_string_lossy().into_owned(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            });
        }
        Ok(self.exit_code)
    }
}
