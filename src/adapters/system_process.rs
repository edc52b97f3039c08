use std::process::Command;

use crate::domain::{AnnotatorCommand, AppError};
use crate::ports::ProcessRunner;

/// Spawns commands with `std::process::Command`, inheriting the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &AnnotatorCommand) -> Result<Option<i32>, AppError> {
        let status = Command::new(command.program()).args(command.args()).status().map_err(
            |source| AppError::Spawn {
                program: command.program().to_string_lossy().into_owned(),
                source,
            },
        )?;
        Ok(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let command = AnnotatorCommand::new("annotator-launcher-no-such-vm", vec!["-jar".into()]);
        let err = SystemProcessRunner::new().run(&command).unwrap_err();

        match err {
            AppError::Spawn { program, source } => {
                assert_eq!(program, "annotator-launcher-no-such-vm");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_is_reported_not_judged() {
        let command = AnnotatorCommand::new("sh", vec!["-c".into(), "exit 3".into()]);
        let code = SystemProcessRunner::new().run(&command).unwrap();
        assert_eq!(code, Some(3));
    }
}
