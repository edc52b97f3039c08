use crate::domain::{AnnotatorCommand, AppError};

pub trait ProcessRunner {
    /// Run the command to completion with inherited stdio.
    ///
    /// Returns the exit code, or `None` when the process was ended by a signal.
    fn run(&self, command: &AnnotatorCommand) -> Result<Option<i32>, AppError>;
}
