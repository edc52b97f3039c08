use tracing::{debug, info};

use super::prepare;
use crate::app::AppContext;
use crate::domain::{AnnotatorCommand, AppError};
use crate::ports::ProcessRunner;

/// Prepare the output directory, then run the annotator and wait for it.
///
/// The annotator's exit status is logged and otherwise ignored.
pub fn execute<P: ProcessRunner>(ctx: &AppContext<P>) -> Result<(), AppError> {
    let paths = prepare::execute(ctx.config())?;
    let command = AnnotatorCommand::build(ctx.config(), &paths);

    info!(command = %command, "launching annotator");
    let exit_code = ctx.runner().run(&command)?;
    debug!(?exit_code, "annotator exited");

    Ok(())
}
