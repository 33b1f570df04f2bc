use super::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::error::DocError;

/// Static instance of the clear command handler
pub static CLEAR_HANDLER: ClearCommand = ClearCommand;

/// Clear command handler
#[derive(Clone, Copy)]
pub struct ClearCommand;

impl CommandHandler for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear the console"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _args: &[String], _ctx: &CommandContext) -> Result<CommandOutput, DocError> {
        Ok(CommandOutput::ClearScreen)
    }
}
