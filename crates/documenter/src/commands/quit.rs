use super::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::error::DocError;

/// Static instance of the quit command handler
pub static QUIT_HANDLER: QuitCommand = QuitCommand;

/// Quit command handler
#[derive(Clone, Copy)]
pub struct QuitCommand;

impl CommandHandler for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn description(&self) -> &'static str {
        "Exit the console"
    }

    fn usage(&self) -> &'static str {
        "quit"
    }

    fn execute(&self, _args: &[String], _ctx: &CommandContext) -> Result<CommandOutput, DocError> {
        Ok(CommandOutput::Quit)
    }
}
