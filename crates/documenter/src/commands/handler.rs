/// CommandHandler Trait
///
/// Every REPL command is backed by a handler that receives the tokens following the command
/// identifier, verbatim and in order. The dispatcher never checks arity; a handler that needs
/// arguments validates them itself and reports [`DocError::InsufficientArguments`] on shortfall.
///
/// Handlers never perform I/O. Commands with side effects (clearing the screen, quitting) return a
/// [`CommandOutput`] variant describing the effect and leave it to the front end.
use crate::docstring::DocLayout;
use crate::error::DocError;

/// Result of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to display to the user
    Text(String),
    /// The front end should clear its display
    ClearScreen,
    /// The front end should stop reading input
    Quit,
}

/// State shared by all handlers of a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    pub layout: DocLayout,
    /// Help text describing the registry's commands
    pub help: String,
}

/// Trait for command handlers
pub trait CommandHandler: Send + Sync {
    /// Returns the name of the command
    fn name(&self) -> &'static str;

    /// Returns a short description of the command for help text
    fn description(&self) -> &'static str;

    /// Returns usage information for the command
    fn usage(&self) -> &'static str;

    /// Execute the command with the given positional arguments
    fn execute(&self, args: &[String], ctx: &CommandContext) -> Result<CommandOutput, DocError>;
}

/// Returns the argument at `index`, failing if it is missing or empty.
pub(crate) fn required_arg<'a>(
    args: &'a [String],
    index: usize,
    command: &'static str,
    field: &'static str,
) -> Result<&'a str, DocError> {
    optional_arg(args, index).ok_or(DocError::InsufficientArguments {
        command,
        field,
        position: index + 1,
    })
}

/// Returns the argument at `index`, treating an empty token as absent.
pub(crate) fn optional_arg(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str).filter(|arg| !arg.is_empty())
}
