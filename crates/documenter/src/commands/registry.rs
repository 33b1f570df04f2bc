/// Command Registry
///
/// The registry is the fixed, ordered table of commands available in the console. It is built once
/// at startup and never mutated. Aliases are separate entries pointing at the same handler; only
/// the canonical spelling of each command is flagged primary and offered for completion.
///
/// Identifier uniqueness is not checked when entries are added. A duplicate is a setup bug that
/// surfaces on lookup as [`DocError::DuplicateCommand`]; front ends call [`CommandRegistry::verify`]
/// before reading input so such a bug aborts startup.
use std::fmt;

use tracing::{
    debug,
    trace,
};

use super::api::API_HANDLER;
use super::clear::CLEAR_HANDLER;
use super::function::FUNCTION_HANDLER;
use super::help::{
    HELP_HANDLER,
    help_text,
};
use super::quit::QUIT_HANDLER;
use super::section::SECTION_HANDLER;
use super::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::docstring::DocLayout;
use crate::error::DocError;
use crate::tokenizer::tokenize;

/// A named entry in the registry.
#[derive(Clone, Copy)]
pub struct Command {
    identifier: &'static str,
    handler: &'static dyn CommandHandler,
    is_primary: bool,
}

impl Command {
    pub const fn primary(identifier: &'static str, handler: &'static dyn CommandHandler) -> Self {
        Self {
            identifier,
            handler,
            is_primary: true,
        }
    }

    pub const fn alias(identifier: &'static str, handler: &'static dyn CommandHandler) -> Self {
        Self {
            identifier,
            handler,
            is_primary: false,
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    pub fn handler(&self) -> &'static dyn CommandHandler {
        self.handler
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("identifier", &self.identifier)
            .field("handler", &self.handler.name())
            .field("is_primary", &self.is_primary)
            .finish()
    }
}

/// The built-in command table, in registration order.
pub fn builtin_commands() -> Vec<Command> {
    vec![
        Command::primary("help", &HELP_HANDLER),
        Command::alias("h", &HELP_HANDLER),
        Command::primary("api", &API_HANDLER),
        Command::alias("route", &API_HANDLER),
        Command::primary("function", &FUNCTION_HANDLER),
        Command::alias("func", &FUNCTION_HANDLER),
        Command::primary("section", &SECTION_HANDLER),
        Command::alias("sect", &SECTION_HANDLER),
        Command::primary("clear", &CLEAR_HANDLER),
        Command::alias("cls", &CLEAR_HANDLER),
        Command::primary("quit", &QUIT_HANDLER),
        Command::alias("q", &QUIT_HANDLER),
    ]
}

/// A registry of available commands that can be executed
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    context: CommandContext,
}

impl CommandRegistry {
    /// Create a new command registry with all built-in commands
    pub fn new() -> Self {
        Self::with_layout(DocLayout::default())
    }

    /// Built-in commands rendering with the given layout
    pub fn with_layout(layout: DocLayout) -> Self {
        Self::from_commands(builtin_commands(), layout)
    }

    pub fn from_commands(commands: Vec<Command>, layout: DocLayout) -> Self {
        Self {
            context: CommandContext {
                layout,
                help: help_text(&commands),
            },
            commands,
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn layout(&self) -> &DocLayout {
        &self.context.layout
    }

    /// Finds the single command registered under `identifier`.
    pub fn resolve(&self, identifier: &str) -> Result<&Command, DocError> {
        let mut matches = self.commands.iter().filter(|c| c.identifier == identifier);
        match (matches.next(), matches.next()) {
            (Some(command), None) => Ok(command),
            (Some(_), Some(_)) => Err(DocError::DuplicateCommand(identifier.to_string())),
            (None, _) => Err(DocError::CommandNotFound(identifier.to_string())),
        }
    }

    /// Runs the command registered under `identifier` with `args` as its positional arguments.
    pub fn dispatch(&self, identifier: &str, args: &[String]) -> Result<CommandOutput, DocError> {
        let command = self.resolve(identifier)?;
        debug!(identifier, handler = command.handler.name(), args = args.len(), "dispatching command");
        command.handler.execute(args, &self.context)
    }

    /// Tokenizes one line of input and dispatches it.
    pub fn parse_and_execute(&self, line: &str) -> Result<CommandOutput, DocError> {
        let tokens = tokenize(line)?;
        trace!(?tokens, "tokenized input");
        match tokens.split_first() {
            Some((identifier, args)) => self.dispatch(identifier, args),
            None => Err(DocError::CommandNotFound(String::new())),
        }
    }

    /// Resolves every registered identifier once, surfacing the first duplicate.
    pub fn verify(&self) -> Result<(), DocError> {
        for command in &self.commands {
            self.resolve(command.identifier)?;
        }
        Ok(())
    }

    /// Canonical identifiers, in registration order.
    pub fn primary_identifiers(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .filter(|c| c.is_primary)
            .map(|c| c.identifier)
            .collect()
    }

    /// Canonical identifiers starting with `prefix`, in registration order.
    pub fn completions(&self, prefix: &str) -> Vec<&'static str> {
        self.primary_identifiers()
            .into_iter()
            .filter(|identifier| identifier.starts_with(prefix))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
