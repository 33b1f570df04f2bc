use super::{
    Command,
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::error::DocError;

/// Static instance of the help command handler
pub static HELP_HANDLER: HelpCommand = HelpCommand;

const HELP_HEADER: &str = color_print::cstr! {"<magenta,em>Help Menu</magenta,em>

<cyan,em>Tips:</cyan,em>
  Wrap a value in double quotes to keep its spaces, e.g. <em>\"id - user id\"</em>
  Separate the entries of a multi-value field (query parameters, arguments) with commas:
    <em>\"path - file to read,mode - how to open it\"</em>

<cyan,em>Commands:</cyan,em>"};

/// Help text listing each primary command followed by its aliases, arguments and description.
pub fn help_text(commands: &[Command]) -> String {
    let mut text = String::from(HELP_HEADER);
    for primary in commands.iter().filter(|c| c.is_primary()) {
        let handler = primary.handler();
        let aliases = commands
            .iter()
            .filter(|c| !c.is_primary() && c.handler().name() == handler.name())
            .map(Command::identifier);
        let identifiers: Vec<_> = std::iter::once(primary.identifier()).chain(aliases).collect();

        let arguments = handler
            .usage()
            .strip_prefix(handler.name())
            .unwrap_or_default()
            .trim_start();
        let separator = if arguments.is_empty() { "" } else { " " };

        text.push_str(&color_print::cformat!(
            "\n  <em>{}</em>{}{}\n      <black!>{}</black!>",
            identifiers.join(", "),
            separator,
            arguments,
            handler.description()
        ));
    }
    text
}

/// Help command handler
#[derive(Clone, Copy)]
pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show help information"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _args: &[String], ctx: &CommandContext) -> Result<CommandOutput, DocError> {
        Ok(CommandOutput::Text(ctx.help.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::builtin_commands;

    fn plain_help(commands: &[Command]) -> String {
        anstream::adapter::strip_str(&help_text(commands)).to_string()
    }

    #[test]
    fn test_help_lists_every_command() {
        let commands = builtin_commands();
        let text = plain_help(&commands);
        for command in &commands {
            assert!(text.contains(command.identifier()), "missing {}", command.identifier());
            assert!(text.contains(command.handler().description()));
        }
        for line in ["help, h", "api, route <METHOD> <ROUTE URI> [QUERY PARAMETERS] [RETURN]", "quit, q"] {
            assert!(text.contains(line), "missing {line}");
        }
    }

    #[test]
    fn test_help_follows_registration_order() {
        let text = plain_help(&builtin_commands());
        let positions: Vec<_> = ["help, h", "api, route", "function, func", "section, sect", "clear, cls", "quit, q"]
            .iter()
            .map(|entry| text.find(entry).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_help_without_aliases() {
        let text = plain_help(&[Command::primary("section", &crate::commands::section::SECTION_HANDLER)]);
        assert!(text.contains("section <NAME>"));
        assert!(!text.contains("help"));
    }
}
