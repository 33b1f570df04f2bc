//! The interactive console: read a line, tokenize, dispatch, print.

mod helper;
mod input_source;

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{
    Clear,
    ClearType,
};
use eyre::Result;
pub use helper::DocHelper;
pub use input_source::InputSource;
use tracing::{
    info,
    warn,
};

use crate::commands::{
    CommandOutput,
    CommandRegistry,
};
use crate::constants::ui_text::COMMAND_SUCCESSFUL;
use crate::error::error_line;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    /// A quit command was entered
    Quit,
    /// Input ran out or the user pressed Ctrl-D
    EndOfInput,
}

/// Runs the console until quit or end of input.
///
/// Command output goes to `out`, error lines to `err`. Errors from commands are reported and the
/// loop continues; only a broken registry or a failing input source ends it with an error.
pub fn run(
    registry: &CommandRegistry,
    input: &mut InputSource,
    prompt: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ReplExit> {
    registry.verify()?;

    loop {
        let Some(line) = input.read_line(Some(prompt))? else {
            info!("input closed");
            return Ok(ReplExit::EndOfInput);
        };
        if line.trim().is_empty() {
            continue;
        }

        match registry.parse_and_execute(&line) {
            Ok(CommandOutput::Text(text)) => writeln!(out, "{text}")?,
            Ok(CommandOutput::ClearScreen) => {
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                writeln!(out, "{COMMAND_SUCCESSFUL}")?;
            },
            Ok(CommandOutput::Quit) => {
                info!("quit requested");
                return Ok(ReplExit::Quit);
            },
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                warn!(code = ?e.code(), error = %e, "command failed");
                writeln!(err, "{}", error_line(&e))?;
            },
        }
        out.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::commands::help::HELP_HANDLER;
    use crate::docstring::{
        DocLayout,
        generate_section_doc,
    };
    use crate::error::DocError;

    fn run_lines(registry: &CommandRegistry, lines: &[&str]) -> (Result<ReplExit>, String, String) {
        let mut input = InputSource::new_mock(lines.iter().map(|l| l.to_string()).collect());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let exit = run(registry, &mut input, "$ ", &mut out, &mut err);
        (exit, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_prints_results_and_quits() {
        let registry = CommandRegistry::new();
        let (exit, out, err) = run_lines(&registry, &["section INIT", "quit", "section NEVER"]);
        assert_eq!(exit.unwrap(), ReplExit::Quit);
        assert_eq!(out, format!("{}\n", generate_section_doc("INIT")));
        assert!(err.is_empty());
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let registry = CommandRegistry::new();
        let (exit, out, err) = run_lines(&registry, &["zzz", "api", r#"api "broken"#, "sect DONE"]);
        assert_eq!(exit.unwrap(), ReplExit::EndOfInput);
        assert_eq!(
            err,
            "[ERROR](DNE) DOES NOT EXIST\n[ERROR](ARGC) NOT ENOUGH ARGUMENTS\n[ERROR](MALFORMED) MALFORMED INPUT\n"
        );
        assert!(out.contains("* START 'DONE'"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let registry = CommandRegistry::new();
        let (exit, out, err) = run_lines(&registry, &["", "   ", "q"]);
        assert_eq!(exit.unwrap(), ReplExit::Quit);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_clear_reports_success() {
        let registry = CommandRegistry::new();
        let (_, out, _) = run_lines(&registry, &["cls"]);
        assert!(out.ends_with("Command successful\n"));
    }

    #[test]
    fn test_duplicate_registry_aborts_before_reading() {
        let registry = CommandRegistry::from_commands(
            vec![Command::primary("help", &HELP_HANDLER), Command::alias("help", &HELP_HANDLER)],
            DocLayout::default(),
        );
        let (exit, out, _) = run_lines(&registry, &["help"]);
        let err = exit.unwrap_err();
        assert_eq!(
            err.downcast_ref::<DocError>(),
            Some(&DocError::DuplicateCommand("help".to_string()))
        );
        assert!(out.is_empty());
    }
}
