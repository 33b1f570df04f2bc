use std::io::{
    IsTerminal,
    Write,
    stdin,
};
use std::path::PathBuf;
use std::process::ExitCode;

use anstream::{
    eprintln,
    println,
};
use clap::{
    ArgAction,
    Args,
    Parser,
    Subcommand,
};
use eyre::Result;
use tracing::{
    debug,
    info,
    warn,
};

use crate::commands::{
    CommandOutput,
    CommandRegistry,
};
use crate::constants::CLI_BINARY_NAME;
use crate::constants::ui_text::{
    COMMAND_SUCCESSFUL,
    WELCOME_TEXT,
};
use crate::error::error_line;
use crate::form::{
    DocType,
    prompt_form,
};
use crate::repl::{
    self,
    InputSource,
    ReplExit,
};
use crate::settings::{
    ReplSettings,
    Settings,
};

/// Generate fixed-layout doc comment blocks
#[derive(Debug, PartialEq, Parser)]
#[command(name = CLI_BINARY_NAME, version)]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Option<RootSubcommand>,
    /// Increase logging verbosity
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Args)]
pub struct ReplArgs {
    /// Neither load nor save input history
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum RootSubcommand {
    /// Start the interactive console (default)
    Repl(ReplArgs),
    /// Print an API route doc
    #[command(alias = "route")]
    Api {
        method: Option<String>,
        route_uri: Option<String>,
        /// Comma separated query parameters
        query_parameters: Option<String>,
        returns: Option<String>,
    },
    /// Print a function doc
    #[command(alias = "func")]
    Function {
        description: Option<String>,
        /// Comma separated arguments
        arguments: Option<String>,
        returns: Option<String>,
    },
    /// Print a section banner
    #[command(alias = "sect")]
    Section { name: Option<String> },
    /// Fill in a doc through interactive prompts
    Form {
        #[arg(long, value_enum)]
        doctype: Option<DocType>,
    },
}

impl Default for RootSubcommand {
    fn default() -> Self {
        Self::Repl(ReplArgs::default())
    }
}

/// Positional arguments up to the first one not given, so handlers see exactly what was typed.
fn positional<const N: usize>(args: [Option<String>; N]) -> Vec<String> {
    args.into_iter().map_while(|arg| arg).collect()
}

impl Cli {
    pub fn execute(self) -> Result<ExitCode> {
        let settings = Settings::load(self.config.as_deref())?;
        let registry = CommandRegistry::with_layout(settings.layout);
        registry.verify()?;

        let subcommand = self.subcommand.unwrap_or_default();
        debug!(?subcommand, "executing");

        match subcommand {
            RootSubcommand::Repl(args) => run_repl(&registry, settings.repl, &args),
            RootSubcommand::Api {
                method,
                route_uri,
                query_parameters,
                returns,
            } => one_shot(
                &registry,
                "api",
                &positional([method, route_uri, query_parameters, returns]),
            ),
            RootSubcommand::Function {
                description,
                arguments,
                returns,
            } => one_shot(&registry, "function", &positional([description, arguments, returns])),
            RootSubcommand::Section { name } => one_shot(&registry, "section", &positional([name])),
            RootSubcommand::Form { doctype } => run_form(&registry, doctype),
        }
    }
}

fn run_repl(registry: &CommandRegistry, mut settings: ReplSettings, args: &ReplArgs) -> Result<ExitCode> {
    if args.no_history {
        settings.history = false;
    }
    let interactive = stdin().is_terminal();
    if interactive {
        println!("{WELCOME_TEXT}\n");
    }

    let mut input = InputSource::new(registry, &settings)?;
    debug!(history = ?input.history_path(), "reading input");
    let exit = repl::run(
        registry,
        &mut input,
        &settings.prompt,
        &mut anstream::stdout(),
        &mut anstream::stderr(),
    )?;
    info!(?exit, "repl finished");
    if exit == ReplExit::EndOfInput && interactive {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

fn run_form(registry: &CommandRegistry, doc_type: Option<DocType>) -> Result<ExitCode> {
    let Some((doc_type, fields)) = prompt_form(doc_type)? else {
        return Ok(ExitCode::SUCCESS);
    };
    match fields.render(doc_type, registry.layout()) {
        Ok(doc) => {
            println!("{doc}");
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => {
            warn!(error = %err, "form incomplete");
            eprintln!("{}", error_line(&err));
            Ok(ExitCode::FAILURE)
        },
    }
}

fn one_shot(registry: &CommandRegistry, identifier: &str, args: &[String]) -> Result<ExitCode> {
    match registry.dispatch(identifier, args) {
        Ok(CommandOutput::Text(text)) => {
            let mut stdout = anstream::stdout().lock();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        },
        Ok(CommandOutput::ClearScreen | CommandOutput::Quit) => {
            println!("{COMMAND_SUCCESSFUL}");
            Ok(ExitCode::SUCCESS)
        },
        Err(err) if err.is_fatal() => Err(err.into()),
        Err(err) => {
            warn!(code = ?err.code(), error = %err, "command failed");
            eprintln!("{}", error_line(&err));
            Ok(ExitCode::FAILURE)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once(CLI_BINARY_NAME).chain(args.iter().copied()))
    }

    #[test]
    fn test_default_is_repl() {
        let cli = parse(&[]);
        assert_eq!(cli.subcommand, None);
        assert_eq!(cli.subcommand.unwrap_or_default(), RootSubcommand::Repl(ReplArgs::default()));
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["-vv", "--config", "/tmp/s.toml", "repl", "--no-history"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.toml")));
        assert_eq!(
            cli.subcommand,
            Some(RootSubcommand::Repl(ReplArgs { no_history: true }))
        );

        let cli = parse(&["section", "INIT", "-v"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_one_shot_arguments() {
        let cli = parse(&["route", "GET", "/users", "id, name"]);
        assert_eq!(
            cli.subcommand,
            Some(RootSubcommand::Api {
                method: Some("GET".to_string()),
                route_uri: Some("/users".to_string()),
                query_parameters: Some("id, name".to_string()),
                returns: None,
            })
        );
        assert_eq!(parse(&["sect"]).subcommand, Some(RootSubcommand::Section { name: None }));

        assert_eq!(positional([Some("a".to_string()), None, Some("c".to_string())]), vec![
            "a".to_string()
        ]);
        assert!(positional::<1>([None]).is_empty());
    }

    #[test]
    fn test_form_doctype() {
        let cli = parse(&["form", "--doctype", "api-route"]);
        assert_eq!(
            cli.subcommand,
            Some(RootSubcommand::Form {
                doctype: Some(DocType::ApiRoute)
            })
        );
        assert!(Cli::try_parse_from([CLI_BINARY_NAME, "form", "--doctype", "class"]).is_err());
    }

    #[test]
    fn test_missing_argument_fails() {
        let registry = CommandRegistry::new();
        let code = one_shot(&registry, "section", &[]).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        let code = one_shot(&registry, "section", &["INIT".to_string()]).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
