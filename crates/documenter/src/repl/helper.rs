use std::borrow::Cow;

use crossterm::style::Stylize;
use rustyline::completion::{
    Completer,
    Pair,
};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Context,
    Helper,
};

use crate::commands::CommandRegistry;

/// Line editor helper completing the first word of a line against the primary command identifiers.
#[derive(Debug, Clone)]
pub struct DocHelper {
    commands: Vec<&'static str>,
}

impl DocHelper {
    pub fn new(registry: &CommandRegistry) -> Self {
        Self {
            commands: registry.primary_identifiers(),
        }
    }

    /// Candidates for the text before the cursor; empty once the command word is finished.
    fn candidates(&self, typed: &str) -> Vec<&'static str> {
        if typed.contains(' ') {
            return Vec::new();
        }
        self.commands
            .iter()
            .copied()
            .filter(|command| command.starts_with(typed))
            .collect()
    }
}

impl Helper for DocHelper {}

impl Validator for DocHelper {}

impl Completer for DocHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let pairs = self
            .candidates(&line[..pos])
            .into_iter()
            .map(|command| Pair {
                display: command.to_string(),
                replacement: command.to_string(),
            })
            .collect();
        Ok((0, pairs))
    }
}

impl Hinter for DocHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if line.is_empty() || pos < line.len() {
            return None;
        }
        match self.candidates(line).as_slice() {
            [only] if *only != line => Some(only[line.len()..].to_string()),
            _ => None,
        }
    }
}

impl Highlighter for DocHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dark_grey().to_string())
    }
}

#[cfg(test)]
mod tests {
    use rustyline::history::DefaultHistory;

    use super::*;

    fn complete(line: &str) -> (usize, Vec<String>) {
        let helper = DocHelper::new(&CommandRegistry::new());
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = helper.complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|p| p.replacement).collect())
    }

    fn hint(line: &str) -> Option<String> {
        let helper = DocHelper::new(&CommandRegistry::new());
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        helper.hint(line, line.len(), &ctx)
    }

    #[test]
    fn test_complete_command_word() {
        assert_eq!(complete("se"), (0, vec!["section".to_string()]));
        assert_eq!(complete("").1.len(), 6);
        assert!(complete("zz").1.is_empty());
    }

    #[test]
    fn test_no_completion_after_command_word() {
        assert!(complete("section se").1.is_empty());
        assert!(complete("api ").1.is_empty());
    }

    #[test]
    fn test_hint_shows_rest_of_unique_command() {
        assert_eq!(hint("fun"), Some("ction".to_string()));
        assert_eq!(hint("quit"), None);
        assert_eq!(hint(""), None);
        assert_eq!(hint("api GET"), None);
    }
}
