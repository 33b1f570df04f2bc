use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::{
    CompletionType,
    Config,
};
use tracing::{
    debug,
    error,
    warn,
};

use super::helper::DocHelper;
use crate::commands::CommandRegistry;
use crate::settings::ReplSettings;

#[derive(Debug)]
pub struct InputSource(inner::Inner);

mod inner {
    use std::path::PathBuf;

    use rustyline::Editor;
    use rustyline::history::FileHistory;

    use super::super::helper::DocHelper;

    #[derive(Debug)]
    pub enum Inner {
        Readline {
            editor: Box<Editor<DocHelper, FileHistory>>,
            history_path: Option<PathBuf>,
        },
        Mock {
            index: usize,
            lines: Vec<String>,
        },
    }
}

impl Drop for InputSource {
    fn drop(&mut self) {
        if let Err(err) = self.save_history() {
            error!(%err, "failed to save history");
        }
    }
}

impl InputSource {
    pub fn new(registry: &CommandRegistry, settings: &ReplSettings) -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .auto_add_history(false)
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .build();
        let mut editor = rustyline::Editor::with_config(config)?;
        editor.set_helper(Some(DocHelper::new(registry)));

        let history_path = settings.history_path();
        if let Some(path) = &history_path {
            if path.exists() {
                if let Err(err) = editor.load_history(path.as_path()) {
                    warn!(%err, path = %path.display(), "failed to load history");
                }
            }
        }

        Ok(Self(inner::Inner::Readline {
            editor: Box::new(editor),
            history_path,
        }))
    }

    pub fn new_mock(lines: Vec<String>) -> Self {
        Self(inner::Inner::Mock { index: 0, lines })
    }

    /// Appends this session's entries to the history file, creating its directory on first use.
    pub fn save_history(&mut self) -> Result<(), ReadlineError> {
        if let inner::Inner::Readline {
            editor,
            history_path: Some(path),
        } = &mut self.0
        {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            editor.append_history(path.as_path())?;
            debug!(path = %path.display(), "saved history");
        }
        Ok(())
    }

    pub fn history_path(&self) -> Option<&PathBuf> {
        match &self.0 {
            inner::Inner::Readline { history_path, .. } => history_path.as_ref(),
            inner::Inner::Mock { .. } => None,
        }
    }

    /// Reads the next line. `Ok(None)` means end of input; Ctrl-C abandons the current line and
    /// yields an empty one.
    pub fn read_line(&mut self, prompt: Option<&str>) -> Result<Option<String>, ReadlineError> {
        match &mut self.0 {
            inner::Inner::Readline { editor, .. } => {
                let line = Self::interpret(editor.readline(prompt.unwrap_or_default()))?;
                if let Some(line) = &line {
                    if Self::should_append_history(line) {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                }
                Ok(line)
            },
            inner::Inner::Mock { index, lines } => {
                *index += 1;
                Ok(lines.get(*index - 1).cloned())
            },
        }
    }

    fn interpret(result: Result<String, ReadlineError>) -> Result<Option<String>, ReadlineError> {
        match result {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn should_append_history(line: &str) -> bool {
        !line.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_lines_then_ends() {
        let lines: Vec<String> = ["help", "section INIT", "quit"].map(String::from).into();
        let mut input = InputSource::new_mock(lines.clone());

        let mut read = Vec::new();
        while let Some(line) = input.read_line(Some("$ ")).unwrap() {
            read.push(line);
        }
        assert_eq!(read, lines);
        assert_eq!(input.read_line(None).unwrap(), None);
        assert!(input.history_path().is_none());
        input.save_history().unwrap();
    }

    #[test]
    fn test_history_path_follows_settings() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("history.txt");
        let registry = CommandRegistry::new();
        let settings = ReplSettings {
            history_file: Some(file.clone()),
            ..Default::default()
        };
        let input = InputSource::new(&registry, &settings).unwrap();
        assert_eq!(input.history_path(), Some(&file));
        drop(input);

        let settings = ReplSettings {
            history: false,
            ..settings
        };
        assert_eq!(InputSource::new(&registry, &settings).unwrap().history_path(), None);
    }

    #[test]
    fn test_interrupt_yields_empty_line() {
        assert_eq!(
            InputSource::interpret(Err(ReadlineError::Interrupted)).unwrap(),
            Some(String::new())
        );
        assert_eq!(InputSource::interpret(Err(ReadlineError::Eof)).unwrap(), None);
        assert_eq!(
            InputSource::interpret(Ok("q".to_string())).unwrap(),
            Some("q".to_string())
        );
        assert!(InputSource::interpret(Err(ReadlineError::Io(std::io::Error::other("gone")))).is_err());
    }

    #[test]
    fn test_should_append_history() {
        assert!(InputSource::should_append_history("api GET /"));
        assert!(!InputSource::should_append_history("   "));
        assert!(!InputSource::should_append_history(""));
    }
}
