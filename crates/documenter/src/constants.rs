//! Centralized constants for names, paths, and user-facing messages

pub const CLI_BINARY_NAME: &str = "documenter";

/// Directory name used under the platform config, data, and cache directories
pub const APP_DIR_NAME: &str = "documenter";

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub const HISTORY_FILE_NAME: &str = "history.txt";

pub const LOG_FILE_NAME: &str = "documenter.log";

/// Environment variable holding the filter for the log file, e.g. `debug` or `documenter=trace`
pub const LOG_LEVEL_ENV: &str = "DOCUMENTER_LOG_LEVEL";

pub const DEFAULT_PROMPT: &str = "$ ";

/// UI text constants
pub mod ui_text {
    /// Printed after a command that has no text of its own
    pub const COMMAND_SUCCESSFUL: &str = "Command successful";

    pub const WELCOME_TEXT: &str = color_print::cstr! {"<em>Welcome to <cyan!>Documenter</cyan!>!</em> <black!>Type <green!>help</green!> for commands, <green!>quit</green!> to exit.</black!>"};
}
