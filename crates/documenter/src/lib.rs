//! Fixed-layout doc comment generator: a small command console, a tokenizer for its input, and
//! the templates the commands fill in.

pub mod cli;
pub mod commands;
pub mod constants;
pub mod docstring;
pub mod error;
pub mod form;
pub mod logging;
pub mod repl;
pub mod settings;
pub mod tokenizer;

pub use commands::CommandRegistry;
pub use error::DocError;
pub use tokenizer::tokenize;
