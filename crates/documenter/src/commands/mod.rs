pub mod api;
pub mod clear;
pub mod function;
pub mod handler;
pub mod help;
pub mod quit;
pub mod registry;
pub mod section;

pub use api::ApiCommand;
pub use clear::ClearCommand;
pub use function::FunctionCommand;
pub use handler::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
pub use help::HelpCommand;
pub use quit::QuitCommand;
pub use registry::{
    Command,
    CommandRegistry,
};
pub use section::SectionCommand;
