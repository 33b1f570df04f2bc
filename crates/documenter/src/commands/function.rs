use super::handler::{
    optional_arg,
    required_arg,
};
use super::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::error::DocError;

/// Static instance of the function command handler
pub static FUNCTION_HANDLER: FunctionCommand = FunctionCommand;

/// Generates the comment block for a function.
#[derive(Clone, Copy)]
pub struct FunctionCommand;

impl CommandHandler for FunctionCommand {
    fn name(&self) -> &'static str {
        "function"
    }

    fn description(&self) -> &'static str {
        "Generate documentation for a function"
    }

    fn usage(&self) -> &'static str {
        "function <DESCRIPTION> [ARGUMENTS] [RETURN]"
    }

    fn execute(&self, args: &[String], ctx: &CommandContext) -> Result<CommandOutput, DocError> {
        let description = required_arg(args, 0, self.name(), "DESCRIPTION")?;
        Ok(CommandOutput::Text(ctx.layout.function_doc(
            description,
            optional_arg(args, 1),
            optional_arg(args, 2),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_requires_description() {
        let err = FUNCTION_HANDLER
            .execute(&[], &CommandContext::default())
            .unwrap_err();
        assert_eq!(err, DocError::InsufficientArguments {
            command: "function",
            field: "DESCRIPTION",
            position: 1,
        });
    }

    #[test]
    fn test_function_renders_arguments() {
        let args = vec!["Reads a file".to_string(), "path,mode".to_string()];
        let CommandOutput::Text(doc) = FUNCTION_HANDLER.execute(&args, &CommandContext::default()).unwrap() else {
            panic!("expected text output");
        };
        assert!(doc.starts_with("/**\n* Reads a file\n"));
        assert!(doc.contains("*                       path\n*                       mode\n"));
    }
}
