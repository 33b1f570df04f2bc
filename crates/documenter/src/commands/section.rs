use super::handler::required_arg;
use super::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::error::DocError;

/// Static instance of the section command handler
pub static SECTION_HANDLER: SectionCommand = SectionCommand;

/// Generates start and end banners for a section.
#[derive(Clone, Copy)]
pub struct SectionCommand;

impl CommandHandler for SectionCommand {
    fn name(&self) -> &'static str {
        "section"
    }

    fn description(&self) -> &'static str {
        "Generate start and end banners for a section"
    }

    fn usage(&self) -> &'static str {
        "section <NAME>"
    }

    fn execute(&self, args: &[String], ctx: &CommandContext) -> Result<CommandOutput, DocError> {
        let name = required_arg(args, 0, self.name(), "NAME")?;
        Ok(CommandOutput::Text(ctx.layout.section_doc(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docstring::generate_section_doc;

    #[test]
    fn test_section() {
        let out = SECTION_HANDLER
            .execute(&["INIT".to_string()], &CommandContext::default())
            .unwrap();
        assert_eq!(out, CommandOutput::Text(generate_section_doc("INIT")));
    }

    #[test]
    fn test_section_without_name() {
        assert!(SECTION_HANDLER.execute(&[], &CommandContext::default()).is_err());
        assert!(SECTION_HANDLER.execute(&[String::new()], &CommandContext::default()).is_err());
    }
}
