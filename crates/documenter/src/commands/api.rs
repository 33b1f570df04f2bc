use super::handler::{
    optional_arg,
    required_arg,
};
use super::{
    CommandContext,
    CommandHandler,
    CommandOutput,
};
use crate::docstring::ApiRouteDoc;
use crate::error::DocError;

/// Static instance of the api command handler
pub static API_HANDLER: ApiCommand = ApiCommand;

/// Generates the comment block for an API route.
#[derive(Clone, Copy)]
pub struct ApiCommand;

impl CommandHandler for ApiCommand {
    fn name(&self) -> &'static str {
        "api"
    }

    fn description(&self) -> &'static str {
        "Generate documentation for an API route"
    }

    fn usage(&self) -> &'static str {
        "api <METHOD> <ROUTE URI> [QUERY PARAMETERS] [RETURN]"
    }

    fn execute(&self, args: &[String], ctx: &CommandContext) -> Result<CommandOutput, DocError> {
        let doc = ApiRouteDoc {
            method: required_arg(args, 0, self.name(), "METHOD")?,
            route_uri: required_arg(args, 1, self.name(), "ROUTE URI")?,
            query_parameters: optional_arg(args, 2),
            returns: optional_arg(args, 3),
            ..Default::default()
        };
        Ok(CommandOutput::Text(ctx.layout.api_route_doc(&doc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<CommandOutput, DocError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        API_HANDLER.execute(&args, &CommandContext::default())
    }

    #[test]
    fn test_api_requires_method_and_route() {
        assert!(matches!(
            run(&[]),
            Err(DocError::InsufficientArguments { field: "METHOD", .. })
        ));
        assert!(matches!(
            run(&["GET"]),
            Err(DocError::InsufficientArguments { field: "ROUTE URI", .. })
        ));
    }

    #[test]
    fn test_api_optional_fields_default_to_none() {
        let CommandOutput::Text(doc) = run(&["DELETE", "/users/:id"]).unwrap() else {
            panic!("expected text output");
        };
        assert!(doc.contains("* METHOD:               DELETE\n"));
        assert!(doc.contains("* QUERY PARAMETERS:\n*                       None\n"));
        assert!(doc.ends_with("* RETURN:               None\n*/"));
    }

    #[test]
    fn test_api_extra_arguments_are_ignored() {
        assert_eq!(run(&["GET", "/", "a", "b"]), run(&["GET", "/", "a", "b", "extra"]));
    }
}
