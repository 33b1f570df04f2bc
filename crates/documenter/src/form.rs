//! Form front end: pick a doc type, then fill in only the fields that doc type uses.

use std::io::{
    ErrorKind,
    IsTerminal,
    stdin,
};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{
    Input,
    Select,
};
use eyre::{
    Result,
    WrapErr,
    bail,
};
use strum::IntoEnumIterator;

use crate::docstring::{
    ApiRouteDoc,
    DocLayout,
};
use crate::error::DocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum DocType {
    ApiRoute,
    Function,
    Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Method,
    RouteUri,
    QueryParameters,
    Arguments,
    Return,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "NAME",
            FormField::Description => "DESCRIPTION",
            FormField::Method => "METHOD",
            FormField::RouteUri => "ROUTE URI",
            FormField::QueryParameters => "QUERY PARAMETERS",
            FormField::Arguments => "ARGUMENTS",
            FormField::Return => "RETURN",
        }
    }

    /// Fields holding several comma separated entries.
    pub fn is_multi_value(&self) -> bool {
        matches!(self, FormField::QueryParameters | FormField::Arguments)
    }
}

impl DocType {
    /// Fields shown for this doc type, in prompt order.
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            DocType::ApiRoute => &[
                FormField::Name,
                FormField::Method,
                FormField::RouteUri,
                FormField::Description,
                FormField::QueryParameters,
                FormField::Return,
            ],
            DocType::Function => &[FormField::Description, FormField::Arguments, FormField::Return],
            DocType::Section => &[FormField::Name],
        }
    }

    /// Fields that must be filled in before the doc can be rendered.
    pub fn required_fields(&self) -> &'static [FormField] {
        match self {
            DocType::ApiRoute => &[FormField::Method, FormField::RouteUri],
            DocType::Function => &[FormField::Description],
            DocType::Section => &[FormField::Name],
        }
    }

    fn command_name(&self) -> &'static str {
        match self {
            DocType::ApiRoute => "api",
            DocType::Function => "function",
            DocType::Section => "section",
        }
    }
}

/// Answers collected by the form. Blank answers are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub method: Option<String>,
    pub route_uri: Option<String>,
    pub query_parameters: Option<String>,
    pub arguments: Option<String>,
    pub returns: Option<String>,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Method => &self.method,
            FormField::RouteUri => &self.route_uri,
            FormField::QueryParameters => &self.query_parameters,
            FormField::Arguments => &self.arguments,
            FormField::Return => &self.returns,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let value = (!value.trim().is_empty()).then_some(value);
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Method => self.method = value,
            FormField::RouteUri => self.route_uri = value,
            FormField::QueryParameters => self.query_parameters = value,
            FormField::Arguments => self.arguments = value,
            FormField::Return => self.returns = value,
        }
    }

    fn required(&self, doc_type: DocType, field: FormField) -> Result<&str, DocError> {
        self.get(field).ok_or(DocError::InsufficientArguments {
            command: doc_type.command_name(),
            field: field.label(),
            position: doc_type.fields().iter().position(|f| *f == field).unwrap_or(0) + 1,
        })
    }

    /// Renders the doc for `doc_type`. Fields the doc type does not show are ignored.
    pub fn render(&self, doc_type: DocType, layout: &DocLayout) -> Result<String, DocError> {
        Ok(match doc_type {
            DocType::ApiRoute => layout.api_route_doc(&ApiRouteDoc {
                name: self.get(FormField::Name),
                method: self.required(doc_type, FormField::Method)?,
                route_uri: self.required(doc_type, FormField::RouteUri)?,
                description: self.get(FormField::Description),
                query_parameters: self.get(FormField::QueryParameters),
                returns: self.get(FormField::Return),
            }),
            DocType::Function => layout.function_doc(
                self.required(doc_type, FormField::Description)?,
                self.get(FormField::Arguments),
                self.get(FormField::Return),
            ),
            DocType::Section => layout.section_doc(self.required(doc_type, FormField::Name)?),
        })
    }
}

pub fn dialoguer_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: dialoguer::console::style("?".into()).for_stderr().magenta(),
        ..ColorfulTheme::default()
    }
}

/// Asks for the doc type (unless given) and then for each of its fields.
///
/// Returns `None` when the user backs out of the doc type selection.
pub fn prompt_form(doc_type: Option<DocType>) -> Result<Option<(DocType, FormFields)>> {
    if !stdin().is_terminal() {
        bail!("the form needs an interactive terminal");
    }
    let theme = dialoguer_theme();

    let doc_type = match doc_type {
        Some(doc_type) => doc_type,
        None => {
            let items: Vec<DocType> = DocType::iter().collect();
            let selection = match Select::with_theme(&theme)
                .with_prompt("Doc type")
                .items(&items)
                .default(0)
                .interact_opt()
            {
                Ok(selection) => selection,
                Err(dialoguer::Error::IO(io)) if io.kind() == ErrorKind::Interrupted => None,
                Err(e) => return Err(e).wrap_err("Failed to choose a doc type"),
            };
            match selection {
                Some(index) => items[index],
                None => return Ok(None),
            }
        },
    };

    let mut fields = FormFields::default();
    for field in doc_type.fields() {
        let prompt = if field.is_multi_value() {
            format!("{} (comma separated)", field.label())
        } else {
            field.label().to_string()
        };
        let answer: String = Input::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(!doc_type.required_fields().contains(field))
            .interact_text()
            .wrap_err_with(|| format!("Failed to read {}", field.label()))?;
        fields.set(*field, answer);
    }

    Ok(Some((doc_type, fields)))
}
