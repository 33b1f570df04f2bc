//! Comment block templates for API routes, functions, and section banners.

mod wrap;

use serde::Deserialize;
pub use wrap::wrap;

pub const DEFAULT_LABEL_WIDTH: usize = 23;
pub const DEFAULT_BORDER_LENGTH: usize = 72;
pub const DEFAULT_WRAP_WIDTH: usize = 50;

/// Fallback text for optional fields that were not supplied.
pub const NONE_VALUE: &str = "None";

/// Widths used when rendering a comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocLayout {
    /// Column (after the leading `*`) where field values start.
    pub label_width: usize,
    /// Number of `*` in a section banner rule.
    pub border_length: usize,
    /// Maximum display width of a single value line before it wraps.
    pub wrap_width: usize,
}

impl Default for DocLayout {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            border_length: DEFAULT_BORDER_LENGTH,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Fields of an API route comment block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiRouteDoc<'a> {
    pub name: Option<&'a str>,
    pub method: &'a str,
    pub route_uri: &'a str,
    pub description: Option<&'a str>,
    /// Comma or newline separated list, one parameter per entry.
    pub query_parameters: Option<&'a str>,
    pub returns: Option<&'a str>,
}

impl DocLayout {
    pub fn section_doc(&self, name: &str) -> String {
        format!("{}\n{}", self.banner("START", name), self.banner("END", name))
    }

    pub fn api_route_doc(&self, doc: &ApiRouteDoc<'_>) -> String {
        let mut out = String::from("/** API ROUTE DEFINITION\n");
        if let Some(name) = doc.name {
            out.push_str(&self.labeled("NAME:", &self.value(name)));
        }
        out.push_str(&self.labeled("METHOD:", &self.value(doc.method)));
        out.push_str(&self.labeled("ROUTE URI:", &self.value(doc.route_uri)));
        if let Some(description) = doc.description {
            out.push_str("*\n");
            out.push_str(&self.paragraph(description));
        }
        out.push_str("*\n* QUERY PARAMETERS:\n");
        out.push_str(&self.block(&self.optional_list(doc.query_parameters)));
        out.push_str("*\n");
        out.push_str(&self.labeled("RETURN:", &self.optional_value(doc.returns)));
        out.push_str("*/");
        out
    }

    pub fn function_doc(&self, description: &str, arguments: Option<&str>, returns: Option<&str>) -> String {
        let mut out = String::from("/**\n");
        out.push_str(&self.paragraph(description));
        out.push_str("*\n* ARGUMENTS:\n");
        out.push_str(&self.block(&self.optional_list(arguments)));
        out.push_str("*\n");
        out.push_str(&self.labeled("RETURN:", &self.optional_value(returns)));
        out.push_str("*/");
        out
    }

    fn banner(&self, edge: &str, name: &str) -> String {
        let rule = "*".repeat(self.border_length);
        format!("/*\n{rule}\n* {edge} '{name}'\n{rule}\n*/")
    }

    /// Prefix of every line that continues a value under the value column.
    fn continuation(&self) -> String {
        format!("*{}", " ".repeat(self.label_width))
    }

    fn labeled(&self, label: &str, value: &str) -> String {
        let pad = self.label_width.saturating_sub(1);
        format!("* {label:<pad$}{value}\n")
    }

    fn block(&self, value: &str) -> String {
        format!("{}{value}\n", self.continuation())
    }

    fn paragraph(&self, text: &str) -> String {
        text.lines()
            .flat_map(|line| wrap(line, self.wrap_width))
            .map(|line| if line.is_empty() { "*\n".to_string() } else { format!("* {line}\n") })
            .collect()
    }

    /// Wraps a single value, continuation lines aligned under the value column.
    fn value(&self, value: &str) -> String {
        wrap(value, self.wrap_width).join(&format!("\n{}", self.continuation()))
    }

    /// Splits a multi-value field on commas and newlines, one entry per line. Blank entries are
    /// skipped; a field with no entries left renders as [`NONE_VALUE`].
    fn list(&self, value: &str) -> String {
        let lines: Vec<String> = value
            .split([',', '\n'])
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .flat_map(|entry| wrap(entry, self.wrap_width))
            .collect();
        if lines.is_empty() {
            return NONE_VALUE.to_string();
        }
        lines.join(&format!("\n{}", self.continuation()))
    }

    fn optional_value(&self, value: Option<&str>) -> String {
        value.map_or_else(|| NONE_VALUE.to_string(), |v| self.value(v))
    }

    fn optional_list(&self, value: Option<&str>) -> String {
        value.map_or_else(|| NONE_VALUE.to_string(), |v| self.list(v))
    }
}

/// Start and end banners for a named section, using the default layout.
pub fn generate_section_doc(name: &str) -> String {
    DocLayout::default().section_doc(name)
}

pub fn generate_api_route_doc(doc: &ApiRouteDoc<'_>) -> String {
    DocLayout::default().api_route_doc(doc)
}

pub fn generate_function_doc(description: &str, arguments: Option<&str>, returns: Option<&str>) -> String {
    DocLayout::default().function_doc(description, arguments, returns)
}
