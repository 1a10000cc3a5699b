//! HTML report generation using Tera templates

use super::ReportRenderer;
use crate::error::Result;
use crate::models::Table;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tera::{Context, Tera, Value};
use tracing::info;

const LINK_PREFIX: &str = "https://";

/// One `Label: value` line inside a list item
#[derive(Debug, Serialize)]
struct HtmlCell<'a> {
    label: &'a str,
    value: &'a str,
    link: bool,
}

/// Tera filter encoding only `&`, `<` and `>`.
///
/// Slashes and quotes stay as they are, so versions and URLs read the same
/// in the report source as in the scan export.
fn html_text(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("html_text expects a string"))?;
    let encoded = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    Ok(Value::String(encoded))
}

/// Renders each row as an ordered-list item
pub struct HtmlRenderer {
    template: Option<PathBuf>,
}

impl HtmlRenderer {
    /// `template` replaces the built-in layout when given
    pub fn new(template: Option<PathBuf>) -> Self {
        Self { template }
    }

    /// Builds the whole document in memory
    pub fn render_string(&self, table: &Table) -> Result<String> {
        let template_content = match self.template {
            Some(ref path) => std::fs::read_to_string(path)?,
            None => default_template().to_string(),
        };

        // Registered without an .html suffix so Tera does not autoescape;
        // cells go through `html_text` instead.
        let mut tera = Tera::default();
        tera.register_filter("html_text", html_text);
        tera.add_raw_template("report", &template_content)?;

        let items: Vec<Vec<HtmlCell>> = table
            .rows
            .iter()
            .map(|row| {
                table
                    .header
                    .iter()
                    .zip(row)
                    .map(|(label, value)| HtmlCell {
                        label,
                        value,
                        link: value.starts_with(LINK_PREFIX),
                    })
                    .collect()
            })
            .collect();

        let mut context = Context::new();
        context.insert("items", &items);
        context.insert("columns", &table.header);
        context.insert("total_rows", &table.rows.len());
        context.insert("version", env!("CARGO_PKG_VERSION"));

        Ok(tera.render("report", &context)?)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ReportRenderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, table: &Table, output_path: &Path) -> Result<()> {
        let rendered = self.render_string(table)?;
        std::fs::write(output_path, rendered)?;
        info!("HTML report saved to {}", output_path.display());
        Ok(())
    }
}

fn default_template() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta http-equiv="X-UA-Compatible" content="IE=edge" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Clean logs</title>
  </head>
  <body>
    <ol>
{% for item in items %}<li>{% for cell in item %}{% if cell.link %}{{ cell.label | html_text }}: <a href={{ cell.value | html_text }}>{{ cell.value | html_text }}</a><br>{% else %}{{ cell.label | html_text }}: {{ cell.value | html_text }}<br>{% endif %}{% endfor %}</li><br><br><br>
{% endfor %}    </ol>
  </body>
</html>
"#
}
