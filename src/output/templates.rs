// Template engine for generating HTML output

use crate::config::PageConfig;
use crate::error::Result;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

/// Template engine wrapping Tera with the embedded table templates
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a new template engine with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("page.html", include_str!("../../templates/page.html.tera")),
            ("csv_table.html", include_str!("../../templates/csv_table.html.tera")),
            ("summary_table.html", include_str!("../../templates/summary_table.html.tera")),
        ])?;

        // Cells are escaped explicitly: only & < > are touched, and some
        // cells carry generated <br /> markup.
        tera.autoescape_on(vec![]);
        tera.register_filter("escape_cell", escape_cell_filter);

        Ok(Self { tera })
    }

    /// Render a template with context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Wrap a table fragment in a complete document
    pub fn render_page(&self, body: &str, page: &PageConfig) -> Result<String> {
        let mut context = Context::new();
        context.insert("stylesheet", &page.stylesheet);
        context.insert("script", &page.script);
        context.insert("body", body);

        self.render("page.html", &context)
    }
}

/// Escape `&`, `<` and `>`, in that order
pub fn escape_cell(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape a cell and put a line break after every comma
pub fn break_after_commas(s: &str) -> String {
    escape_cell(s).replace(',', ",<br />")
}

fn escape_cell_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().unwrap_or("");
    Ok(Value::String(escape_cell(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("<b>&amp;</b>"), "&lt;b&gt;&amp;amp;&lt;/b&gt;");
        assert_eq!(escape_cell("a & b"), "a &amp; b");
        assert_eq!(escape_cell("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_break_after_commas() {
        assert_eq!(
            break_after_commas("PIX *pixd, PIX *pixs"),
            "PIX *pixd,<br /> PIX *pixs"
        );
        assert_eq!(break_after_commas("void"), "void");
    }

    #[test]
    fn test_escape_cell_filter() {
        let value = Value::String("a<b".to_string());
        let result = escape_cell_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(result.as_str().unwrap(), "a&lt;b");
    }

    #[test]
    fn test_render_page() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render_page(" <table id=\"t\"></table>\n", &PageConfig::default())
            .unwrap();

        assert!(html.starts_with("<html>"));
        assert!(html.contains("href=\"sort-filter-table.css\""));
        assert!(html.contains("src=\"sort-filter-table-compact.js\""));
        assert!(html.contains("<body>\n <table id=\"t\"></table>\n</body>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
