// Two-column summary tables (label, count) with a totals footer

use crate::analysis::CategoryCounts;
use crate::error::Result;
use crate::output::templates::TemplateEngine;
use serde::Serialize;
use tera::Context;

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    label: &'a str,
    count: usize,
}

/// A count table and its labelling
#[derive(Debug, Clone, Copy)]
pub struct SummaryTable<'a> {
    pub table_id: &'a str,
    /// Heading of the label column, e.g. "Category"
    pub heading: &'a str,
    /// Noun used in the footer, e.g. "Categories"
    pub plural: &'a str,
    pub counts: &'a CategoryCounts,
}

impl<'a> SummaryTable<'a> {
    pub fn new(table_id: &'a str, heading: &'a str, plural: &'a str, counts: &'a CategoryCounts) -> Self {
        Self {
            table_id,
            heading,
            plural,
            counts,
        }
    }

    /// Render the table fragment
    pub fn render(&self, engine: &TemplateEngine) -> Result<String> {
        let rows: Vec<SummaryRow> = self
            .counts
            .iter()
            .map(|(label, count)| SummaryRow { label, count })
            .collect();

        let mut context = Context::new();
        context.insert("table_id", self.table_id);
        context.insert("heading", self.heading);
        context.insert("plural", self.plural);
        context.insert("rows", &rows);
        context.insert("total", &self.counts.total());

        engine.render("summary_table.html", &context)
    }
}
