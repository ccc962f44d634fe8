// Sortable, filterable HTML table from a CSV file
//
// The markup targets sort-filter-table.js: sorting, filtering and paging
// all happen client-side, this only emits the classes and placeholders.

use crate::error::Result;
use crate::output::templates::{break_after_commas, escape_cell, TemplateEngine};
use crate::parser::read_table;
use serde::Serialize;
use std::path::Path;
use tera::Context;

/// How to present one CSV file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Trailing columns rendered without sort/filter controls
    pub unsortable_columns: usize,
    /// Column whose commas become line breaks
    pub break_commas_column: Option<usize>,
    /// Rows per page; enables the pager row
    pub page_length: Option<usize>,
}

/// A header column and the controls it gets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub title: String,
    pub sortable: bool,
    /// Width of the text filter box, for columns that get one
    pub filter_size: Option<u32>,
}

impl Column {
    fn new(title: &str, sortable: bool) -> Self {
        let filter_size = match title.to_lowercase().as_str() {
            "filename" => Some(10),
            "description" | "function" => Some(30),
            _ => None,
        };

        Self {
            title: title.to_string(),
            sortable,
            filter_size,
        }
    }
}

/// A CSV file ready to render
#[derive(Debug, Clone, Serialize)]
pub struct CsvTable {
    pub table_id: String,
    pub columns: Vec<Column>,
    /// Body cells, already escaped
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
    pub page_length: Option<usize>,
    pub pager_span: usize,
}

impl CsvTable {
    /// Read a CSV file and prepare its cells
    pub fn load(path: &Path, spec: &TableSpec) -> Result<Self> {
        let raw = read_table(path)?;

        let width = raw.headers.len();
        let first_unsortable = width.saturating_sub(spec.unsortable_columns);
        let columns = raw
            .headers
            .iter()
            .enumerate()
            .map(|(i, title)| Column::new(title, i < first_unsortable))
            .collect();

        let rows: Vec<Vec<String>> = raw
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if spec.break_commas_column == Some(i) {
                            break_after_commas(cell)
                        } else {
                            escape_cell(cell)
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            table_id: table_id(path),
            columns,
            row_count: rows.len(),
            rows,
            page_length: spec.page_length,
            pager_span: width.saturating_sub(2).max(1),
        })
    }

    /// Render the table fragment
    pub fn render(&self, engine: &TemplateEngine) -> Result<String> {
        let context = Context::from_serialize(self)?;
        engine.render("csv_table.html", &context)
    }
}

/// Element id for a table: the input file stem
pub fn table_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
