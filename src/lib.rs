//! gentables - sortable HTML reference tables for a C library
//!
//! Turns the sources and programs CSV listings, plus the exported prototypes
//! cross-referenced through a ctags index, into HTML tables for
//! sort-filter-table.js and per-category summary tables.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod output;
pub mod parser;

// Re-export main types
pub use analysis::{CategoryCounts, FunctionExtractor, FunctionRecord, FunctionTable};
pub use config::Config;
pub use driver::{Driver, GenerationReport, Inputs};
pub use error::{Error, Result};
pub use output::{CsvTable, SummaryTable, TableSpec, TemplateEngine};
