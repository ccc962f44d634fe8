// Function extraction
//
// Joins the prototype listing with the tag index (function -> file) and the
// sources table (file -> category) to describe every exported function.

use crate::analysis::CategoryCounts;
use crate::error::{Error, Result};
use crate::parser::{read_function_tags, read_sources, PrototypeParser};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Category suffix marking placeholder implementations
pub const STUB_CATEGORY_SUFFIX: &str = "stub functions";

/// An exported function and where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub filename: String,
    pub category: String,
    pub name: String,
    pub return_type: String,
    pub arguments: String,
}

/// Every retained function, keyed and ordered by name, with per-category counts
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    pub functions: BTreeMap<String, FunctionRecord>,
    pub category_counts: CategoryCounts,
}

impl FunctionTable {
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &FunctionRecord> {
        self.functions.values()
    }
}

/// Whether a category marks stub functions
pub fn is_stub_category(category: &str) -> bool {
    category.to_lowercase().ends_with(STUB_CATEGORY_SUFFIX)
}

/// Where a function is defined
#[derive(Debug, Clone)]
struct Definition {
    filename: String,
    category: String,
    line: Option<u32>,
}

/// Builds the function table from the three inputs
pub struct FunctionExtractor {
    parser: PrototypeParser,
}

impl FunctionExtractor {
    /// Create an extractor for prototypes carrying the given export marker
    pub fn new(export_marker: &str) -> Result<Self> {
        Ok(Self {
            parser: PrototypeParser::new(export_marker)?,
        })
    }

    /// Extract every non-stub exported function
    pub fn extract(&self, protos: &Path, tags: &Path, sources: &Path) -> Result<FunctionTable> {
        let categories = file_categories(sources)?;
        let definitions = function_definitions(tags, &categories)?;

        let mut table = FunctionTable::default();
        let mut stubs = 0usize;

        for proto in self.parser.parse_file(protos)? {
            let definition = definitions.get(&proto.name).ok_or_else(|| Error::MissingTag {
                function: proto.name.clone(),
                protos: protos.to_path_buf(),
            })?;

            if is_stub_category(&definition.category) {
                tracing::trace!(
                    function = %proto.name,
                    file = %definition.filename,
                    line = ?definition.line,
                    "skipping stub function"
                );
                stubs += 1;
                continue;
            }

            let record = FunctionRecord {
                filename: definition.filename.clone(),
                category: definition.category.clone(),
                name: proto.name.clone(),
                return_type: proto.return_type,
                arguments: proto.arguments,
            };

            if table.functions.insert(proto.name, record).is_none() {
                table.category_counts.add(&definition.category);
            }
        }

        tracing::debug!(
            functions = table.len(),
            categories = table.category_counts.len(),
            stubs,
            "extracted functions"
        );
        Ok(table)
    }
}

/// Map lower-cased filename to category
fn file_categories(sources: &Path) -> Result<HashMap<String, String>> {
    Ok(read_sources(sources)?
        .into_iter()
        .map(|s| (s.filename.to_lowercase(), s.category))
        .collect())
}

/// Map function name to its defining file and that file's category
fn function_definitions(
    tags: &Path,
    categories: &HashMap<String, String>,
) -> Result<HashMap<String, Definition>> {
    let mut definitions = HashMap::new();

    for entry in read_function_tags(tags)? {
        let category = categories
            .get(&entry.file.to_lowercase())
            .ok_or_else(|| Error::UnknownSourceFile {
                file: entry.file.clone(),
                tags: tags.to_path_buf(),
            })?;

        let line = entry.line_number();
        let previous = definitions.insert(
            entry.name.clone(),
            Definition {
                filename: entry.file,
                category: category.clone(),
                line,
            },
        );
        if let Some(previous) = previous {
            tracing::debug!(
                function = %entry.name,
                earlier = %previous.filename,
                earlier_line = ?previous.line,
                line = ?line,
                "duplicate tag, keeping the later entry"
            );
        }
    }

    Ok(definitions)
}
