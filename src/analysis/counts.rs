// Occurrence counts per category or type label

use crate::error::Result;
use crate::parser::{read_programs, read_sources};
use std::collections::BTreeMap;
use std::path::Path;

/// Label to occurrence count, iterated in ascending label order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<String, usize>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a label
    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_insert(0) += 1;
    }

    /// Occurrences of a label (zero if never seen)
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every count
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::new();
        for label in iter {
            counts.add(label);
        }
        counts
    }
}

/// Per-category counts of the programs table
#[derive(Debug, Clone, Default)]
pub struct ProgramCounts {
    pub types: CategoryCounts,
    pub categories: CategoryCounts,
}

/// Count the categories of the sources table
pub fn count_source_categories(path: &Path) -> Result<CategoryCounts> {
    let sources = read_sources(path)?;
    Ok(sources.iter().map(|s| s.category.as_str()).collect())
}

/// Count the types and categories of the programs table
pub fn count_programs(path: &Path) -> Result<ProgramCounts> {
    let programs = read_programs(path)?;
    let mut counts = ProgramCounts::default();
    for program in &programs {
        counts.types.add(&program.program_type);
        counts.categories.add(&program.category);
    }
    Ok(counts)
}
