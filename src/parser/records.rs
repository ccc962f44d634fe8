// Readers for the sources and programs tables
//
// Both tables are excel-dialect CSV with a header row. Rows are read
// positionally, so the header names themselves are never interpreted here.
// Bytes that are not UTF-8 are replaced rather than rejected.

use crate::error::{Error, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::path::Path;

/// Columns in the sources table: Filename,Category,Description
pub const SOURCE_COLUMNS: usize = 3;

/// Columns in the programs table: Filename,Type,Category,Description,ExampleFile,NeedsInput
pub const PROGRAM_COLUMNS: usize = 6;

/// One row of the sources table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub filename: String,
    pub category: String,
    pub description: String,
}

/// One row of the programs table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRecord {
    pub filename: String,
    pub program_type: String,
    pub category: String,
    pub description: String,
    pub example_file: String,
    pub needs_input: String,
}

/// A CSV file split into its header row and data rows
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

/// Read a whole CSV table. Every data row must be as wide as the header.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let headers = lossy_record(reader.byte_headers().map_err(|e| csv_error(path, e))?);
    if headers.is_empty() {
        return Err(Error::malformed(path, "missing header row"));
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        rows.push(lossy_record(&record.map_err(|e| csv_error(path, e))?));
    }

    tracing::debug!(path = %path.display(), columns = headers.len(), rows = rows.len(), "read table");
    Ok(RawTable { headers, rows })
}

fn lossy_record(record: &ByteRecord) -> StringRecord {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// Read a table and insist on an exact column count
fn read_table_with_width(path: &Path, width: usize) -> Result<RawTable> {
    let table = read_table(path)?;
    if table.headers.len() != width {
        return Err(Error::malformed(
            path,
            format!("expected {} columns, found {}", width, table.headers.len()),
        ));
    }
    Ok(table)
}

/// Read every row of the sources table
pub fn read_sources(path: &Path) -> Result<Vec<SourceRecord>> {
    let table = read_table_with_width(path, SOURCE_COLUMNS)?;
    Ok(table
        .rows
        .iter()
        .map(|row| SourceRecord {
            filename: row[0].to_string(),
            category: row[1].to_string(),
            description: row[2].to_string(),
        })
        .collect())
}

/// Read every row of the programs table
pub fn read_programs(path: &Path) -> Result<Vec<ProgramRecord>> {
    let table = read_table_with_width(path, PROGRAM_COLUMNS)?;
    Ok(table
        .rows
        .iter()
        .map(|row| ProgramRecord {
            filename: row[0].to_string(),
            program_type: row[1].to_string(),
            category: row[2].to_string(),
            description: row[3].to_string(),
            example_file: row[4].to_string(),
            needs_input: row[5].to_string(),
        })
        .collect())
}

/// Turn row-width mismatches into malformed-input errors naming the line
fn csv_error(path: &Path, err: csv::Error) -> Error {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
        return Error::malformed(
            path,
            format!("line {} has {} fields, expected {}", line, len, expected_len),
        );
    }
    Error::Csv(err)
}
