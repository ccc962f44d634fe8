// functions.csv writer

use crate::analysis::FunctionTable;
use crate::error::Result;
use csv::Writer;
use std::path::Path;

/// Header of the functions table
pub const FUNCTIONS_HEADER: [&str; 5] = ["Filename", "Category", "Function", "Return Type", "Arguments"];

/// Write one row per function, ordered by function name
pub fn write_functions_csv(table: &FunctionTable, path: &Path) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(FUNCTIONS_HEADER)?;

    for record in table.records() {
        writer.write_record([
            record.filename.as_str(),
            record.category.as_str(),
            record.name.as_str(),
            record.return_type.as_str(),
            record.arguments.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
