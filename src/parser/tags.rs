// ctags index reader
//
// Expects the index produced by
//   ctags --excmd=number --file-scope=no --c-kinds=-dm --fields=+S *.c
// i.e. `name<TAB>file<TAB>line<TAB>kind[<TAB>signature]` per line, with
// `!_TAG_...` header lines at the top.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Kind letter ctags uses for function definitions
pub const FUNCTION_KIND: &str = "f";

/// One entry of the tag index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub file: String,
    /// Line field as written, e.g. `120;"`
    pub address: String,
    pub kind: String,
    pub signature: Option<String>,
}

impl TagEntry {
    /// Parse a single index line.
    ///
    /// Returns `Ok(None)` for blank lines, `!` comment lines and entries
    /// that are not functions. Only function entries are held to the
    /// 4-or-5 field layout.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') {
            return Ok(None);
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match fields.get(3) {
            None => {
                return Err(format!(
                    "expected at least 4 tab-separated fields, found {}",
                    fields.len()
                ));
            }
            Some(&kind) if kind != FUNCTION_KIND => {
                tracing::trace!(name = fields[0], kind, "skipping non-function tag");
                return Ok(None);
            }
            Some(_) => {}
        }

        match fields.as_slice() {
            [name, file, address, kind] => Ok(Some(Self::new(name, file, address, kind, None))),
            [name, file, address, kind, signature] => Ok(Some(Self::new(
                name,
                file,
                address,
                kind,
                Some(signature),
            ))),
            _ => Err(format!(
                "expected 4 or 5 tab-separated fields in a function entry, found {}",
                fields.len()
            )),
        }
    }

    fn new(name: &str, file: &str, address: &str, kind: &str, signature: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            address: address.to_string(),
            kind: kind.to_string(),
            signature: signature.map(str::to_string),
        }
    }

    /// Line number from the leading digits of the address, if any
    pub fn line_number(&self) -> Option<u32> {
        let digits: String = self.address.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

/// Read the function entries of a tag index, in file order
pub fn read_function_tags(path: &Path) -> Result<Vec<TagEntry>> {
    let bytes = fs::read(path)?;
    let contents = String::from_utf8_lossy(&bytes);
    let mut entries = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        match TagEntry::parse(line) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(message) => {
                return Err(Error::malformed(path, format!("line {}: {}", index + 1, message)));
            }
        }
    }

    tracing::debug!(path = %path.display(), functions = entries.len(), "read tag index");
    Ok(entries)
}
