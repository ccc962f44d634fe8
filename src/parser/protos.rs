// Prototype listing parser
//
// Only single-line declarations of the form
//   <MARKER> extern <return type> <name>(<args>);
// are recognised. Anything else is left alone.

use crate::error::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// An exported function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prototype {
    pub name: String,
    pub return_type: String,
    pub arguments: String,
}

/// Matches exported prototypes for one export marker
pub struct PrototypeParser {
    prefix: String,
    pattern: Regex,
}

impl PrototypeParser {
    /// Create a parser for lines starting with `<marker> extern`
    pub fn new(export_marker: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"(?i)^{}\s+extern\s+(?P<ret>.*?)\s+(?P<name>[^\s(]+)\s*\(\s*(?P<args>[^)]*?)\s*\)\s*;\s*$",
            regex::escape(export_marker)
        ))?;

        Ok(Self {
            prefix: format!("{} extern", export_marker),
            pattern,
        })
    }

    /// Parse one line of the listing
    pub fn parse_line(&self, line: &str) -> Option<Prototype> {
        let line = line.trim();
        if !line.starts_with(&self.prefix) {
            return None;
        }

        let Some(caps) = self.pattern.captures(line) else {
            tracing::trace!(line, "skipping unrecognised declaration");
            return None;
        };

        let mut return_type = caps["ret"].to_string();
        let mut name = &caps["name"];

        // `char *foo(void)`: the stars belong to the return type
        let stars = name.len() - name.trim_start_matches('*').len();
        if stars > 0 && stars < name.len() {
            return_type.push(' ');
            return_type.push_str(&name[..stars]);
            name = &name[stars..];
        }

        Some(Prototype {
            name: name.to_string(),
            return_type,
            arguments: caps["args"].to_string(),
        })
    }

    /// Parse every recognised prototype in a listing, in file order
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Prototype>> {
        let bytes = fs::read(path)?;
        let contents = String::from_utf8_lossy(&bytes);
        let prototypes: Vec<Prototype> = contents
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect();

        tracing::debug!(path = %path.display(), prototypes = prototypes.len(), "read prototype listing");
        Ok(prototypes)
    }
}
