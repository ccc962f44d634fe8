use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gentables.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub page: PageConfig,
    pub functions: FunctionsConfig,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write every output. When unset, tables sit next to their
    /// inputs and the function outputs land in the working directory.
    pub directory: Option<PathBuf>,
    /// Wrap each table in a complete HTML document
    pub standalone: bool,
}

/// Assets referenced by standalone pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub stylesheet: String,
    pub script: String,
}

/// Prototype and tag index settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionsConfig {
    /// Token that prefixes every exported prototype
    pub export_marker: String,
    /// Prototype listing, relative to the source directory
    pub prototypes_file: String,
    /// ctags index, relative to the source directory
    pub tags_file: String,
    /// Rows per page in the functions table
    pub page_length: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            stylesheet: "sort-filter-table.css".to_string(),
            script: "sort-filter-table-compact.js".to_string(),
        }
    }
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            export_marker: "LEPT_DLL".to_string(),
            prototypes_file: "leptprotos.h".to_string(),
            tags_file: "tags".to_string(),
            page_length: 250,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, or return defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, output_dir: Option<PathBuf>, standalone: bool) {
        if let Some(dir) = output_dir {
            self.output.directory = Some(dir);
        }

        if standalone {
            self.output.standalone = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.functions.page_length == 0 {
            return Err(Error::config_validation("page_length must be at least 1"));
        }

        let required = [
            ("export_marker", &self.functions.export_marker),
            ("prototypes_file", &self.functions.prototypes_file),
            ("tags_file", &self.functions.tags_file),
            ("stylesheet", &self.page.stylesheet),
            ("script", &self.page.script),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::config_validation(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}
