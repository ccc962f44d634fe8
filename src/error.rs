use std::path::PathBuf;
use thiserror::Error;

/// gentables error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Malformed input in {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Tag index {tags} references {file}, which is not listed in the sources table")]
    UnknownSourceFile { file: String, tags: PathBuf },

    #[error("Function {function} declared in {protos} has no entry in the tag index")]
    MissingTag { function: String, protos: PathBuf },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for gentables operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create a malformed-input error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}
