// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Grouping never fails on its own; callback errors are handed back to the
/// caller untouched. This type only covers loading and validating options.
#[derive(Debug, Error)]
pub enum GroupReduceError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unknown regroup policy: {value}")]
    UnknownPolicy { value: String },

    #[error("Unknown key order: {value}")]
    UnknownKeyOrder { value: String },

    #[error("Failed to parse {format} options: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, GroupReduceError>;

impl From<serde_json::Error> for GroupReduceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for GroupReduceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}
