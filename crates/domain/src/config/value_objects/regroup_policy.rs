use std::{fmt, str::FromStr};

use group_reduce_shared_kernel::GroupReduceError;
use serde::{Deserialize, Serialize};

/// What a repeated `by` does with buckets computed by an earlier `by`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegroupPolicy {
    /// Start from an empty bucket set on every `by`.
    #[default]
    Rebuild,
    /// Keep earlier buckets and add the working collection into them again.
    Accumulate,
}

impl FromStr for RegroupPolicy {
    type Err = GroupReduceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rebuild" => Ok(Self::Rebuild),
            "accumulate" => Ok(Self::Accumulate),
            other => Err(GroupReduceError::UnknownPolicy { value: other.to_string() }),
        }
    }
}

impl fmt::Display for RegroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Rebuild => "rebuild",
            Self::Accumulate => "accumulate",
        };
        f.write_str(label)
    }
}
