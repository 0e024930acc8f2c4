use std::{fmt, str::FromStr};

use group_reduce_shared_kernel::{GroupKey, GroupReduceError};
use serde::{Deserialize, Serialize};

/// Order in which `reduce`/`map` visit buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyOrder {
    /// The order each key was first seen while grouping.
    #[default]
    FirstSeen,
    /// Array-index keys (`"0"`, `"2014"`, ...) ascending, then every other key
    /// in first-seen order. This is how a plain object keyed by text enumerates.
    IndexFirst,
}

impl KeyOrder {
    /// Reorders `items` in place; `key_of` picks each item's key.
    pub fn arrange<I>(self, items: &mut [I], key_of: impl Fn(&I) -> &GroupKey) {
        if self == Self::IndexFirst {
            // stable: non-index keys keep first-seen order
            items.sort_by_key(|item| key_of(item).as_array_index().map_or((1, 0), |n| (0, n)));
        }
    }
}

impl FromStr for KeyOrder {
    type Err = GroupReduceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-seen" | "first_seen" => Ok(Self::FirstSeen),
            "index-first" | "index_first" => Ok(Self::IndexFirst),
            other => Err(GroupReduceError::UnknownKeyOrder { value: other.to_string() }),
        }
    }
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstSeen => "first-seen",
            Self::IndexFirst => "index-first",
        };
        f.write_str(label)
    }
}
