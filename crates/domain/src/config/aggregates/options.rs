use derive_builder::Builder;
use group_reduce_shared_kernel::{GroupReduceError, Result, UNDEFINED_KEY};
use serde::{Deserialize, Serialize};

use crate::config::{KeyOrder, RegroupPolicy};

/// Tunables for a grouper.
///
/// Every field has a default, so partial JSON/YAML documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GroupOptions {
    #[builder(default)]
    pub regroup: RegroupPolicy,
    #[builder(default)]
    pub key_order: KeyOrder,
    /// Key text used when a field selector finds nothing.
    #[builder(default = "UNDEFINED_KEY.to_string()")]
    pub missing_key: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            regroup: RegroupPolicy::default(),
            key_order: KeyOrder::default(),
            missing_key: UNDEFINED_KEY.to_string(),
        }
    }
}

impl GroupOptions {
    /// Loads options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON and `InvalidConfiguration`
    /// when the values do not validate.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a YAML document.
    ///
    /// # Errors
    ///
    /// Same as [`GroupOptions::from_json_str`].
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when `missing_key` is empty.
    pub fn validate(&self) -> Result<()> {
        check_missing_key(&self.missing_key).map_err(|reason| GroupReduceError::InvalidConfiguration { reason })
    }
}

impl GroupOptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        self.missing_key.as_deref().map_or(Ok(()), check_missing_key)
    }
}

fn check_missing_key(missing_key: &str) -> std::result::Result<(), String> {
    if missing_key.is_empty() { Err("missing_key must not be empty".to_string()) } else { Ok(()) }
}
