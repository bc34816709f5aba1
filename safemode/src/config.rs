//! JSON configuration of the whitelist tables.
//!
//! Any table left out of the document falls back to its default:
//!
//! ```json
//! {
//!   "tags": ["div", "span", "a"],
//!   "schemes": ["https:", "mailto:"]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::filter::{SafeModeFilter, DEFAULT_SCHEMES, DEFAULT_TAGS, DEFAULT_URI_ATTRIBUTES};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_attributes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,
}

impl FilterConfig {
    /// Configuration spelling out every default table.
    pub fn defaults() -> Self {
        fn owned(list: &[&str]) -> Option<Vec<String>> {
            Some(list.iter().map(|s| (*s).to_owned()).collect())
        }

        FilterConfig {
            tags: owned(DEFAULT_TAGS),
            uri_attributes: owned(DEFAULT_URI_ATTRIBUTES),
            schemes: owned(DEFAULT_SCHEMES),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn table_or<'a>(list: &'a Option<Vec<String>>, defaults: &'a [&'a str]) -> Vec<&'a str> {
    match list {
        Some(names) => names.iter().map(String::as_str).collect(),
        None => defaults.to_vec(),
    }
}

impl SafeModeFilter {
    /// Builds a filter from configuration, validating every entry.
    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        SafeModeFilter::from_tables(
            table_or(&config.tags, DEFAULT_TAGS),
            table_or(&config.uri_attributes, DEFAULT_URI_ATTRIBUTES),
            table_or(&config.schemes, DEFAULT_SCHEMES),
        )
    }

    /// Exports the active tables, e.g. for auditing the effective policy.
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig {
            tags: Some(self.tags().to_vec()),
            uri_attributes: Some(self.uri_attributes().to_vec()),
            schemes: Some(self.schemes().to_vec()),
        }
    }
}
