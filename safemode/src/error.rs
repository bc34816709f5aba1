use core::fmt;

use thiserror::Error;

/// Which whitelist table a configuration problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Tags,
    UriAttributes,
    Schemes,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Tags => write!(f, "tags"),
            Table::UriAttributes => write!(f, "uri_attributes"),
            Table::Schemes => write!(f, "schemes"),
        }
    }
}

/// Errors raised while building a filter from custom tables.
///
/// Filtering itself never fails; only the construction of a policy does.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[cfg(feature = "config")]
    #[error("invalid filter configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("empty entry in `{table}` table")]
    EmptyEntry { table: Table },

    #[error("invalid name {name:?} in `{table}` table: {reason}")]
    InvalidName {
        table: Table,
        name: String,
        reason: &'static str,
    },

    #[error("invalid scheme {scheme:?}: expected an RFC 3986 scheme ending in ':'")]
    InvalidScheme { scheme: String },
}
