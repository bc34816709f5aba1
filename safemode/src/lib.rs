#![doc = include_str!("../README.md")]
//!
//! ## API Guide
//!
//! ### For Renderers
//!
//! Most callers only need the free functions, which use a process-wide
//! filter built from the default whitelists:
//!
//! - [`is_tag_allowed`] - opening and closing tags
//! - [`is_attribute_allowed`] - attribute name and value within an allowed tag
//! - [`is_scheme_allowed`] - a URI scheme on its own
//! - [`extract_scheme`] - the RFC 3986 scheme of an attribute value
//!
//! A renderer that takes its policy as a parameter should accept
//! `&impl HtmlFilter`; [`SafeModeFilter`] implements it.
//!
//! ### Custom Policies
//!
//! [`SafeModeFilter::from_tables`] builds a filter from caller-supplied
//! lists.
#![cfg_attr(
    feature = "config",
    doc = "With the `config` feature (on by default) \
           [`SafeModeFilter::from_config`] builds one from a JSON [`FilterConfig`]."
)]
//!
//! The tables in use can be inspected through [`SafeModeFilter::tags`],
//! [`SafeModeFilter::uri_attributes`] and [`SafeModeFilter::schemes`].

use std::sync::OnceLock;

pub mod error;
pub mod filter;
pub mod scheme;
pub mod whitelist;

#[cfg(feature = "config")]
pub mod config;

pub use error::{ConfigError, Table};
pub use filter::{AttributeClass, HtmlFilter, SafeModeFilter, Verdict};
pub use scheme::extract_scheme;
pub use whitelist::Whitelist;

#[cfg(feature = "config")]
pub use config::FilterConfig;

/// The filter behind the free functions, built from the default tables on
/// first use.
pub fn default_filter() -> &'static SafeModeFilter {
    static DEFAULT: OnceLock<SafeModeFilter> = OnceLock::new();
    DEFAULT.get_or_init(SafeModeFilter::new)
}

/// Returns `true` if the tag may be emitted as live HTML.
///
/// # Examples
///
/// ```
/// use safemode::is_tag_allowed;
///
/// assert!(is_tag_allowed(b"div"));
/// assert!(is_tag_allowed(b"DIV"));
/// assert!(!is_tag_allowed(b"script"));
/// ```
pub fn is_tag_allowed(tag: &[u8]) -> bool {
    default_filter().is_tag_allowed(tag)
}

/// Returns `true` if the attribute may be emitted on `tag`.
///
/// Event handlers (`on*`) are always rejected. URI-bearing attributes are
/// rejected when their value has a scheme outside the whitelist; relative
/// URIs have no scheme and pass.
///
/// # Examples
///
/// ```
/// use safemode::is_attribute_allowed;
///
/// assert!(is_attribute_allowed(b"a", b"href", b"https://example.com"));
/// assert!(is_attribute_allowed(b"a", b"href", b"#top"));
/// assert!(!is_attribute_allowed(b"a", b"href", b"javascript:alert(1)"));
/// assert!(!is_attribute_allowed(b"img", b"onerror", b"alert(1)"));
/// assert!(is_attribute_allowed(b"div", b"class", b"note"));
/// ```
pub fn is_attribute_allowed(tag: &[u8], name: &[u8], value: &[u8]) -> bool {
    default_filter().is_attribute_allowed(tag, name, value)
}

/// Returns `true` if the scheme (including its trailing colon) is whitelisted.
///
/// ```
/// assert!(safemode::is_scheme_allowed(b"mailto:"));
/// assert!(!safemode::is_scheme_allowed(b"data:"));
/// ```
pub fn is_scheme_allowed(scheme: &[u8]) -> bool {
    default_filter().is_scheme_allowed(scheme)
}

/// Returns the version of the safemode library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
