use super::whitelists::{DEFAULT_SCHEMES, DEFAULT_TAGS, DEFAULT_URI_ATTRIBUTES};
use crate::error::{ConfigError, Table};
use crate::scheme::{extract_scheme, is_well_formed_scheme};
use crate::whitelist::Whitelist;

use core::fmt;

/// Outcome of a single filtering decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Reject,
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

impl From<bool> for Verdict {
    fn from(allowed: bool) -> Self {
        if allowed {
            Verdict::Allow
        } else {
            Verdict::Reject
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Allow => write!(f, "allow"),
            Verdict::Reject => write!(f, "reject"),
        }
    }
}

/// How an attribute name is treated, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeClass {
    /// `on*` attribute binding script to a DOM event. Always rejected.
    EventHandler,
    /// Value is a URI and is subject to scheme whitelisting.
    UriBearing,
    /// Anything else. Always allowed.
    Generic,
}

impl fmt::Display for AttributeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeClass::EventHandler => write!(f, "event-handler"),
            AttributeClass::UriBearing => write!(f, "uri"),
            AttributeClass::Generic => write!(f, "generic"),
        }
    }
}

/// Hooks an HTML-emitting renderer calls while serializing raw HTML.
///
/// A rejected tag must be escaped or suppressed instead of being emitted as
/// live markup; a rejected attribute must be left out of the output.
pub trait HtmlFilter {
    /// Called before emitting an opening or closing tag.
    fn filter_tag(&self, name: &[u8]) -> Verdict;

    /// Called before emitting `name="value"` inside an allowed tag.
    fn filter_attribute(&self, tag: &[u8], name: &[u8], value: &[u8]) -> Verdict;
}

impl<F: HtmlFilter + ?Sized> HtmlFilter for &F {
    fn filter_tag(&self, name: &[u8]) -> Verdict {
        (**self).filter_tag(name)
    }

    fn filter_attribute(&self, tag: &[u8], name: &[u8], value: &[u8]) -> Verdict {
        (**self).filter_attribute(tag, name, value)
    }
}

// Renders a token for log output without allocating unless the event fires.
struct Lossy<'a>(&'a [u8]);

impl fmt::Display for Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.0))
    }
}

/// Whitelist-based safe-mode filter.
///
/// Holds three read-only tables (allowed tags, URI-bearing attribute names,
/// allowed schemes). Every decision is a pure function of its inputs and the
/// tables, so one filter can be shared by any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeModeFilter {
    tags: Whitelist,
    uri_attributes: Whitelist,
    schemes: Whitelist,
}

impl SafeModeFilter {
    /// Filter using the built-in default tables.
    pub fn new() -> Self {
        SafeModeFilter {
            tags: Whitelist::new(DEFAULT_TAGS),
            uri_attributes: Whitelist::new(DEFAULT_URI_ATTRIBUTES),
            schemes: Whitelist::new(DEFAULT_SCHEMES),
        }
    }

    /// Filter using custom tables. Every entry is validated; schemes must
    /// carry their trailing colon (`"https:"`).
    pub fn from_tables<T, A, S>(
        tags: T,
        uri_attributes: A,
        schemes: S,
    ) -> Result<Self, ConfigError>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let filter = SafeModeFilter {
            tags: build_table(Table::Tags, tags)?,
            uri_attributes: build_table(Table::UriAttributes, uri_attributes)?,
            schemes: build_table(Table::Schemes, schemes)?,
        };
        tracing::debug!(
            target: "safemode::filter",
            tags = filter.tags.len(),
            uri_attributes = filter.uri_attributes.len(),
            schemes = filter.schemes.len(),
            "built safe-mode filter from custom tables"
        );
        Ok(filter)
    }

    pub fn tags(&self) -> &Whitelist {
        &self.tags
    }

    pub fn uri_attributes(&self) -> &Whitelist {
        &self.uri_attributes
    }

    pub fn schemes(&self) -> &Whitelist {
        &self.schemes
    }

    /// Returns `true` iff `tag` is in the allowed-tag table.
    pub fn is_tag_allowed(&self, tag: &[u8]) -> bool {
        let allowed = self.tags.contains(tag);
        if !allowed {
            tracing::trace!(
                target: "safemode::filter",
                tag = %Lossy(tag),
                reason = "tag not allowed",
                "tag rejected"
            );
        }
        allowed
    }

    /// Classifies an attribute name. Event handlers win over the URI table.
    pub fn classify_attribute(&self, name: &[u8]) -> AttributeClass {
        if is_event_handler(name) {
            AttributeClass::EventHandler
        } else if self.uri_attributes.contains(name) {
            AttributeClass::UriBearing
        } else {
            AttributeClass::Generic
        }
    }

    /// Returns `true` iff `scheme` (with its trailing colon) is whitelisted.
    pub fn is_scheme_allowed(&self, scheme: &[u8]) -> bool {
        let allowed = self.schemes.contains(scheme);
        if !allowed {
            tracing::trace!(
                target: "safemode::filter",
                scheme = %Lossy(scheme),
                reason = "scheme not allowed",
                "scheme rejected"
            );
        }
        allowed
    }

    /// Decides whether `name="value"` may be emitted on `tag`.
    ///
    /// `tag` does not influence the decision; it is part of the signature so
    /// per-tag policies can be added without changing callers.
    pub fn is_attribute_allowed(&self, tag: &[u8], name: &[u8], value: &[u8]) -> bool {
        match self.classify_attribute(name) {
            AttributeClass::EventHandler => {
                tracing::trace!(
                    target: "safemode::filter",
                    tag = %Lossy(tag),
                    attr = %Lossy(name),
                    reason = "event handler",
                    "attribute rejected"
                );
                false
            }
            AttributeClass::UriBearing => match extract_scheme(value) {
                None => true,
                Some(scheme) if self.is_scheme_allowed(scheme) => true,
                Some(scheme) => {
                    tracing::trace!(
                        target: "safemode::filter",
                        tag = %Lossy(tag),
                        attr = %Lossy(name),
                        scheme = %Lossy(scheme),
                        reason = "scheme not allowed",
                        "attribute rejected"
                    );
                    false
                }
            },
            AttributeClass::Generic => true,
        }
    }
}

impl Default for SafeModeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlFilter for SafeModeFilter {
    fn filter_tag(&self, name: &[u8]) -> Verdict {
        self.is_tag_allowed(name).into()
    }

    fn filter_attribute(&self, tag: &[u8], name: &[u8], value: &[u8]) -> Verdict {
        self.is_attribute_allowed(tag, name, value).into()
    }
}

// Any attribute longer than "on" that starts with it, e.g. onclick, ONLOAD.
fn is_event_handler(name: &[u8]) -> bool {
    name.len() > 2 && name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case(b"on"))
}

fn build_table<I>(table: Table, names: I) -> Result<Whitelist, ConfigError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut entries: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref();
        validate_entry(table, name)?;
        entries.push(name.to_owned());
    }
    Ok(Whitelist::new(entries))
}

fn validate_entry(table: Table, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyEntry { table });
    }

    let invalid = |reason: &'static str| ConfigError::InvalidName {
        table,
        name: name.to_owned(),
        reason,
    };

    match table {
        Table::Schemes => {
            if !is_well_formed_scheme(name.as_bytes()) {
                return Err(ConfigError::InvalidScheme {
                    scheme: name.to_owned(),
                });
            }
        }
        Table::Tags | Table::UriAttributes => {
            let bad_char = name.bytes().any(|b| {
                !b.is_ascii_graphic() || matches!(b, b'<' | b'>' | b'/' | b'=' | b'"' | b'\'')
            });
            if bad_char {
                return Err(invalid("must be printable ASCII without spaces, quotes, <, >, / or ="));
            }
            if table == Table::UriAttributes && is_event_handler(name.as_bytes()) {
                return Err(invalid("event-handler attributes are always rejected"));
            }
        }
    }

    Ok(())
}
