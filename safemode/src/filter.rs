pub use self::sanitizer::{AttributeClass, HtmlFilter, SafeModeFilter, Verdict};
pub use self::whitelists::{DEFAULT_SCHEMES, DEFAULT_TAGS, DEFAULT_URI_ATTRIBUTES};

mod sanitizer;
mod whitelists;
