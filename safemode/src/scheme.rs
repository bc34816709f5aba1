//! URI scheme extraction (RFC 3986, section 3.1).
//!
//! ```text
//! scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
//! ```

#[inline]
fn is_scheme_char(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, b'+' | b'-' | b'.')
}

/// Returns the scheme of `value` including its trailing colon, or `None` if
/// the value has no scheme (relative paths, fragments, queries, garbage).
///
/// The returned slice borrows from `value`.
///
/// # Examples
///
/// ```
/// use safemode::extract_scheme;
///
/// assert_eq!(extract_scheme(b"https://example.com"), Some(&b"https:"[..]));
/// assert_eq!(extract_scheme(b"javascript:"), Some(&b"javascript:"[..]));
/// assert_eq!(extract_scheme(b"/relative/path"), None);
/// assert_eq!(extract_scheme(b"1234"), None);
/// ```
pub fn extract_scheme(value: &[u8]) -> Option<&[u8]> {
    let (first, rest) = value.split_first()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }

    // Position of the first byte after the leading letter that is not part
    // of the scheme run. It must be the colon for a scheme to exist.
    let stop = rest.iter().position(|&ch| !is_scheme_char(ch))?;
    match rest.get(stop) {
        Some(b':') => value.get(..=stop.checked_add(1)?),
        _ => None,
    }
}

/// Returns `true` if `candidate` is exactly a well-formed scheme with its
/// colon and nothing after it, e.g. `"https:"`.
pub fn is_well_formed_scheme(candidate: &[u8]) -> bool {
    extract_scheme(candidate).is_some_and(|s| s.len() == candidate.len())
}
