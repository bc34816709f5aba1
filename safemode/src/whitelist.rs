use core::fmt;

/// A single case-folded whitelist entry.
///
/// The length is kept next to the name so a lookup can reject most
/// candidates on length alone before comparing any bytes.
#[derive(Clone, PartialEq, Eq)]
struct Entry {
    name: Box<str>,
    len: usize,
}

impl Entry {
    fn new(name: &str) -> Self {
        let name: Box<str> = name.to_ascii_lowercase().into_boxed_str();
        let len = name.len();
        Entry { name, len }
    }

    fn matches(&self, candidate: &[u8]) -> bool {
        self.len == candidate.len() && self.name.as_bytes().eq_ignore_ascii_case(candidate)
    }
}

/// An immutable allow-list of names.
///
/// Membership is exact-length, ASCII case-insensitive equality. There is no
/// prefix or substring matching: `"div"` does not admit `"divx"` and `"h1"`
/// does not admit `"h"`. Entries keep their insertion order, duplicates
/// (ignoring case) are folded into the first occurrence.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Whitelist {
    entries: Vec<Entry>,
}

impl Whitelist {
    /// Builds a table from any list of names. ASCII letters are lower-cased
    /// on the way in; other characters are kept as they are.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<Entry> = Vec::new();
        for name in names {
            let name = name.as_ref();
            if !entries.iter().any(|e| e.matches(name.as_bytes())) {
                entries.push(Entry::new(name));
            }
        }
        Whitelist { entries }
    }

    /// Returns `true` if `candidate` matches one entry exactly, ignoring ASCII case.
    #[inline]
    pub fn contains(&self, candidate: &[u8]) -> bool {
        self.entries.iter().any(|e| e.matches(candidate))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the (lower-cased) entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| &*e.name)
    }

    /// Owned copy of the entries, for exporting a table into configuration.
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl fmt::Debug for Whitelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> FromIterator<&'a str> for Whitelist {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Whitelist::new(iter)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::Whitelist;

    #[test]
    fn test_exact_length_match() {
        let list = Whitelist::new(["div", "span"]);
        assert!(list.contains(b"div"));
        assert!(list.contains(b"span"));
        assert!(!list.contains(b"di"));
        assert!(!list.contains(b"divx"));
        assert!(!list.contains(b"spa"));
        assert!(!list.contains(b""));
    }

    #[test]
    fn test_case_insensitive() {
        let list = Whitelist::new(["Div"]);
        assert!(list.contains(b"div"));
        assert!(list.contains(b"DIV"));
        assert!(list.contains(b"dIv"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["div"]);
    }

    #[test]
    fn test_non_ascii_never_folds() {
        // Only ASCII letters fold; "Ä" must not compare equal to "ä".
        let list = Whitelist::new(["Ä"]);
        assert!(list.contains("Ä".as_bytes()));
        assert!(!list.contains("ä".as_bytes()));
        assert!(!list.contains(&[0xC4]));
    }

    #[test]
    fn test_export_keeps_non_ascii_entries() {
        let list = Whitelist::new(["x-Ä", "Émoji"]);
        assert_eq!(list.to_vec(), vec!["x-Ä", "Émoji"]);
        assert_eq!(format!("{:?}", list), r#"["x-Ä", "Émoji"]"#);
    }

    #[test]
    fn test_duplicates_folded_in_order() {
        let list = Whitelist::new(["b", "I", "B", "i", "em"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec!["b", "i", "em"]);
    }

    #[test]
    fn test_empty_table_rejects_everything() {
        let list = Whitelist::default();
        assert!(list.is_empty());
        assert!(!list.contains(b""));
        assert!(!list.contains(b"div"));
    }
}
