//! Name dictionary lookup.
//!
//! Names matter because introduction contexts ("my name is …") should rank
//! proper names ahead of ordinary words. The dictionary is an
//! insertion-ordered list so repeated lookups are reproducible, plus a
//! hashed index for membership tests.

use ahash::AHashSet;

use crate::layout::Layout;
use crate::validator::word_matches_sequence;

/// Static name set queried by sequence length and per-position group
/// membership.
#[derive(Debug, Clone, Default)]
pub struct NameDictionary {
    /// Uppercase names in insertion order, duplicates removed.
    names: Vec<String>,
    index: AHashSet<String>,
}

impl NameDictionary {
    /// Build a dictionary from a name list. Names are uppercased;
    /// duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for name in names {
            let name = name.as_ref().to_ascii_uppercase();
            if dict.index.insert(name.clone()) {
                dict.names.push(name);
            }
        }
        dict
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_ascii_uppercase())
    }

    /// Every name consistent with `sequence` under `layout`, in
    /// dictionary order. Repeated calls return identical output.
    pub fn find_matches(&self, sequence: &[u8], layout: &Layout) -> Vec<String> {
        self.names
            .iter()
            .filter(|name| word_matches_sequence(name, sequence, layout))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabetic() -> Layout {
        Layout::new([
            (1u8, "ABCDEFG"),
            (2u8, "HIJKLM"),
            (3u8, "NOPQRS"),
            (4u8, "TUVWXYZ"),
        ])
        .unwrap()
    }

    #[test]
    fn dedups_and_uppercases() {
        let dict = NameDictionary::from_names(["Maria", "MARIA", "david"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("maria"));
        assert!(dict.contains("DAVID"));
        assert!(!dict.contains("JAMES"));
    }

    #[test]
    fn find_matches_filters_by_sequence() {
        let layout = alphabetic();
        let dict = NameDictionary::from_names(["JACK", "MARIA", "JOHN"]);
        // J=2, A=1, C=1, K=2
        let matches = dict.find_matches(&[2, 1, 1, 2], &layout);
        assert_eq!(matches, vec!["JACK".to_string()]);
    }

    #[test]
    fn find_matches_preserves_dictionary_order() {
        let layout = alphabetic();
        // Both spell [2, 1]: J/I on button 2, A/D on button 1.
        let dict = NameDictionary::from_names(["JA", "ID", "IA"]);
        let first = dict.find_matches(&[2, 1], &layout);
        let second = dict.find_matches(&[2, 1], &layout);
        assert_eq!(first, vec!["JA", "ID", "IA"]);
        assert_eq!(first, second);
    }
}
