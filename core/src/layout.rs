//! Button layout: the mapping from button ids to letter groups.
//!
//! A `Layout` is the one piece of static configuration the whole engine is
//! generic over. The historical devices (4-button alphabetic, 4-button
//! frequency-ordered, 6-button frequency-ordered) are not separate code
//! paths but preset group tables handed to `Layout::new`; the engine works
//! unchanged for any number of buttons whose letter groups are disjoint.

use ahash::AHashMap;

/// Immutable button-id → letter-group mapping.
///
/// Invariants enforced at construction:
/// - at least one button,
/// - every group non-empty,
/// - groups pairwise disjoint (each letter belongs to exactly one button).
///
/// Letters are normalized to uppercase ASCII on construction; all lookups
/// are case-insensitive through that normalization.
#[derive(Debug, Clone)]
pub struct Layout {
    /// (button id, uppercase letter group), sorted by button id.
    groups: Vec<(u8, String)>,
    /// Reverse index: letter → button id.
    by_letter: AHashMap<char, u8>,
}

impl Layout {
    /// Build a layout from (button id, letter group) pairs.
    ///
    /// Returns a descriptive error when the group table is unusable; the
    /// caller decides whether that is fatal (it is for preset tables).
    pub fn new<I, S>(groups: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (u8, S)>,
        S: AsRef<str>,
    {
        let mut table: Vec<(u8, String)> = Vec::new();
        let mut by_letter: AHashMap<char, u8> = AHashMap::new();

        for (button, letters) in groups {
            let letters: String = letters
                .as_ref()
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .collect();
            if letters.is_empty() {
                return Err(format!("button {} has an empty letter group", button));
            }
            if table.iter().any(|(b, _)| *b == button) {
                return Err(format!("button {} appears twice in the layout", button));
            }
            for ch in letters.chars() {
                if let Some(other) = by_letter.insert(ch, button) {
                    return Err(format!(
                        "letter '{}' assigned to both button {} and button {}",
                        ch, other, button
                    ));
                }
            }
            table.push((button, letters));
        }

        if table.is_empty() {
            return Err("layout has no buttons".to_string());
        }
        table.sort_by_key(|(b, _)| *b);

        Ok(Self {
            groups: table,
            by_letter,
        })
    }

    /// Number of buttons in the layout.
    pub fn button_count(&self) -> usize {
        self.groups.len()
    }

    /// Whether `button` is a configured button id.
    pub fn contains(&self, button: u8) -> bool {
        self.groups.iter().any(|(b, _)| *b == button)
    }

    /// The uppercase letter group for `button`, if configured.
    pub fn letters(&self, button: u8) -> Option<&str> {
        self.groups
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, letters)| letters.as_str())
    }

    /// The button a letter belongs to (case-insensitive), if any.
    pub fn button_for(&self, letter: char) -> Option<u8> {
        self.by_letter.get(&letter.to_ascii_uppercase()).copied()
    }

    /// The exact button sequence spelling `word`, or `None` when any
    /// letter falls outside the layout alphabet.
    pub fn sequence_for(&self, word: &str) -> Option<Vec<u8>> {
        word.chars().map(|ch| self.button_for(ch)).collect()
    }

    /// (button id, letter group) pairs in ascending button order, for
    /// prompt legends and UI display.
    pub fn legend(&self) -> impl Iterator<Item = (u8, &str)> {
        self.groups.iter().map(|(b, letters)| (*b, letters.as_str()))
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
    fn builds_and_indexes_groups() {
        let layout = alphabetic();
        assert_eq!(layout.button_count(), 4);
        assert!(layout.contains(3));
        assert!(!layout.contains(5));
        assert_eq!(layout.letters(2), Some("HIJKLM"));
        assert_eq!(layout.button_for('t'), Some(4));
        assert_eq!(layout.button_for('E'), Some(1));
        assert_eq!(layout.button_for('é'), None);
    }

    #[test]
    fn sequence_for_spells_words() {
        let layout = alphabetic();
        assert_eq!(layout.sequence_for("the"), Some(vec![4, 2, 1]));
        assert_eq!(layout.sequence_for("AND"), Some(vec![1, 3, 1]));
        assert_eq!(layout.sequence_for("naïve"), None);
    }

    #[test]
    fn rejects_overlapping_groups() {
        let err = Layout::new([(1u8, "ABC"), (2u8, "CDE")]).unwrap_err();
        assert!(err.contains("'C'"), "unexpected error: {}", err);
    }

    #[test]
    fn rejects_empty_and_duplicate_buttons() {
        assert!(Layout::new(std::iter::empty::<(u8, &str)>()).is_err());
        assert!(Layout::new([(1u8, "")]).is_err());
        assert!(Layout::new([(1u8, "AB"), (1u8, "CD")]).is_err());
    }

    #[test]
    fn legend_is_ordered_by_button() {
        let layout = Layout::new([(4u8, "TUVWXYZ"), (1u8, "ABCDEFG")]).unwrap();
        let ids: Vec<u8> = layout.legend().map(|(b, _)| b).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
