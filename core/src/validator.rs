//! Sequence validation: the hard constraint every candidate must satisfy.
//!
//! A word is consistent with a button sequence iff it has the same number
//! of letters and each letter belongs to the group of the button pressed
//! at that position. Everything downstream (oracle output, context
//! blending, fallback entries) funnels through this one predicate.

use crate::layout::Layout;

/// Whether `word` is letter-for-letter consistent with `sequence` under
/// `layout`. Fails closed: a length mismatch, an unknown button, or a
/// letter outside its position's group all return false.
///
/// Case-insensitive; pure; O(word length).
pub fn word_matches_sequence(word: &str, sequence: &[u8], layout: &Layout) -> bool {
    if word.chars().count() != sequence.len() {
        return false;
    }
    word.chars().zip(sequence).all(|(ch, &button)| {
        layout
            .letters(button)
            .is_some_and(|group| group.contains(ch.to_ascii_uppercase()))
    })
}
