//! Built-in layout presets.
//!
//! The three historical device layouts are preset group tables over the
//! one generic `Layout` type. Each covers the full A–Z alphabet with
//! pairwise-disjoint groups, so the preset constructors cannot fail.

use libgroupkey_core::Layout;

/// 4 buttons, plain alphabetic split.
pub const ALPHABETIC_FOUR_GROUPS: [(u8, &str); 4] = [
    (1, "ABCDEFG"),
    (2, "HIJKLM"),
    (3, "NOPQRS"),
    (4, "TUVWXYZ"),
];

/// 4 buttons ordered by corpus letter frequency: button 1 covers ~62% of
/// running text, button 4 ~3%.
pub const FREQUENCY_FOUR_GROUPS: [(u8, &str); 4] = [
    (1, "ETAOINH"),
    (2, "SRDLCUG"),
    (3, "MPFYWB"),
    (4, "VKXQJZ"),
];

/// 6 buttons, frequency ordered; smaller groups disambiguate faster at
/// the cost of more buttons.
pub const FREQUENCY_SIX_GROUPS: [(u8, &str); 6] = [
    (1, "ETAO"),
    (2, "INSR"),
    (3, "HLDC"),
    (4, "UMFP"),
    (5, "GWYB"),
    (6, "VKXJQZ"),
];

/// Named preset selection, for configuration files and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    AlphabeticFour,
    FrequencyFour,
    FrequencySix,
}

impl LayoutPreset {
    /// Parse a preset name as written in config files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "alphabetic4" | "alphabetic" => Some(Self::AlphabeticFour),
            "frequency4" | "frequency" => Some(Self::FrequencyFour),
            "frequency6" => Some(Self::FrequencySix),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AlphabeticFour => "alphabetic4",
            Self::FrequencyFour => "frequency4",
            Self::FrequencySix => "frequency6",
        }
    }

    pub fn layout(&self) -> Layout {
        let groups: &[(u8, &str)] = match self {
            Self::AlphabeticFour => &ALPHABETIC_FOUR_GROUPS,
            Self::FrequencyFour => &FREQUENCY_FOUR_GROUPS,
            Self::FrequencySix => &FREQUENCY_SIX_GROUPS,
        };
        Layout::new(groups.iter().copied()).expect("preset groups are disjoint and non-empty")
    }
}

/// 4-button alphabetic layout.
pub fn alphabetic_four() -> Layout {
    LayoutPreset::AlphabeticFour.layout()
}

/// 4-button frequency-ordered layout.
pub fn frequency_four() -> Layout {
    LayoutPreset::FrequencyFour.layout()
}

/// 6-button frequency-ordered layout.
pub fn frequency_six() -> Layout {
    LayoutPreset::FrequencySix.layout()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_cover_the_alphabet() {
        for layout in [alphabetic_four(), frequency_four(), frequency_six()] {
            for letter in 'A'..='Z' {
                assert!(
                    layout.button_for(letter).is_some(),
                    "{} missing from layout",
                    letter
                );
            }
        }
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in [
            LayoutPreset::AlphabeticFour,
            LayoutPreset::FrequencyFour,
            LayoutPreset::FrequencySix,
        ] {
            assert_eq!(LayoutPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(LayoutPreset::from_name("qwerty"), None);
    }

    #[test]
    fn frequency_four_matches_the_device_groups() {
        let layout = frequency_four();
        assert_eq!(layout.letters(1), Some("ETAOINH"));
        assert_eq!(layout.letters(4), Some("VKXQJZ"));
        assert_eq!(layout.sequence_for("THE"), Some(vec![1, 1, 1]));
    }
}
