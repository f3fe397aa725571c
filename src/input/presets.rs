//! Preset letter groups
//!
//! Common lowercase shape families, offered as ready-made required groups.

/// A named group of letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPreset {
    pub name: &'static str,
    pub letters: &'static [char],
}

impl GroupPreset {
    /// The text form accepted by group fields, e.g. "[lc] Arches: n, m, h, u"
    #[must_use]
    pub fn field_text(&self) -> String {
        let letters: Vec<String> = self.letters.iter().map(char::to_string).collect();
        format!("{}: {}", self.name, letters.join(", "))
    }

    /// Short lookup key, e.g. "ball-and-stick"
    #[must_use]
    pub fn key(&self) -> String {
        self.name
            .trim_start_matches("[lc]")
            .trim()
            .to_lowercase()
            .replace(' ', "-")
    }
}

pub const PRESETS: &[GroupPreset] = &[
    GroupPreset {
        name: "[lc] Ascenders",
        letters: &['b', 'f', 'h', 'k', 'l'],
    },
    GroupPreset {
        name: "[lc] Descenders",
        letters: &['g', 'j', 'p', 'q', 'y'],
    },
    GroupPreset {
        name: "[lc] Ball-and-Stick",
        letters: &['b', 'd', 'p', 'q'],
    },
    GroupPreset {
        name: "[lc] Arches",
        letters: &['n', 'm', 'h', 'u'],
    },
    GroupPreset {
        name: "[lc] Diagonals",
        letters: &['v', 'w', 'x', 'y'],
    },
];

/// Find a preset by its short key (case-insensitive)
#[must_use]
pub fn find_preset(key: &str) -> Option<&'static GroupPreset> {
    let key = key.trim().to_lowercase();
    PRESETS.iter().find(|preset| preset.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_short_names() {
        let keys: Vec<String> = PRESETS.iter().map(GroupPreset::key).collect();
        assert_eq!(
            keys,
            ["ascenders", "descenders", "ball-and-stick", "arches", "diagonals"]
        );
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find_preset("Arches").map(|p| p.letters), Some(&['n', 'm', 'h', 'u'][..]));
        assert!(find_preset("serifs").is_none());
    }

    #[test]
    fn field_text_has_label() {
        let preset = find_preset("diagonals").unwrap();
        assert_eq!(preset.field_text(), "[lc] Diagonals: v, w, x, y");
    }
}
