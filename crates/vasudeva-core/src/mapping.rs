// Vasudeva Mapping Structures
// GlyphTable: forward letter->glyph table plus its derived inverse

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::alphabet::{self, LETTER_COUNT, VASUDEVA_GLYPHS, VASUDEVA_NAME};

/// Errors raised while building a glyph table.
///
/// These only happen at construction time. A `GlyphTable` that exists is
/// always a bijection over `a`..=`z`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Duplicate glyph '{glyph}' used by both '{first}' and '{second}'")]
    DuplicateGlyph {
        glyph: char,
        first: char,
        second: char,
    },

    #[error("Missing glyph for letter '{0}'")]
    MissingLetter(char),

    #[error("Letter '{0}' is mapped more than once")]
    DuplicateLetter(char),

    #[error("Unknown letter {0:?}: keys must be a single lowercase letter a-z")]
    UnknownLetter(String),

    #[error("Invalid glyph {glyph:?} for letter '{letter}': expected exactly one non-whitespace character")]
    InvalidGlyph { letter: char, glyph: String },

    #[error("Glyph '{glyph}' for letter '{letter}' is itself a source letter")]
    GlyphIsSourceLetter { letter: char, glyph: char },
}

/// A validated glyph table.
///
/// Holds the forward mapping in alphabet order and the inverse mapping
/// derived from it. Both are read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    name: String,
    forward: IndexMap<char, char>,
    inverse: HashMap<char, char>,
}

impl GlyphTable {
    /// Build a table from (letter, glyph) pairs.
    ///
    /// The pairs must cover every letter `a`..=`z` exactly once, and every
    /// glyph must be distinct, non-whitespace, and not a lowercase letter.
    pub fn new<I>(name: impl Into<String>, pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let name = name.into();
        let mut forward: IndexMap<char, char> = IndexMap::with_capacity(LETTER_COUNT);
        let mut inverse: HashMap<char, char> = HashMap::with_capacity(LETTER_COUNT);

        for (letter, glyph) in pairs {
            if !alphabet::is_source_letter(letter) {
                return Err(ConfigurationError::UnknownLetter(letter.to_string()));
            }
            if forward.contains_key(&letter) {
                return Err(ConfigurationError::DuplicateLetter(letter));
            }
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigurationError::InvalidGlyph {
                    letter,
                    glyph: glyph.to_string(),
                });
            }
            if alphabet::is_source_letter(glyph) {
                return Err(ConfigurationError::GlyphIsSourceLetter { letter, glyph });
            }
            if let Some(&first) = inverse.get(&glyph) {
                return Err(ConfigurationError::DuplicateGlyph {
                    glyph,
                    first,
                    second: letter,
                });
            }

            forward.insert(letter, glyph);
            inverse.insert(glyph, letter);
        }

        if let Some(missing) = alphabet::source_letters().find(|l| !forward.contains_key(l)) {
            return Err(ConfigurationError::MissingLetter(missing));
        }

        forward.sort_keys();

        log::debug!("Glyph table '{}' built with {} entries", name, forward.len());

        Ok(Self {
            name,
            forward,
            inverse,
        })
    }

    /// Build a table from string pairs, as read from a TOML file.
    ///
    /// Keys must be one lowercase letter and values exactly one char.
    pub fn from_str_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parsed = Vec::with_capacity(LETTER_COUNT);
        for (key, value) in pairs {
            let letter = single_char(key.as_ref())
                .filter(|c| alphabet::is_source_letter(*c))
                .ok_or_else(|| ConfigurationError::UnknownLetter(key.as_ref().to_string()))?;
            let glyph = single_char(value.as_ref()).ok_or_else(|| {
                ConfigurationError::InvalidGlyph {
                    letter,
                    glyph: value.as_ref().to_string(),
                }
            })?;
            parsed.push((letter, glyph));
        }
        Self::new(name, parsed)
    }

    /// The built-in Vasudeva table.
    pub fn vasudeva() -> Self {
        // The constant table is covered by the tests below.
        Self::new(VASUDEVA_NAME, VASUDEVA_GLYPHS)
            .expect("built-in Vasudeva table must be a bijection")
    }

    /// Get the table's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the glyph for a source letter
    pub fn glyph_for(&self, letter: char) -> Option<char> {
        self.forward.get(&letter).copied()
    }

    /// Get the source letter for a glyph
    pub fn letter_for(&self, glyph: char) -> Option<char> {
        self.inverse.get(&glyph).copied()
    }

    /// Check if a char is one of the table's glyphs
    pub fn is_glyph(&self, c: char) -> bool {
        self.inverse.contains_key(&c)
    }

    /// Iterate over (letter, glyph) pairs in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.forward.iter().map(|(l, g)| (*l, *g))
    }

    /// Number of entries (always 26)
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the table has no entries (never true once validated)
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::vasudeva()
    }
}

impl fmt::Display for GlyphTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for (letter, glyph) in self.iter() {
            writeln!(f, "  {} -> {}", letter, glyph)?;
        }
        Ok(())
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    match chars.next() {
        None => Some(c),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vasudeva_with(letter: char, glyph: char) -> Vec<(char, char)> {
        VASUDEVA_GLYPHS
            .iter()
            .map(|&(l, g)| if l == letter { (l, glyph) } else { (l, g) })
            .collect()
    }

    #[test]
    fn test_vasudeva_table_builds() {
        let table = GlyphTable::new(VASUDEVA_NAME, VASUDEVA_GLYPHS).unwrap();
        assert_eq!(table.len(), LETTER_COUNT);
        assert_eq!(table.name(), "Vasudeva");
        assert_eq!(table.glyph_for('a'), Some('Δ'));
        assert_eq!(table.glyph_for('h'), Some('\\'));
        assert_eq!(table.letter_for('∇'), Some('b'));
        assert_eq!(table.letter_for('Z'), Some('z'));
    }

    #[test]
    fn test_inverse_is_exact_inverse() {
        let table = GlyphTable::vasudeva();
        for (letter, glyph) in table.iter() {
            assert_eq!(table.letter_for(glyph), Some(letter));
        }
    }

    #[test]
    fn test_iter_is_alphabet_order_regardless_of_input_order() {
        let mut pairs = VASUDEVA_GLYPHS.to_vec();
        pairs.reverse();
        let table = GlyphTable::new("reversed", pairs).unwrap();
        let letters: String = table.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_duplicate_glyph_rejected() {
        // 'b' takes the glyph already used by 'a'
        let err = GlyphTable::new("dup", vasudeva_with('b', 'Δ')).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateGlyph {
                glyph: 'Δ',
                first: 'a',
                second: 'b',
            }
        );
    }

    #[test]
    fn test_missing_letter_rejected() {
        let pairs: Vec<_> = VASUDEVA_GLYPHS.iter().copied().filter(|(l, _)| *l != 'q').collect();
        let err = GlyphTable::new("short", pairs).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingLetter('q'));
    }

    #[test]
    fn test_duplicate_letter_rejected() {
        let mut pairs = VASUDEVA_GLYPHS.to_vec();
        pairs.push(('a', '☆'));
        let err = GlyphTable::new("twice", pairs).unwrap_err();
        assert_eq!(err, ConfigurationError::DuplicateLetter('a'));
    }

    #[test]
    fn test_non_letter_key_rejected() {
        let mut pairs = VASUDEVA_GLYPHS.to_vec();
        pairs[0] = ('A', 'Δ');
        let err = GlyphTable::new("upper", pairs).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownLetter("A".to_string()));
    }

    #[test]
    fn test_whitespace_glyph_rejected() {
        let err = GlyphTable::new("ws", vasudeva_with('c', ' ')).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidGlyph { letter: 'c', .. }));
    }

    #[test]
    fn test_lowercase_letter_glyph_rejected() {
        let err = GlyphTable::new("latin", vasudeva_with('c', 'q')).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::GlyphIsSourceLetter {
                letter: 'c',
                glyph: 'q',
            }
        );
    }

    #[test]
    fn test_from_str_pairs() {
        let pairs: Vec<(String, String)> = VASUDEVA_GLYPHS
            .iter()
            .map(|(l, g)| (l.to_string(), g.to_string()))
            .collect();
        let table = GlyphTable::from_str_pairs("strings", pairs).unwrap();
        assert_eq!(table, GlyphTable::new("strings", VASUDEVA_GLYPHS).unwrap());
    }

    #[test]
    fn test_from_str_pairs_rejects_multi_char_values() {
        let mut pairs: Vec<(String, String)> = VASUDEVA_GLYPHS
            .iter()
            .map(|(l, g)| (l.to_string(), g.to_string()))
            .collect();
        pairs[0].1 = "ΔΔ".to_string();
        let err = GlyphTable::from_str_pairs("multi", pairs).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidGlyph {
                letter: 'a',
                glyph: "ΔΔ".to_string(),
            }
        );
    }

    #[test]
    fn test_from_str_pairs_rejects_long_keys() {
        let err = GlyphTable::from_str_pairs("keys", [("ab", "Δ")]).unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownLetter("ab".to_string()));
    }

    #[test]
    fn test_display_lists_every_entry() {
        let rendered = GlyphTable::vasudeva().to_string();
        assert!(rendered.starts_with("Vasudeva\n"));
        assert!(rendered.contains("  a -> Δ\n"));
        assert!(rendered.contains("  z -> Z\n"));
        assert_eq!(rendered.lines().count(), LETTER_COUNT + 1);
    }
}
