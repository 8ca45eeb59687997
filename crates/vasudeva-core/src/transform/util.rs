// Vasudeva Transform Utility Functions
// Pure per-character lookups used by the engine

use crate::alphabet;
use crate::GlyphTable;

/// Result of translating a single char
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOutcome {
    /// Found in the table and replaced
    Mapped(char),
    /// Not covered by the table, emitted unchanged
    Passthrough(char),
}

impl CharOutcome {
    /// The char to emit
    pub fn emitted(self) -> char {
        match self {
            CharOutcome::Mapped(c) | CharOutcome::Passthrough(c) => c,
        }
    }

    /// Whether the table covered the char
    pub fn is_mapped(self) -> bool {
        matches!(self, CharOutcome::Mapped(_))
    }
}

/// Translate one char from the source alphabet to its glyph.
///
/// The char is lowercased first, so `A` and `a` give the same glyph.
/// Anything whose lowercase form is not a table letter passes through with
/// its original case.
pub fn forward_char(table: &GlyphTable, c: char) -> CharOutcome {
    alphabet::simple_lowercase(c)
        .and_then(|lower| table.glyph_for(lower))
        .map_or(CharOutcome::Passthrough(c), CharOutcome::Mapped)
}

/// Translate one glyph back to its lowercase source letter.
///
/// No case folding is applied to the glyph.
pub fn reverse_char(table: &GlyphTable, g: char) -> CharOutcome {
    table
        .letter_for(g)
        .map_or(CharOutcome::Passthrough(g), CharOutcome::Mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_char() {
        let table = GlyphTable::vasudeva();
        assert_eq!(forward_char(&table, 'a'), CharOutcome::Mapped('Δ'));
        assert_eq!(forward_char(&table, 'A'), CharOutcome::Mapped('Δ'));
        assert_eq!(forward_char(&table, '7'), CharOutcome::Passthrough('7'));
        assert_eq!(forward_char(&table, 'é'), CharOutcome::Passthrough('é'));
        assert_eq!(forward_char(&table, 'İ'), CharOutcome::Passthrough('İ'));
    }

    #[test]
    fn test_reverse_char() {
        let table = GlyphTable::vasudeva();
        assert_eq!(reverse_char(&table, '∇'), CharOutcome::Mapped('b'));
        // Uppercase L is a glyph, not a letter
        assert_eq!(reverse_char(&table, 'L'), CharOutcome::Mapped('l'));
        assert_eq!(reverse_char(&table, 'l'), CharOutcome::Passthrough('l'));
        assert_eq!(reverse_char(&table, ' '), CharOutcome::Passthrough(' '));
    }

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(CharOutcome::Mapped('x').emitted(), 'x');
        assert_eq!(CharOutcome::Passthrough('?').emitted(), '?');
        assert!(CharOutcome::Mapped('x').is_mapped());
        assert!(!CharOutcome::Passthrough('?').is_mapped());
    }
}
