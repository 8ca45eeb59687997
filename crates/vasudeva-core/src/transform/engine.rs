// Vasudeva Transliteration Engine
//
// Applies a validated GlyphTable over whole text buffers, one char in and
// one char out. Both directions are pure: the engine holds no state beyond
// the immutable table, so a shared reference can be used from any thread.

use crate::transform::util::{forward_char, reverse_char, CharOutcome};
use crate::{Direction, GlyphTable};

/// Output of a translation together with per-char counts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Chars replaced through the table
    pub mapped: usize,
    /// Chars emitted unchanged
    pub passthrough: usize,
}

impl Translation {
    /// Total number of chars processed
    pub fn len(&self) -> usize {
        self.mapped + self.passthrough
    }

    /// Whether the input was empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bidirectional transliteration over a fixed glyph table
#[derive(Debug, Clone, Default)]
pub struct TransliterationEngine {
    table: GlyphTable,
}

impl TransliterationEngine {
    /// Create an engine over an already validated table
    pub fn new(table: GlyphTable) -> Self {
        Self { table }
    }

    /// Engine over the built-in Vasudeva table
    pub fn vasudeva() -> Self {
        Self::new(GlyphTable::vasudeva())
    }

    /// Get the table
    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    /// Translate source-alphabet text to glyphs.
    ///
    /// Letters are matched case-insensitively; casing is not recoverable by
    /// [`translate_reverse`](Self::translate_reverse).
    pub fn translate_forward(&self, text: &str) -> String {
        text.chars()
            .map(|c| forward_char(&self.table, c).emitted())
            .collect()
    }

    /// Translate glyphs back to lowercase source letters
    pub fn translate_reverse(&self, text: &str) -> String {
        text.chars()
            .map(|g| reverse_char(&self.table, g).emitted())
            .collect()
    }

    /// Translate in the given direction
    pub fn translate(&self, direction: Direction, text: &str) -> String {
        match direction {
            Direction::Forward => self.translate_forward(text),
            Direction::Reverse => self.translate_reverse(text),
        }
    }

    /// Per-char outcomes in input order
    pub fn outcomes<'a>(
        &'a self,
        direction: Direction,
        text: &'a str,
    ) -> impl Iterator<Item = CharOutcome> + 'a {
        text.chars().map(move |c| match direction {
            Direction::Forward => forward_char(&self.table, c),
            Direction::Reverse => reverse_char(&self.table, c),
        })
    }

    /// Translate and count mapped vs passed-through chars
    pub fn translate_with_stats(&self, direction: Direction, text: &str) -> Translation {
        let mut result = Translation {
            text: String::with_capacity(text.len()),
            ..Translation::default()
        };
        for outcome in self.outcomes(direction, text) {
            if outcome.is_mapped() {
                result.mapped += 1;
            } else {
                result.passthrough += 1;
            }
            result.text.push(outcome.emitted());
        }
        log::trace!(
            "{} translation: {} mapped, {} passed through",
            direction,
            result.mapped,
            result.passthrough
        );
        result
    }
}
