// Vasudeva Transform Module
// Character-by-character translation between letters and glyphs

pub mod engine;
pub mod util;

pub use engine::{Translation, TransliterationEngine};
pub use util::{forward_char, reverse_char, CharOutcome};
