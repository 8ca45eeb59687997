// Vasudeva Core Library
// Bidirectional transliteration between Latin letters and Vasudeva glyphs

use std::sync::LazyLock;

pub mod alphabet;
pub mod direction;
pub mod mapping;
pub mod transform;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "config")]
pub mod settings;

pub use alphabet::{VASUDEVA_GLYPHS, VASUDEVA_NAME};
pub use direction::Direction;
pub use mapping::{ConfigurationError, GlyphTable};
pub use transform::{CharOutcome, Translation, TransliterationEngine};

#[cfg(feature = "config")]
pub use config::{Config, ConfigError};

#[cfg(feature = "config")]
pub use settings::{Settings, SettingsError};

/// Engine over the built-in table, built on first use and never mutated
static VASUDEVA_ENGINE: LazyLock<TransliterationEngine> =
    LazyLock::new(TransliterationEngine::vasudeva);

/// Shared engine over the built-in Vasudeva table
pub fn vasudeva() -> &'static TransliterationEngine {
    &VASUDEVA_ENGINE
}

/// Translate Latin text to Vasudeva glyphs with the built-in table
pub fn translate_forward(text: &str) -> String {
    vasudeva().translate_forward(text)
}

/// Translate Vasudeva glyphs to Latin text with the built-in table
pub fn translate_reverse(text: &str) -> String {
    vasudeva().translate_reverse(text)
}
