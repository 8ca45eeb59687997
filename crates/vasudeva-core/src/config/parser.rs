// Vasudeva Config Parser - TOML with Serde
// Loads a custom glyph table from a TOML file

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::alphabet::{VASUDEVA_GLYPHS, VASUDEVA_NAME};
use crate::mapping::{ConfigurationError, GlyphTable};
use crate::TransliterationEngine;

/// Base table name accepted by `general.extends`
pub const VASUDEVA_BASE: &str = "vasudeva";

const CUSTOM_NAME: &str = "Custom";

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unknown base table: {0}")]
    UnknownBase(String),

    #[error("Invalid glyph table: {0}")]
    Table(#[from] ConfigurationError),
}

/// Root TOML table
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    /// General settings
    #[serde(default)]
    pub general: Option<GeneralConfig>,

    /// Letter to glyph entries
    #[serde(default)]
    pub glyphs: BTreeMap<String, String>,
}

/// General settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Display name for the table
    pub name: Option<String>,
    /// Start from a built-in table and override entries from `[glyphs]`
    pub extends: Option<String>,
}

/// A loaded glyph table configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Validated table
    pub table: GlyphTable,
    /// File the table was read from, if any
    pub source_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: GlyphTable::vasudeva(),
            source_path: None,
        }
    }
}

impl Config {
    /// Parse a TOML configuration file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path)?;
        let mut config = Self::from_toml(&content)?;
        config.source_path = Some(path.as_ref().to_path_buf());
        log::debug!(
            "Loaded glyph table '{}' from {}",
            config.table.name(),
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let toml_config: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        toml_config.to_config()
    }

    /// Table name
    pub fn name(&self) -> &str {
        self.table.name()
    }

    /// Build a transliteration engine over this table
    pub fn to_engine(&self) -> TransliterationEngine {
        TransliterationEngine::new(self.table.clone())
    }
}

impl ConfigToml {
    /// Convert parsed TOML to a validated Config
    fn to_config(&self) -> Result<Config, ConfigError> {
        let general = self.general.clone().unwrap_or_default();

        let mut entries: BTreeMap<String, String> = BTreeMap::new();
        let default_name = match general.extends.as_deref() {
            None => CUSTOM_NAME,
            Some(base) if base.eq_ignore_ascii_case(VASUDEVA_BASE) => {
                for (letter, glyph) in VASUDEVA_GLYPHS {
                    entries.insert(letter.to_string(), glyph.to_string());
                }
                VASUDEVA_NAME
            }
            Some(other) => return Err(ConfigError::UnknownBase(other.to_string())),
        };

        for (letter, glyph) in &self.glyphs {
            if let Some(previous) = entries.insert(letter.clone(), glyph.clone()) {
                log::debug!("Glyph for '{}' overridden: {} -> {}", letter, previous, glyph);
            }
        }

        let name = general.name.unwrap_or_else(|| default_name.to_string());
        let table = GlyphTable::from_str_pairs(name, &entries)?;

        Ok(Config {
            table,
            source_path: None,
        })
    }
}

/// Template for a user table file
pub fn default_config_content() -> &'static str {
    r#"# Vasudeva glyph table
# Pass this file with --config, or set [table] path in settings.toml

[general]
name = "My Vasudeva"
# Start from the built-in table; entries below replace single letters.
# Remove this line to define all 26 letters yourself.
extends = "vasudeva"

[glyphs]
# Every glyph must be a single character, distinct from all other glyphs
# and from the lowercase letters a-z.
# a = "Δ"
"#
}
