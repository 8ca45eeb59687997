// Vasudeva Settings Module
// User preferences shared by the CLI and the terminal UI

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Direction;

/// User settings for the translator front ends
///
/// Loaded from a TOML file (default: ~/.config/vasudeva/settings.toml).
/// None of these affect the engine itself; they only decide how callers
/// prepare input and which table they load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Strip surrounding whitespace from input before translating
    trim_input: bool,

    /// Direction used when the CLI is run without a subcommand
    default_direction: Direction,

    /// Custom glyph table file
    table_path: Option<PathBuf>,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    general: Option<GeneralSettings>,

    #[serde(default)]
    input: Option<InputSettings>,

    #[serde(default)]
    table: Option<TableSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct GeneralSettings {
    #[serde(default)]
    direction: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct InputSettings {
    #[serde(default)]
    trim: Option<toml::Value>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct TableSettings {
    #[serde(default)]
    path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self {
            trim_input: true,
            default_direction: Direction::Forward,
            table_path: None,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(general) = toml_settings.general {
            if let Some(direction) = general.direction {
                settings.default_direction = Direction::from_str(direction.trim()).map_err(|_| {
                    SettingsError::InvalidValue(format!("Unknown direction '{}'", direction))
                })?;
            }
        }

        if let Some(input) = toml_settings.input {
            if let Some(trim) = input.trim {
                settings.trim_input = parse_bool_value(&trim)?;
            }
        }

        if let Some(table) = toml_settings.table {
            settings.table_path = table.path.filter(|p| !p.as_os_str().is_empty());
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vasudeva").join("settings.toml"))
    }

    /// Load from default location (~/.config/vasudeva/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        log::debug!("No settings file found, using defaults");
        Ok(Self::new())
    }

    /// Whether input is trimmed before translating
    pub fn trim_input(&self) -> bool {
        self.trim_input
    }

    /// Override the trimming policy (e.g. from `--no-trim`)
    pub fn set_trim_input(&mut self, trim: bool) {
        self.trim_input = trim;
    }

    /// Direction used when the caller does not name one
    pub fn default_direction(&self) -> Direction {
        self.default_direction
    }

    /// Get the custom table path, resolved against the settings file's directory
    pub fn table_path(&self) -> Option<PathBuf> {
        let path = self.table_path.as_ref()?;
        if path.is_relative() {
            if let Some(dir) = self.source_path.as_ref().and_then(|p| p.parent()) {
                return Some(dir.join(path));
            }
        }
        Some(path.clone())
    }

    /// Apply the input policy to raw caller text.
    ///
    /// Returns `None` when nothing is left to translate.
    pub fn prepare_input<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let text = if self.trim_input { raw.trim() } else { raw };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Vasudeva Settings
# Place this file at: ~/.config/vasudeva/settings.toml

[general]
# Direction used by `vasudeva` when no subcommand is given: "forward" or "reverse"
direction = "forward"

[input]
# Strip leading/trailing whitespace before translating
trim = true

[table]
# Optional custom glyph table (relative paths resolve next to this file)
# path = "table.toml"
"#
}
