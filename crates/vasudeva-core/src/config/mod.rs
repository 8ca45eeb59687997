// Vasudeva Config API
// Custom glyph tables loaded from TOML

pub mod parser;

pub use parser::{Config, ConfigError};
