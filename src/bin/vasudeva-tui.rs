// Vasudeva Terminal UI
// Two-way translator in the terminal

#[path = "../tui/mod.rs"]
mod tui;

use anyhow::Context;

use vasudeva_core::{Config, Settings};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load_default().context("failed to load settings")?;

    let config = match settings.table_path() {
        Some(path) => Config::from_toml_path(&path)
            .with_context(|| format!("failed to load glyph table {}", path.display()))?,
        None => Config::default(),
    };

    tui::run(config.to_engine(), settings)?;
    Ok(())
}
