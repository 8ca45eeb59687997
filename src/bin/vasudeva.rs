// Vasudeva CLI
// Translate text between Latin letters and Vasudeva glyphs

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use vasudeva_core::{Config, Direction, Settings, TransliterationEngine};

/// Vasudeva glyph translator
#[derive(Parser, Debug)]
#[command(name = "vasudeva")]
#[command(author = "vasudeva contributors")]
#[command(version)]
#[command(about = "Translate text to and from Vasudeva glyphs", long_about = None)]
struct Args {
    /// TOML glyph table file (overrides settings)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Keep surrounding whitespace in the input
    #[arg(long)]
    no_trim: bool,

    /// Log mapped/passed-through character counts (shown with --verbose)
    #[arg(long)]
    stats: bool,

    /// Validate the glyph table and exit
    #[arg(long)]
    check_config: bool,

    /// Print the glyph table and exit
    #[arg(long)]
    show_table: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Latin letters to glyphs (reads stdin when TEXT is omitted)
    #[command(visible_alias = "encode")]
    Forward { text: Vec<String> },

    /// Glyphs to Latin letters (reads stdin when TEXT is omitted)
    #[command(visible_alias = "decode")]
    Reverse { text: Vec<String> },
}

impl Command {
    fn direction(&self) -> Direction {
        match self {
            Command::Forward { .. } => Direction::Forward,
            Command::Reverse { .. } => Direction::Reverse,
        }
    }

    fn words(&self) -> &[String] {
        match self {
            Command::Forward { text } | Command::Reverse { text } => text,
        }
    }
}

/// Main application state
struct Application {
    args: Args,
    settings: Settings,
    engine: TransliterationEngine,
    /// File the glyph table came from, `None` for the built-in table
    table_source: Option<PathBuf>,
}

/// Pick the table file: `--config` > settings `[table] path` > built-in
fn resolve_table_path(args: &Args, settings: &Settings) -> Option<PathBuf> {
    args.config.clone().or_else(|| settings.table_path())
}

fn describe_table_source(source: Option<&Path>) -> String {
    match source {
        Some(path) => format!("loaded from {}", path.display()),
        None => "built-in".to_string(),
    }
}

impl Application {
    fn new(args: Args) -> anyhow::Result<Self> {
        let mut settings = match Settings::load_default() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Could not load settings, using defaults: {}", e);
                Settings::new()
            }
        };
        if args.no_trim {
            settings.set_trim_input(false);
        }

        let config = match resolve_table_path(&args, &settings) {
            Some(path) => Config::from_toml_path(&path)
                .with_context(|| format!("failed to load glyph table {}", path.display()))?,
            None => Config::default(),
        };
        log::debug!("Using glyph table '{}'", config.name());

        Ok(Self {
            engine: config.to_engine(),
            table_source: config.source_path,
            args,
            settings,
        })
    }

    /// Validate configuration
    fn validate(&self) -> anyhow::Result<()> {
        println!(
            "Configuration is valid ({} glyphs in '{}', {})",
            self.engine.table().len(),
            self.engine.table().name(),
            describe_table_source(self.table_source.as_deref())
        );
        Ok(())
    }

    fn show_table(&self) -> anyhow::Result<()> {
        print!("{}", self.engine.table());
        Ok(())
    }

    /// Translate the command's text, or stdin when none was given
    fn run(&self) -> anyhow::Result<()> {
        let (direction, raw) = match &self.args.command {
            Some(command) if !command.words().is_empty() => {
                (command.direction(), command.words().join(" "))
            }
            Some(command) => (command.direction(), read_stdin()?),
            None => (self.settings.default_direction(), read_stdin()?),
        };

        let Some(text) = self.settings.prepare_input(&raw) else {
            log::warn!("Input is empty after trimming");
            bail!("no text to translate");
        };

        let translation = self.engine.translate_with_stats(direction, text);
        if self.args.stats {
            log::debug!(
                "{}: {} chars mapped, {} passed through",
                direction,
                translation.mapped,
                translation.passthrough
            );
        }
        println!("{}", translation.text);
        Ok(())
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        log::debug!("Reading text from terminal until EOF");
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}

fn init_logging(args: &Args) {
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let app = Application::new(args)?;

    if app.args.check_config {
        return app.validate();
    }

    if app.args.show_table {
        return app.show_table();
    }

    app.run()
}
