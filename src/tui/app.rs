use vasudeva_core::{Config, Direction, Settings, TransliterationEngine};

const MAX_OUTPUT_LINES: usize = 800;

const EMPTY_LATIN_WARNING: &str = "Please enter some text in English.";
const EMPTY_GLYPH_WARNING: &str = "Please enter some Vasudeva text to translate back.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    LatinInput,
    GlyphInput,
    Output,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PendingAction {
    ClearAll,
}

pub struct App {
    pub focused_pane: Pane,
    /// English text typed by the user (top left)
    pub latin_input: String,
    /// Glyphs produced from `latin_input` (top right)
    pub glyph_output: String,
    /// Glyph text typed by the user (bottom right)
    pub glyph_input: String,
    /// English produced from `glyph_input` (bottom left)
    pub latin_output: String,
    pub engine: TransliterationEngine,
    pub settings: Settings,
    pub status: String,
    pub output: Vec<String>,
    /// First visible line of the output log
    pub output_scroll: usize,
    /// Rows the output log had at the last render
    pub output_height: usize,
    pub confirm_prompt: Option<String>,
    pub pending_action: Option<PendingAction>,
}

impl App {
    pub fn new(engine: TransliterationEngine, settings: Settings) -> Self {
        Self {
            focused_pane: Pane::LatinInput,
            latin_input: String::new(),
            glyph_output: String::new(),
            glyph_input: String::new(),
            latin_output: String::new(),
            engine,
            settings,
            status: "Ready".to_string(),
            output: vec![],
            output_scroll: 0,
            output_height: 0,
            confirm_prompt: None,
            pending_action: None,
        }
    }

    pub fn table_name(&self) -> &str {
        self.engine.table().name()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn push_output<S: AsRef<str>>(&mut self, msg: S) {
        for line in msg.as_ref().lines() {
            self.output.push(line.to_string());
        }
        if self.output.len() > MAX_OUTPUT_LINES {
            let overflow = self.output.len() - MAX_OUTPUT_LINES;
            self.output.drain(0..overflow);
        }
        // Auto-scroll to bottom on new output
        self.output_scroll = self.max_output_scroll();
    }

    /// Highest first line that still fills the output log
    pub fn max_output_scroll(&self) -> usize {
        self.output.len().saturating_sub(self.output_height)
    }

    pub fn scroll_output_up(&mut self) {
        self.output_scroll = self
            .output_scroll
            .min(self.max_output_scroll())
            .saturating_sub(1);
    }

    pub fn scroll_output_down(&mut self) {
        self.output_scroll = (self.output_scroll + 1).min(self.max_output_scroll());
    }

    pub fn start_confirm<S: Into<String>>(&mut self, prompt: S, action: PendingAction) {
        self.confirm_prompt = Some(prompt.into());
        self.pending_action = Some(action);
    }

    pub fn clear_confirm(&mut self) {
        self.confirm_prompt = None;
        self.pending_action = None;
    }

    /// The editable buffer behind the focused pane, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focused_pane {
            Pane::LatinInput => Some(&mut self.latin_input),
            Pane::GlyphInput => Some(&mut self.glyph_input),
            Pane::Output => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(buf) = self.focused_input_mut() {
            buf.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.focused_input_mut() {
            buf.pop();
        }
    }

    /// Translate the focused input pane in its direction
    pub fn translate_focused(&mut self) {
        match self.focused_pane {
            Pane::LatinInput => self.translate(Direction::Forward),
            Pane::GlyphInput => self.translate(Direction::Reverse),
            Pane::Output => self.set_status("Focus an input pane to translate"),
        }
    }

    pub fn translate(&mut self, direction: Direction) {
        let (raw, warning) = match direction {
            Direction::Forward => (&self.latin_input, EMPTY_LATIN_WARNING),
            Direction::Reverse => (&self.glyph_input, EMPTY_GLYPH_WARNING),
        };

        let Some(text) = self.settings.prepare_input(raw) else {
            self.set_status(warning);
            self.push_output(format!("! {}", warning));
            return;
        };

        let translation = self.engine.translate_with_stats(direction, text);
        let summary = format!(
            "{} chars ({} mapped, {} passed through)",
            translation.len(),
            translation.mapped,
            translation.passthrough
        );
        self.push_output(format!("$ {} {}", direction, text));
        self.push_output(&translation.text);

        match direction {
            Direction::Forward => {
                self.glyph_output = translation.text;
                self.set_status(format!("English -> {}: {}", self.table_name(), summary));
            }
            Direction::Reverse => {
                self.latin_output = translation.text;
                self.set_status(format!("{} -> English: {}", self.table_name(), summary));
            }
        }
    }

    /// Re-read the settings file and the table it points at.
    ///
    /// Nothing changes unless both load cleanly.
    pub fn reload_settings(&mut self) {
        match self.load_reloaded() {
            Ok((settings, engine)) => {
                self.settings = settings;
                self.engine = engine;
                let msg = format!("Reloaded settings (table '{}')", self.table_name());
                self.push_output(format!("$ reload\n{}", msg));
                self.set_status(msg);
            }
            Err(msg) => {
                self.push_output(format!("! {}", msg));
                self.set_status(msg);
            }
        }
    }

    fn load_reloaded(&self) -> Result<(Settings, TransliterationEngine), String> {
        let mut settings = self.settings.clone();
        settings
            .reload()
            .map_err(|e| format!("Reload failed: {}", e))?;

        let engine = match settings.table_path() {
            Some(path) => Config::from_toml_path(&path)
                .map_err(|e| format!("Reload failed: {}: {}", path.display(), e))?
                .to_engine(),
            None => TransliterationEngine::vasudeva(),
        };
        Ok((settings, engine))
    }

    pub fn request_clear_all(&mut self) {
        self.start_confirm("Clear all text areas?", PendingAction::ClearAll);
    }

    pub fn clear_all(&mut self) {
        self.latin_input.clear();
        self.glyph_output.clear();
        self.glyph_input.clear();
        self.latin_output.clear();
        self.set_status("Cleared all text areas");
    }

    pub fn run_pending(&mut self, action: PendingAction) {
        match action {
            PendingAction::ClearAll => self.clear_all(),
        }
    }

    pub fn cycle_pane_forward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::LatinInput => Pane::GlyphInput,
            Pane::GlyphInput => Pane::Output,
            Pane::Output => Pane::LatinInput,
        };
    }

    pub fn cycle_pane_backward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::LatinInput => Pane::Output,
            Pane::GlyphInput => Pane::LatinInput,
            Pane::Output => Pane::GlyphInput,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(TransliterationEngine::vasudeva(), Settings::new())
    }

    #[test]
    fn test_translate_latin_input() {
        let mut app = app();
        app.latin_input = "  ab AB \n".to_string();
        app.translate_focused();

        assert_eq!(app.glyph_output, "Δ∇ Δ∇");
        assert!(app.status.contains("4 mapped"));
        assert_eq!(app.output, vec!["$ forward ab AB", "Δ∇ Δ∇"]);
    }

    #[test]
    fn test_translate_glyph_input() {
        let mut app = app();
        app.focused_pane = Pane::GlyphInput;
        app.glyph_input = "Δ∇ Δ∇".to_string();
        app.translate_focused();

        assert_eq!(app.latin_output, "ab ab");
        assert!(app.glyph_output.is_empty());
    }

    #[test]
    fn test_empty_input_warns_and_keeps_output() {
        let mut app = app();
        app.glyph_output = "Δ".to_string();
        app.latin_input = "   ".to_string();
        app.translate(Direction::Forward);

        assert_eq!(app.status, EMPTY_LATIN_WARNING);
        assert_eq!(app.glyph_output, "Δ");

        app.translate(Direction::Reverse);
        assert_eq!(app.status, EMPTY_GLYPH_WARNING);
        assert_eq!(app.output.len(), 2);
    }

    #[test]
    fn test_editing_only_touches_focused_input() {
        let mut app = app();
        app.insert_char('h');
        app.insert_char('i');
        app.cycle_pane_forward();
        app.insert_char('Δ');
        app.backspace();
        app.backspace();
        app.cycle_pane_forward();
        app.insert_char('x');

        assert_eq!(app.latin_input, "hi");
        assert_eq!(app.glyph_input, "");
        assert_eq!(app.focused_pane, Pane::Output);
    }

    #[test]
    fn test_clear_all() {
        let mut app = app();
        app.latin_input = "a".to_string();
        app.glyph_output = "Δ".to_string();
        app.glyph_input = "∇".to_string();
        app.latin_output = "b".to_string();
        app.run_pending(PendingAction::ClearAll);

        assert!(app.latin_input.is_empty());
        assert!(app.glyph_output.is_empty());
        assert!(app.glyph_input.is_empty());
        assert!(app.latin_output.is_empty());
    }

    #[test]
    fn test_output_is_bounded() {
        let mut app = app();
        for i in 0..(MAX_OUTPUT_LINES + 10) {
            app.push_output(format!("line {}", i));
        }
        assert_eq!(app.output.len(), MAX_OUTPUT_LINES);
        assert_eq!(app.output[0], "line 10");
        assert_eq!(app.output_scroll, MAX_OUTPUT_LINES);
    }

    #[test]
    fn test_output_scroll_stays_within_log() {
        let mut app = app();
        app.output_height = 4;
        for i in 0..10 {
            app.push_output(format!("line {}", i));
        }
        assert_eq!(app.output_scroll, 6);

        app.scroll_output_down();
        assert_eq!(app.output_scroll, 6);
        app.scroll_output_up();
        assert_eq!(app.output_scroll, 5);

        for _ in 0..20 {
            app.scroll_output_up();
        }
        assert_eq!(app.output_scroll, 0);
    }

    #[test]
    fn test_reload_without_settings_file_keeps_state() {
        let mut app = app();
        app.reload_settings();

        assert!(app.status.starts_with("Reload failed"));
        assert_eq!(app.table_name(), "Vasudeva");
        assert!(app.settings.trim_input());
    }

    #[test]
    fn test_reload_picks_up_new_settings_and_table() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.toml");
        std::fs::write(&settings_path, "[input]\ntrim = false\n").unwrap();

        let settings = Settings::from_file(&settings_path).unwrap();
        let mut app = App::new(TransliterationEngine::vasudeva(), settings);
        assert!(!app.settings.trim_input());

        std::fs::write(
            dir.path().join("table.toml"),
            "[general]\nname = \"Starry\"\nextends = \"vasudeva\"\n\n[glyphs]\na = \"★\"\n",
        )
        .unwrap();
        std::fs::write(&settings_path, "[table]\npath = \"table.toml\"\n").unwrap();
        app.reload_settings();

        assert_eq!(app.table_name(), "Starry");
        assert!(app.settings.trim_input());
        app.latin_input = " ab ".to_string();
        app.translate(Direction::Forward);
        assert_eq!(app.glyph_output, "★∇");
    }

    #[test]
    fn test_reload_with_broken_table_keeps_old_engine() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.toml");
        std::fs::write(&settings_path, "[table]\npath = \"table.toml\"\n").unwrap();
        std::fs::write(
            dir.path().join("table.toml"),
            "[general]\nextends = \"vasudeva\"\n\n[glyphs]\nc = \"Δ\"\n",
        )
        .unwrap();

        let settings = Settings::from_file(&settings_path).unwrap();
        let mut app = App::new(TransliterationEngine::vasudeva(), settings.clone());
        app.reload_settings();

        assert!(app.status.contains("Duplicate glyph"));
        assert_eq!(app.table_name(), "Vasudeva");
        assert_eq!(app.settings, settings);
    }

    #[test]
    fn test_pane_cycle_round_trip() {
        let mut app = app();
        app.cycle_pane_backward();
        assert_eq!(app.focused_pane, Pane::Output);
        app.cycle_pane_forward();
        assert_eq!(app.focused_pane, Pane::LatinInput);
    }
}
