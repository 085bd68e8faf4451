//! TUI application state and logic

use crate::game::{GameState, Submission};
use crate::validator::{Dictionary, possible_words};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the side panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub game: GameState<&'a Dictionary>,
    pub dictionary: &'a Dictionary,
    pub start_words: &'a [String],
    pub possible: Vec<&'a str>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Dismissable popup shown when a word is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// With a seed the sequence of root words is reproducible.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, start_words: &'a [String], seed: Option<u64>) -> Self {
        let game = match seed {
            Some(seed) => GameState::with_seed(dictionary, seed),
            None => GameState::new(dictionary),
        };

        let mut app = Self {
            game,
            dictionary,
            start_words,
            possible: Vec::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Find words hidden in the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            alert: None,
            stats: Statistics::default(),
            should_quit: false,
        };
        app.new_round();
        app
    }

    pub fn new_round(&mut self) {
        self.stats.rounds_played += 1;
        let root = self.game.start_round(self.start_words);
        self.possible = possible_words(root, self.dictionary);
        self.input_buffer.clear();
        self.alert = None;

        let text = format!(
            "New word: {} ({} words to find)",
            self.game.root_word().to_uppercase(),
            self.possible.len()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Submit the input buffer; the buffer is cleared whatever the outcome
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&input) {
            Ok(Submission::Accepted { word, score }) => {
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                self.add_message(
                    &format!("+1 for {} ({} letters)", word.to_uppercase(), word.chars().count()),
                    MessageStyle::Success,
                );
            }
            Ok(Submission::Ignored) => {}
            Err(rejection) => {
                self.add_message(rejection.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(),
                });
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open alert swallows input until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::F(2) => self.new_round(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                if self.input_buffer.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input_buffer.clear();
                }
            }
            _ => {}
        }
    }

    /// Number of playable words found so far this round
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.game
            .used_words()
            .iter()
            .filter(|word| self.possible.contains(&word.as_str()))
            .count()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    debug!(
        "Session over: {} rounds, {} words found",
        app.stats.rounds_played, app.stats.words_found
    );
    Ok(())
}
