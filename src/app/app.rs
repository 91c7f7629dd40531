use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use crate::analytics::{SessionSink, Summary};
use crate::app::auth::AdminGate;
use crate::app::mode::AppMode;
use crate::engine::{Config, PlaybackController, PlaybackState, Snapshot};
use crate::input;

/// Demonstration text shown on startup.
pub const DEFAULT_TEXT: &str = "Welcome to SwiftRead. This is an example of how \
speed reading works. Paste your own text below to get started. Rapid Serial \
Visual Presentation helps you focus on one word at a time, eliminating eye \
movements and dramatically increasing reading speed.";

/// Application wiring: the playback controller plus the thin collaborators
/// around it (text acquisition, session logging, admin gate) and the input
/// routing for each view.
pub struct App {
    pub mode: AppMode,
    controller: PlaybackController,
    config: Config,
    /// Line buffer for text/file/password entry.
    entry: String,
    status: Option<String>,
    sink: Box<dyn SessionSink>,
    gate: Box<dyn AdminGate>,
    admin_unlocked: bool,
    /// A session is logged once per text, on first play.
    session_logged: bool,
}

impl App {
    pub fn new(config: Config, sink: Box<dyn SessionSink>, gate: Box<dyn AdminGate>) -> Self {
        let controller = PlaybackController::with_text(&config.timing, DEFAULT_TEXT);
        Self {
            mode: AppMode::Reader,
            controller,
            config,
            entry: String::new(),
            status: None,
            sink,
            gate,
            admin_unlocked: false,
            session_logged: false,
        }
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn admin_unlocked(&self) -> bool {
        self.admin_unlocked
    }

    pub fn analytics_summary(&self) -> Summary {
        self.sink.summary()
    }

    /// Replaces the source text: playback stops, position and the
    /// once-per-text logging flag reset.
    pub fn set_source_text(&mut self, text: &str) {
        self.controller.set_source_text(text);
        self.session_logged = false;
    }

    /// Forwards the clock. Returns whether the displayed word changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controller.poll(now)
    }

    /// How long the event loop may block waiting for input.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.controller.time_until_tick(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.status = None;
        match self.mode {
            AppMode::Reader => self.handle_reader_key(key.code, now),
            AppMode::TextEntry | AppMode::FileEntry => self.handle_entry_key(key.code),
            AppMode::Admin => self.handle_admin_key(key.code),
            AppMode::Quit => {}
        }
    }

    fn handle_reader_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Char(' ') => self.toggle_playback(now),
            KeyCode::Char('q') | KeyCode::Esc => self.mode = AppMode::Quit,
            KeyCode::Char('r') => self.controller.reset(),
            KeyCode::Char('o') => {
                self.controller.toggle_pivot_mode();
                self.status = Some(format!(
                    "Pivot mode: {}",
                    self.controller.pivot_mode().label()
                ));
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                self.controller.adjust_rate(self.config.timing.wpm_step as i32);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
                self.controller.adjust_rate(-(self.config.timing.wpm_step as i32));
            }
            KeyCode::Left | KeyCode::Char('h') => self.controller.seek_relative(-1),
            KeyCode::Right | KeyCode::Char('l') => self.controller.seek_relative(1),
            KeyCode::Home | KeyCode::Char('0') => self.controller.seek(0),
            KeyCode::Char('e') => self.enter_mode(AppMode::TextEntry),
            KeyCode::Char('f') => self.enter_mode(AppMode::FileEntry),
            KeyCode::Char('v') => self.paste_clipboard(),
            KeyCode::Char('c') => {
                self.set_source_text("");
                self.status = Some("Text cleared".to_string());
            }
            KeyCode::Char('a') => self.enter_mode(AppMode::Admin),
            _ => {}
        }
    }

    fn handle_entry_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.entry.clear();
                self.mode = AppMode::Reader;
            }
            KeyCode::Enter => self.commit_entry(),
            KeyCode::Backspace => {
                self.entry.pop();
            }
            KeyCode::Char(c) => self.entry.push(c),
            _ => {}
        }
    }

    fn handle_admin_key(&mut self, code: KeyCode) {
        if !self.admin_unlocked {
            match code {
                KeyCode::Esc => {
                    self.entry.clear();
                    self.mode = AppMode::Reader;
                }
                KeyCode::Enter => {
                    let unlocked = self.gate.verify(&self.entry);
                    self.entry.clear();
                    if unlocked {
                        self.admin_unlocked = true;
                        tracing::info!("admin dashboard unlocked");
                    } else {
                        self.status = Some("Incorrect password".to_string());
                        tracing::warn!("admin login rejected");
                    }
                }
                KeyCode::Backspace => {
                    self.entry.pop();
                }
                KeyCode::Char(c) => self.entry.push(c),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                // Leaving the dashboard locks it again
                self.admin_unlocked = false;
                self.mode = AppMode::Reader;
            }
            KeyCode::Char('x') => {
                self.sink.clear();
                self.status = Some("Statistics cleared".to_string());
            }
            _ => {}
        }
    }

    fn enter_mode(&mut self, mode: AppMode) {
        self.entry.clear();
        self.mode = mode;
    }

    fn toggle_playback(&mut self, now: Instant) {
        self.controller.toggle(now);
        if self.controller.state() == PlaybackState::Playing {
            self.maybe_log_session();
        }
    }

    /// Records the session the first time this text is played, and only for
    /// texts long enough to be a real read.
    fn maybe_log_session(&mut self) {
        if self.session_logged || self.controller.len() <= self.config.reader.min_logged_words {
            return;
        }
        self.sink
            .record(self.controller.len(), self.controller.rate());
        self.session_logged = true;
        tracing::info!(
            words = self.controller.len(),
            wpm = self.controller.rate(),
            "read session recorded"
        );
    }

    fn commit_entry(&mut self) {
        let entry = std::mem::take(&mut self.entry);
        match self.mode {
            AppMode::TextEntry => {
                self.set_source_text(&entry);
                self.status = Some(format!("Loaded {} words", self.controller.len()));
                self.mode = AppMode::Reader;
            }
            AppMode::FileEntry => match input::load_path(entry.trim()) {
                Ok(loaded) => {
                    self.set_source_text(&loaded.text);
                    self.status = Some(format!(
                        "Loaded {} words from {}",
                        self.controller.len(),
                        loaded.source
                    ));
                    self.mode = AppMode::Reader;
                }
                Err(e) => {
                    // Collaborator errors pass through as opaque text
                    self.status = Some(e.to_string());
                    self.mode = AppMode::Reader;
                }
            },
            _ => {}
        }
    }

    fn paste_clipboard(&mut self) {
        match input::clipboard::load() {
            Ok(loaded) => {
                self.set_source_text(&loaded.text);
                self.status = Some(format!("Pasted {} words", self.controller.len()));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}
