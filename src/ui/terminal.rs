//! Terminal lifecycle and the cooperative event loop.
//!
//! One thread does everything: the loop sleeps in `event::poll` for at most
//! the time until the controller's next scheduled advancement, so input is
//! handled the moment it arrives and ticks fire on time without busy
//! waiting.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};

use crate::app::{App, AppMode};
use crate::ui::view;

/// Poll timeout when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            self.render_frame(app)?;

            let now = Instant::now();
            let timeout = app.time_until_tick(now).unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release {
                        app.handle_key(key, Instant::now());
                    }
                }
            }

            // Fire the advancement clock regardless of what woke us
            app.tick(Instant::now());
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let snapshot = app.snapshot();
        let pivot_mode = app.controller().pivot_mode();
        let wpm = app.controller().rate();
        let pivot_col = app.config().reader.pivot_column;

        self.terminal.draw(|frame| {
            let area = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(area);
            let word_area = chunks[0];

            if app.mode == AppMode::Admin {
                let dashboard = if app.admin_unlocked() {
                    view::render_admin_dashboard(&app.analytics_summary())
                } else {
                    view::render_admin_dashboard(&Default::default())
                };
                frame.render_widget(dashboard, word_area);
                if !app.admin_unlocked() {
                    let overlay = centered_overlay(word_area, 44);
                    frame.render_widget(view::render_entry("Admin password", app.entry(), true), overlay);
                }
            } else if snapshot.total == 0 {
                frame.render_widget(view::render_placeholder(), word_area);
            } else {
                // Shift the word block so the pivot lands at the screen center
                let x_off = (word_area.width / 2).saturating_sub(pivot_col);
                let mid = word_area.y + word_area.height / 2;
                let word_rect = Rect {
                    x: word_area.x + x_off,
                    y: mid,
                    width: word_area.width.saturating_sub(x_off),
                    height: 1,
                };
                if mid > word_area.y {
                    let above = Rect { y: mid - 1, ..word_rect };
                    frame.render_widget(view::render_pivot_marker(pivot_col, "˅"), above);
                }
                frame.render_widget(view::render_word(&snapshot.decomposition, pivot_col), word_rect);
                if mid + 1 < word_area.y + word_area.height {
                    let below = Rect { y: mid + 1, ..word_rect };
                    frame.render_widget(view::render_pivot_marker(pivot_col, "˄"), below);
                }
            }

            frame.render_widget(
                view::render_progress_bar(snapshot.position, snapshot.total, chunks[1].width),
                chunks[1],
            );
            frame.render_widget(
                view::render_status_bar(&snapshot, pivot_mode, wpm, app.status()),
                chunks[2],
            );
            frame.render_widget(view::render_help_bar(), chunks[3]);

            match app.mode {
                AppMode::TextEntry => {
                    let overlay = centered_overlay(word_area, 64);
                    frame.render_widget(view::render_entry("Source text", app.entry(), false), overlay);
                }
                AppMode::FileEntry => {
                    let overlay = centered_overlay(word_area, 64);
                    frame.render_widget(view::render_entry("File path (.txt or .pdf)", app.entry(), false), overlay);
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

fn centered_overlay(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width.saturating_sub(2)).max(1);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(3) / 2;
    Rect {
        x,
        y,
        width,
        height: 3.min(area.height),
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
