//! Playback controller: the word-pacing state machine and its clock.
//!
//! The controller owns the tokenized sequence, the current position, the
//! rate, and at most one outstanding tick. It never blocks and never spawns:
//! the embedding event loop asks [`PlaybackController::time_until_tick`] how
//! long it may sleep and calls [`PlaybackController::poll`] with the current
//! instant each iteration. Each fired tick performs its advancement and only
//! then schedules the next deadline from the current instant and the current
//! rate, so execution jitter never compounds and a rate change applies to
//! the next interval rather than the one already in flight.
//!
//! Every state transition (play, pause, reset, text replacement) cancels the
//! outstanding tick synchronously before touching state. A cancelled tick is
//! gone; it cannot fire against a stale sequence or position.

use std::time::{Duration, Instant};

use crate::engine::config::TimingConfig;
use crate::engine::pivot::{decompose, Decomposition, PivotMode};
use crate::engine::timing::{clamp_wpm, wpm_to_milliseconds};
use crate::engine::tokenize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

/// The single scheduled advancement. Replaced wholesale on every schedule,
/// dropped on every cancel.
#[derive(Debug, Clone, Copy)]
struct TickHandle {
    deadline: Instant,
    generation: u64,
}

/// Read surface exposed to the renderer after every transition and tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: PlaybackState,
    pub position: usize,
    pub total: usize,
    pub current_unit: Option<String>,
    pub decomposition: Decomposition,
}

pub struct PlaybackController {
    words: Vec<String>,
    position: usize,
    wpm: u32,
    state: PlaybackState,
    pivot_mode: PivotMode,
    timer: Option<TickHandle>,
    generation: u64,
}

impl PlaybackController {
    pub fn new(config: &TimingConfig) -> Self {
        Self {
            words: Vec::new(),
            position: 0,
            wpm: config.default_wpm,
            state: PlaybackState::Idle,
            pivot_mode: PivotMode::default(),
            timer: None,
            generation: 0,
        }
    }

    pub fn with_text(config: &TimingConfig, text: &str) -> Self {
        let mut controller = Self::new(config);
        controller.set_source_text(text);
        controller
    }

    /// Replaces the source text. The old sequence's timer is cancelled before
    /// the new sequence becomes visible, so no tick can ever advance into the
    /// new sequence's indices.
    pub fn set_source_text(&mut self, text: &str) {
        self.cancel_timer();
        self.words = tokenize(text);
        self.position = 0;
        self.state = PlaybackState::Idle;
        tracing::debug!(words = self.words.len(), "source text replaced");
    }

    /// Updates the rate. Zero is rejected, anything else clamps into range.
    /// A pending tick keeps its deadline; the new rate applies when the next
    /// tick is scheduled.
    pub fn set_rate(&mut self, wpm: u32) {
        if let Some(wpm) = clamp_wpm(wpm) {
            self.wpm = wpm;
        }
    }

    /// Nudges the rate by a signed step, clamping at the bounds.
    pub fn adjust_rate(&mut self, delta: i32) {
        let requested = self.wpm.saturating_add_signed(delta).max(1);
        self.set_rate(requested);
    }

    pub fn set_pivot_mode(&mut self, mode: PivotMode) {
        self.pivot_mode = mode;
    }

    pub fn toggle_pivot_mode(&mut self) {
        self.pivot_mode = self.pivot_mode.toggled();
    }

    /// Starts or resumes playback. Replays from the start when already at
    /// the last word. No-op for an empty sequence or while already playing.
    pub fn play(&mut self, now: Instant) {
        if self.words.is_empty() || self.state == PlaybackState::Playing {
            return;
        }
        self.cancel_timer();
        if self.position >= self.words.len() - 1 {
            self.position = 0;
        }
        self.state = PlaybackState::Playing;
        self.schedule(now);
    }

    /// Suspends advancement, keeping the position.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.cancel_timer();
        self.state = PlaybackState::Paused;
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Idle | PlaybackState::Paused => self.play(now),
        }
    }

    /// Back to Idle at position 0 from any state.
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.state = PlaybackState::Idle;
        self.position = 0;
    }

    /// Moves the position, clamped to the sequence bounds. Playback state is
    /// untouched; the next render shows the unit at the new position.
    pub fn seek(&mut self, index: usize) {
        if self.words.is_empty() {
            self.position = 0;
        } else {
            self.position = index.min(self.words.len() - 1);
        }
    }

    pub fn seek_relative(&mut self, delta: i64) {
        let target = (self.position as i64 + delta).max(0) as usize;
        self.seek(target);
    }

    /// How long the caller may wait before the pending tick is due. `None`
    /// when nothing is scheduled.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|tick| tick.deadline.saturating_duration_since(now))
    }

    /// Fires the pending tick if its deadline has passed. Returns whether an
    /// advancement happened. Advancing past the last word stops the clock
    /// and returns to Idle at position 0 rather than freezing on the final
    /// word.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(tick) = self.timer else {
            return false;
        };
        if tick.generation != self.generation || now < tick.deadline {
            return false;
        }
        self.timer = None;

        if self.position + 1 >= self.words.len() {
            self.state = PlaybackState::Idle;
            self.position = 0;
            return true;
        }
        self.position += 1;
        self.schedule(now);
        true
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn rate(&self) -> u32 {
        self.wpm
    }

    pub fn pivot_mode(&self) -> PivotMode {
        self.pivot_mode
    }

    pub fn current_unit(&self) -> Option<&str> {
        self.words.get(self.position).map(String::as_str)
    }

    pub fn snapshot(&self) -> Snapshot {
        let current_unit = self.current_unit().map(str::to_owned);
        let decomposition = current_unit
            .as_deref()
            .map(|unit| decompose(unit, self.pivot_mode))
            .unwrap_or_default();
        Snapshot {
            state: self.state,
            position: self.position,
            total: self.words.len(),
            current_unit,
            decomposition,
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.generation += 1;
        let delay = Duration::from_millis(wpm_to_milliseconds(self.wpm));
        self.timer = Some(TickHandle {
            deadline: now + delay,
            generation: self.generation,
        });
    }

    fn cancel_timer(&mut self) {
        self.generation += 1;
        self.timer = None;
    }
}
