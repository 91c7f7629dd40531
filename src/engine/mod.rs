//! The word-pacing core: tokenizer, pivot calculator and playback clock.

pub mod config;
pub mod pivot;
pub mod playback;
pub mod timing;
pub mod tokenize;

pub use config::{Config, ReaderConfig, TimingConfig, MAX_WPM, MIN_WPM};
pub use pivot::{decompose, pivot_index, Decomposition, PivotMode};
pub use playback::{PlaybackController, PlaybackState, Snapshot};
pub use timing::{clamp_wpm, wpm_to_milliseconds};
pub use tokenize::tokenize;
