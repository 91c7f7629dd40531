// Configuration for the reader engine and UI defaults.

/// Lowest accepted reading rate.
pub const MIN_WPM: u32 = 60;
/// Highest accepted reading rate.
pub const MAX_WPM: u32 = 1000;

/// Pacing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    /// Starting rate in words per minute.
    pub default_wpm: u32,
    /// Increment applied by the speed-up/slow-down keys.
    pub wpm_step: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_wpm: 300,
            wpm_step: 25,
        }
    }
}

/// Reader view configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Screen column (within the word area) the pivot character sits on.
    pub pivot_column: u16,
    /// A session is recorded only for texts longer than this many words.
    pub min_logged_words: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            pivot_column: 14,
            min_logged_words: 5,
        }
    }
}

/// Master configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub timing: TimingConfig,
    pub reader: ReaderConfig,
}
