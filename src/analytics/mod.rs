//! Usage analytics: an opaque session-logging collaborator.
//!
//! The reader records one session per text (word count and rate) through
//! [`SessionSink`]; the admin dashboard reads aggregate numbers back. The
//! core engine knows nothing about any of this.

pub mod store;

pub use store::SessionStore;

/// One recorded reading session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadSession {
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub word_count: usize,
    pub wpm: u32,
}

/// Aggregate numbers shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_sessions: usize,
    pub total_words: usize,
    pub avg_word_count: usize,
    pub median_word_count: usize,
    pub avg_wpm: u32,
}

/// Where session records go. The reader only ever calls `record`; failures
/// are logged, never surfaced to the reading flow. The dashboard reads
/// `summary` and may `clear` the record.
pub trait SessionSink {
    fn record(&mut self, word_count: usize, wpm: u32);

    fn summary(&self) -> Summary {
        Summary::default()
    }

    fn clear(&mut self) {}
}

pub fn summarize(sessions: &[ReadSession]) -> Summary {
    if sessions.is_empty() {
        return Summary::default();
    }

    let total_sessions = sessions.len();
    let total_words: usize = sessions.iter().map(|s| s.word_count).sum();
    let avg_word_count = total_words / total_sessions;

    let mut counts: Vec<usize> = sessions.iter().map(|s| s.word_count).collect();
    counts.sort_unstable();
    let mid = counts.len() / 2;
    let median_word_count = if counts.len() % 2 == 0 {
        (counts[mid - 1] + counts[mid]) / 2
    } else {
        counts[mid]
    };

    let avg_wpm =
        (sessions.iter().map(|s| u64::from(s.wpm)).sum::<u64>() / total_sessions as u64) as u32;

    Summary {
        total_sessions,
        total_words,
        avg_word_count,
        median_word_count,
        avg_wpm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word_count: usize, wpm: u32) -> ReadSession {
        ReadSession {
            timestamp: 0,
            word_count,
            wpm,
        }
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn test_summarize_single_session() {
        let summary = summarize(&[session(100, 300)]);
        assert_eq!(summary.total_sessions, 1);
        assert_eq!(summary.total_words, 100);
        assert_eq!(summary.avg_word_count, 100);
        assert_eq!(summary.median_word_count, 100);
        assert_eq!(summary.avg_wpm, 300);
    }

    #[test]
    fn test_summarize_median_odd_count() {
        let summary = summarize(&[session(10, 300), session(1000, 300), session(50, 300)]);
        assert_eq!(summary.median_word_count, 50);
    }

    #[test]
    fn test_summarize_median_even_count() {
        let summary = summarize(&[
            session(10, 300),
            session(20, 300),
            session(40, 300),
            session(80, 300),
        ]);
        assert_eq!(summary.median_word_count, 30);
        assert_eq!(summary.avg_word_count, 37);
    }
}
