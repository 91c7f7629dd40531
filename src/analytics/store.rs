//! File-backed session store.
//!
//! Records append to a tab-separated log file, one session per line:
//! `timestamp<TAB>word_count<TAB>wpm`. Lines that fail to parse are skipped
//! on read so a corrupt line never takes the dashboard down.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use super::{ReadSession, SessionSink, Summary};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, session: &ReadSession) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{}\t{}\t{}",
            session.timestamp, session.word_count, session.wpm
        )?;
        Ok(())
    }

    /// All sessions on record, oldest first. A missing file is an empty
    /// store, not an error.
    pub fn sessions(&self) -> Result<Vec<ReadSession>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(content.lines().filter_map(parse_line).collect())
    }

    /// Drops all recorded sessions.
    pub fn remove_all(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionSink for SessionStore {
    fn record(&mut self, word_count: usize, wpm: u32) {
        let session = ReadSession {
            timestamp: unix_timestamp(),
            word_count,
            wpm,
        };
        if let Err(e) = self.append(&session) {
            tracing::warn!(error = %e, "failed to record read session");
        }
    }

    fn summary(&self) -> Summary {
        match self.sessions() {
            Ok(sessions) => super::summarize(&sessions),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read session log");
                Summary::default()
            }
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.remove_all() {
            tracing::warn!(error = %e, "failed to clear session log");
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn parse_line(line: &str) -> Option<ReadSession> {
    let mut fields = line.split('\t');
    let timestamp = fields.next()?.parse().ok()?;
    let word_count = fields.next()?.parse().ok()?;
    let wpm = fields.next()?.parse().ok()?;
    Some(ReadSession {
        timestamp,
        word_count,
        wpm,
    })
}
