use chrono::{DateTime, Local};
use log::warn;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_HISTORY_DIR: &str = "history";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not write history file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only, one line per event. Writing is best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    path: Option<PathBuf>,
}

impl History {
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// History file for a match that started at `started`, inside `dir`.
    /// Nothing touches the disk until the first event is appended.
    pub fn new(dir: &Path, started: DateTime<Local>) -> Self {
        Self {
            path: Some(dir.join(file_name(started))),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn append(&self, event: &str) -> Result<(), HistoryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let write_error = |source| HistoryError::Write {
            path: path.clone(),
            source,
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_error)?;
        }
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(write_error)?;
        writeln!(file, "{}", event).map_err(write_error)
    }

    /// Like [`History::append`], but a failure only ends up in the diagnostic log.
    pub fn log_event(&self, event: &str) {
        if let Err(e) = self.append(event) {
            warn!("{}", e);
        }
    }
}

/// `game_<DD>_<MM>_<HH>_<MM>_<SS>.txt`
pub fn file_name(started: DateTime<Local>) -> String {
    started.format("game_%d_%m_%H_%M_%S.txt").to_string()
}
