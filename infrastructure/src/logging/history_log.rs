//! JSONL launch history.
//!
//! Each [`HistoryEntry`] becomes one JSON object per line with a local
//! `timestamp` field, appended to `history.log`.

use launcher_application::ports::history::{HistoryEntry, HistoryLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only history writer.
///
/// The file (and its directory) is only created by the first [`log`] call,
/// so runs that never hand off to an agent leave no trace on disk.
///
/// [`log`]: HistoryLogger::log
pub struct JsonlHistoryLog {
    writer: Mutex<Option<BufWriter<File>>>,
    path: PathBuf,
}

impl JsonlHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            writer: Mutex::new(None),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Option<BufWriter<File>> {
        if let Some(parent) = self.path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                warn!("Could not open history file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl HistoryLogger for JsonlHistoryLog {
    fn log(&self, entry: HistoryEntry) {
        let timestamp = chrono::Local::now().to_rfc3339();

        let record = match serde_json::to_value(&entry) {
            Ok(serde_json::Value::Object(mut map)) => {
                map.insert(
                    "timestamp".to_string(),
                    serde_json::Value::String(timestamp),
                );
                serde_json::Value::Object(map)
            }
            Ok(other) => other,
            Err(e) => {
                warn!("Could not serialize history entry: {}", e);
                return;
            }
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        let Ok(mut guard) = self.writer.lock() else {
            return;
        };
        if guard.is_none() {
            *guard = self.open();
        }
        if let Some(writer) = guard.as_mut()
            // The process is usually replaced right after logging.
            && let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush())
        {
            warn!("Could not write history to {}: {}", self.path.display(), e);
        }
    }
}
