//! History persistence: a JSON file holding every past draw.
//!
//! The file is read in full once at load time and rewritten in full after each
//! draw (append at the application level, overwrite at the storage level).

use crate::error::Result;
use crate::model::HistoryRecord;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// A store with no backing file. Appends stay in memory only.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the full history file.
    ///
    /// A missing file is an empty history. An unreadable or corrupt file is
    /// logged and also treated as empty: a draw must never be blocked by
    /// history problems.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<HistoryRecord>>(&text) {
                Ok(records) => records,
                Err(err) => {
                    tracing::warn!(path = %path.display(), "ignoring corrupt history file: {err}");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable history file: {err}");
                Vec::new()
            }
        };
        Self {
            path: Some(path),
            records,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and rewrites the backing file.
    ///
    /// On a write failure the record is kept in memory and the error is
    /// returned; callers log it and still present the draw result.
    pub fn append(&mut self, record: HistoryRecord) -> Result<()> {
        self.records.push(record);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
