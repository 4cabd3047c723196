use std::{
    fs, io,
    path::{Path, PathBuf},
};

use lightsout_data::TournamentRecord;
use parking_lot::Mutex;
use tracing::debug;

use super::ScoreStore;
use crate::error::GameError;

/// All records as one JSON array on disk. A missing file reads as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write appends within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<TournamentRecord>, GameError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(
                    GameError::new("E3001", format!("failed to read scores: {e}"))
                        .with_path(self.path.display().to_string()),
                )
            }
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            GameError::new("E3002", format!("invalid scores json: {e}"))
                .with_path(self.path.display().to_string())
        })
    }

    fn write(&self, records: &[TournamentRecord]) -> Result<(), GameError> {
        let write_err = |e: String| {
            GameError::new("E3003", format!("failed to write scores: {e}"))
                .with_path(self.path.display().to_string())
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(records).map_err(|e| write_err(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| write_err(e.to_string()))
    }
}

impl ScoreStore for JsonFileStore {
    fn load_records(&self) -> Result<Vec<TournamentRecord>, GameError> {
        let _guard = self.lock.lock();
        self.read()
    }

    fn append_record(&self, record: TournamentRecord) -> Result<(), GameError> {
        let _guard = self.lock.lock();
        let mut records = self.read()?;
        records.push(record);
        self.write(&records)?;
        debug!(path = %self.path.display(), total = records.len(), "score appended");
        Ok(())
    }
}
