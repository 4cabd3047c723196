use lightsout_data::TournamentRecord;
use parking_lot::Mutex;

use super::ScoreStore;
use crate::error::GameError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TournamentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<TournamentRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl ScoreStore for MemoryStore {
    fn load_records(&self) -> Result<Vec<TournamentRecord>, GameError> {
        Ok(self.records.lock().clone())
    }

    fn append_record(&self, record: TournamentRecord) -> Result<(), GameError> {
        self.records.lock().push(record);
        Ok(())
    }
}
