//! Score persistence collaborator.
//!
//! The core only needs to load everything and append one record; the medium
//! is up to the implementation.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use lightsout_data::TournamentRecord;

use crate::error::GameError;

pub trait ScoreStore {
    fn load_records(&self) -> Result<Vec<TournamentRecord>, GameError>;

    /// Must be visible to the next `load_records`.
    fn append_record(&self, record: TournamentRecord) -> Result<(), GameError>;
}
