pub mod config;
pub mod error;
pub mod gameplay;
pub mod input;
pub mod profile;
pub mod store;
pub mod time;

pub use config::{DifficultyConfig, TournamentRules};
pub use error::{GameError, GameErrorKind};
pub use gameplay::leaderboard::{compare_records, rank, Leaderboard, Standing};
pub use gameplay::lights::LightBank;
pub use gameplay::round::{RoundEngine, RoundPhase, RoundSignal, Verdict};
pub use gameplay::session::TournamentSession;
pub use gameplay::tournament::{Tournament, TournamentStats, TournamentSummary};
pub use profile::validate_profile;
pub use store::{JsonFileStore, MemoryStore, ScoreStore};

pub use lightsout_data::{Difficulty, Millis, PlayerProfile, RoundResult, TournamentRecord};
