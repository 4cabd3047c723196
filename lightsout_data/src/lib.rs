pub mod model;
pub mod profile;
pub mod result;

pub use model::{Difficulty, Millis, LIGHT_COUNT};
pub use profile::PlayerProfile;
pub use result::{RoundResult, TournamentRecord};
