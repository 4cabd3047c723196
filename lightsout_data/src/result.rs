use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::model::Difficulty;
use crate::profile::PlayerProfile;

/// Outcome of one round. `reaction_time` is 0 and meaningless on a false start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub false_start: bool,
    pub reaction_time: u32,
}

impl RoundResult {
    pub fn valid(reaction_time: u32) -> Self {
        Self {
            false_start: false,
            reaction_time,
        }
    }

    pub fn false_start() -> Self {
        Self {
            false_start: true,
            reaction_time: 0,
        }
    }

    pub fn reaction(&self) -> Option<u32> {
        if self.false_start {
            None
        } else {
            Some(self.reaction_time)
        }
    }
}

/// One completed tournament as kept by the score store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRecord {
    /// Absent on records written before drivers were keyed by phone.
    #[serde(default)]
    pub phone: String,
    pub name: String,
    pub number: u8,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub best_single_reaction: Option<u32>,
    #[serde(default)]
    pub best_tournament_average: Option<u32>,
    #[serde(default)]
    pub false_starts: u32,
    #[serde(default = "default_total_attempts")]
    pub total_attempts: u32,
    pub created_at: DateTime<Utc>,
}

fn default_total_attempts() -> u32 {
    1
}

impl TournamentRecord {
    pub fn driver(&self) -> (&str, u8) {
        (&self.phone, self.number)
    }

    pub fn belongs_to(&self, profile: &PlayerProfile) -> bool {
        profile.same_driver(&self.phone, self.number)
    }
}
