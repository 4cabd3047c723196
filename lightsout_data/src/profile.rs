use serde::{Deserialize, Serialize};
use crate::model::Difficulty;

/// Who is driving. Supplied once before a tournament and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub phone: String,
    pub name: String,
    /// Car number, 1-99.
    pub number: u8,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl PlayerProfile {
    pub fn new(
        phone: impl Into<String>,
        name: impl Into<String>,
        number: u8,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
            number,
            difficulty,
        }
    }

    /// Same driver for leaderboard highlighting: phone and car number match.
    pub fn same_driver(&self, phone: &str, number: u8) -> bool {
        self.phone == phone && self.number == number
    }
}
