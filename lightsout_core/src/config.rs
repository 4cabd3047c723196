use lightsout_data::Difficulty;
use serde::{Deserialize, Serialize};

/// Timing parameters for one difficulty tier.
///
/// `flicker_count`, `flicker_duration_ms` and `shake` only drive cosmetic
/// events; they never move the go signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub light_delay_ms: u64,
    pub min_hold_ms: u64,
    pub max_hold_ms: u64,
    pub flicker_count: u32,
    pub flicker_duration_ms: u64,
    pub shake: bool,
}

impl DifficultyConfig {
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Normal => Self {
                light_delay_ms: 500,
                min_hold_ms: 2000,
                max_hold_ms: 4000,
                flicker_count: 1,
                flicker_duration_ms: 70,
                shake: false,
            },
            Difficulty::Hard => Self {
                light_delay_ms: 400,
                min_hold_ms: 1500,
                max_hold_ms: 3500,
                flicker_count: 2,
                flicker_duration_ms: 80,
                shake: false,
            },
            Difficulty::Chaos => Self {
                light_delay_ms: 350,
                min_hold_ms: 2000,
                max_hold_ms: 5000,
                flicker_count: 3,
                flicker_duration_ms: 100,
                shake: true,
            },
        }
    }

    /// Same timing with every cosmetic effect switched off.
    pub const fn without_cosmetics(mut self) -> Self {
        self.flicker_count = 0;
        self.shake = false;
        self
    }
}

impl From<Difficulty> for DifficultyConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::for_difficulty(difficulty)
    }
}

pub const DEFAULT_TOTAL_ROUNDS: usize = 5;
pub const DEFAULT_FALSE_START_LIMIT: u32 = 2;
pub const ANTI_CHEAT_FLOOR_MS: u32 = 80;

/// Shake duration in chaos mode.
pub const SHAKE_DURATION_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRules {
    pub total_rounds: usize,
    /// A tournament with more false starts than this is invalid.
    pub false_start_limit: u32,
    pub anti_cheat_floor_ms: u32,
}

impl Default for TournamentRules {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            false_start_limit: DEFAULT_FALSE_START_LIMIT,
            anti_cheat_floor_ms: ANTI_CHEAT_FLOOR_MS,
        }
    }
}
