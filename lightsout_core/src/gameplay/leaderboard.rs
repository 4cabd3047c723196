use std::cmp::Ordering;

use lightsout_data::{Difficulty, PlayerProfile, TournamentRecord};

use crate::error::GameError;
use crate::store::ScoreStore;

/// Ascending means better. Keys: tournament average, best single, false starts.
pub fn compare_records(a: &TournamentRecord, b: &TournamentRecord) -> Ordering {
    present_first(a.best_tournament_average, b.best_tournament_average)
        .then_with(|| present_first(a.best_single_reaction, b.best_single_reaction))
        .then_with(|| a.false_starts.cmp(&b.false_starts))
}

// A missing value ranks below any present one.
fn present_first(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable: full ties keep their encounter order.
pub fn rank(records: &mut [TournamentRecord]) {
    records.sort_by(compare_records);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Standing<'a> {
    /// 1-based.
    pub rank: usize,
    pub record: &'a TournamentRecord,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    records: Vec<TournamentRecord>,
}

impl Leaderboard {
    pub fn new(mut records: Vec<TournamentRecord>) -> Self {
        rank(&mut records);
        Self { records }
    }

    pub fn load<S: ScoreStore + ?Sized>(store: &S) -> Result<Self, GameError> {
        Ok(Self::new(store.load_records()?))
    }

    pub fn for_difficulty(&self, difficulty: Difficulty) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.difficulty == difficulty)
                .cloned()
                .collect(),
        }
    }

    pub fn records(&self) -> &[TournamentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Best rank held by this driver, if any.
    pub fn position_of(&self, profile: &PlayerProfile) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.belongs_to(profile))
            .map(|i| i + 1)
    }

    pub fn standings(&self, current: Option<&PlayerProfile>) -> Vec<Standing<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| Standing {
                rank: i + 1,
                record,
                highlighted: current.is_some_and(|p| record.belongs_to(p)),
            })
            .collect()
    }
}
