use chrono::{DateTime, Utc};
use lightsout_data::{PlayerProfile, RoundResult, TournamentRecord};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::TournamentRules;
use crate::error::GameError;

/// Running totals, updated once per recorded round and never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TournamentStats {
    pub best_single: Option<u32>,
    pub false_starts: u32,
    pub total_attempts: u32,
}

impl TournamentStats {
    pub fn record(&mut self, result: &RoundResult) {
        self.total_attempts += 1;
        match result.reaction() {
            None => self.false_starts += 1,
            Some(ms) => {
                self.best_single = Some(self.best_single.map_or(ms, |best| best.min(ms)));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentSummary {
    pub rounds: Vec<RoundResult>,
    pub best_single: Option<u32>,
    pub false_starts: u32,
    pub total_attempts: u32,
    /// Rounded mean of the valid rounds, whether or not the tournament counts.
    pub tournament_average: Option<u32>,
    pub invalid: bool,
    /// What the leaderboard sees: absent for an invalid tournament.
    pub best_tournament_average: Option<u32>,
}

impl TournamentSummary {
    pub fn valid_rounds(&self) -> impl Iterator<Item = u32> + '_ {
        self.rounds.iter().filter_map(RoundResult::reaction)
    }

    pub fn to_record(&self, profile: &PlayerProfile, created_at: DateTime<Utc>) -> TournamentRecord {
        TournamentRecord {
            phone: profile.phone.clone(),
            name: profile.name.clone(),
            number: profile.number,
            difficulty: profile.difficulty,
            best_single_reaction: self.best_single,
            best_tournament_average: self.best_tournament_average,
            false_starts: self.false_starts,
            total_attempts: self.total_attempts,
            created_at,
        }
    }
}

/// Aggregates a fixed number of rounds.
#[derive(Debug, Clone)]
pub struct Tournament {
    rules: TournamentRules,
    log: Vec<RoundResult>,
    stats: TournamentStats,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(TournamentRules::default())
    }
}

impl Tournament {
    pub fn new(rules: TournamentRules) -> Self {
        Self {
            rules,
            log: Vec::with_capacity(rules.total_rounds),
            stats: TournamentStats::default(),
        }
    }

    pub fn rules(&self) -> &TournamentRules {
        &self.rules
    }

    pub fn stats(&self) -> &TournamentStats {
        &self.stats
    }

    pub fn rounds(&self) -> &[RoundResult] {
        &self.log
    }

    /// 1-based number of the round being played, or the last round once complete.
    pub fn current_round(&self) -> usize {
        (self.log.len() + 1).min(self.rules.total_rounds)
    }

    pub fn is_complete(&self) -> bool {
        self.log.len() >= self.rules.total_rounds
    }

    pub fn record_round(&mut self, result: RoundResult) -> Result<(), GameError> {
        if self.is_complete() {
            return Err(GameError::new(
                "E2002",
                format!(
                    "all {} rounds already recorded",
                    self.rules.total_rounds
                ),
            ));
        }
        self.log.push(result);
        self.stats.record(&result);
        info!(
            round = self.log.len(),
            of = self.rules.total_rounds,
            best_single = ?self.stats.best_single,
            false_starts = self.stats.false_starts,
            "round recorded"
        );
        Ok(())
    }

    /// Summarize a complete tournament. Pure: repeated calls agree.
    pub fn finalize(&self) -> Result<TournamentSummary, GameError> {
        if !self.is_complete() {
            return Err(GameError::new(
                "E2001",
                format!(
                    "finalize called after {} of {} rounds",
                    self.log.len(),
                    self.rules.total_rounds
                ),
            ));
        }

        let valid: Vec<u32> = self.log.iter().filter_map(RoundResult::reaction).collect();
        let tournament_average = rounded_mean(&valid);
        let invalid = self.stats.false_starts > self.rules.false_start_limit;
        if invalid {
            warn!(
                false_starts = self.stats.false_starts,
                limit = self.rules.false_start_limit,
                "tournament invalid"
            );
        }

        Ok(TournamentSummary {
            rounds: self.log.clone(),
            best_single: self.stats.best_single,
            false_starts: self.stats.false_starts,
            total_attempts: self.stats.total_attempts,
            tournament_average,
            invalid,
            best_tournament_average: if invalid { None } else { tournament_average },
        })
    }
}

// Half-up rounding in integers.
fn rounded_mean(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as u64;
    let sum: u64 = values.iter().map(|v| u64::from(*v)).sum();
    Some(((sum * 2 + n) / (2 * n)) as u32)
}
