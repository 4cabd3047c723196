use chrono::{DateTime, Utc};
use lightsout_data::{Millis, PlayerProfile, RoundResult, TournamentRecord};
use tracing::info;

use crate::config::{DifficultyConfig, TournamentRules};
use crate::error::GameError;
use crate::gameplay::round::{RoundEngine, RoundPhase, RoundSignal};
use crate::gameplay::tournament::{Tournament, TournamentSummary};
use crate::input::events::{InputEvent, Signal};
use crate::profile::validate_profile;
use crate::store::ScoreStore;

/// One driver playing one tournament, a round at a time.
pub struct TournamentSession {
    profile: PlayerProfile,
    engine: RoundEngine,
    tournament: Tournament,
    saved: bool,
}

impl TournamentSession {
    pub fn new(profile: PlayerProfile, rules: TournamentRules) -> Result<Self, GameError> {
        let config = DifficultyConfig::for_difficulty(profile.difficulty);
        Self::with_engine(profile, rules, RoundEngine::new(config))
    }

    pub fn with_seed(
        profile: PlayerProfile,
        rules: TournamentRules,
        seed: u64,
    ) -> Result<Self, GameError> {
        let config = DifficultyConfig::for_difficulty(profile.difficulty);
        Self::with_engine(profile, rules, RoundEngine::with_seed(config, seed))
    }

    pub fn with_engine(
        profile: PlayerProfile,
        rules: TournamentRules,
        engine: RoundEngine,
    ) -> Result<Self, GameError> {
        validate_profile(&profile)?;
        info!(
            driver = %profile.name,
            number = profile.number,
            difficulty = %profile.difficulty,
            rounds = rules.total_rounds,
            "tournament started"
        );
        Ok(Self {
            profile,
            engine: engine.with_floor(rules.anti_cheat_floor_ms),
            tournament: Tournament::new(rules),
            saved: false,
        })
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn tournament(&self) -> &Tournament {
        &self.tournament
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    pub fn phase(&self) -> RoundPhase {
        self.engine.phase()
    }

    pub fn current_round(&self) -> usize {
        self.tournament.current_round()
    }

    pub fn is_complete(&self) -> bool {
        self.tournament.is_complete()
    }

    pub fn next_deadline(&mut self) -> Option<Millis> {
        self.engine.next_deadline()
    }

    pub fn drain_signals(&mut self) -> Vec<RoundSignal> {
        self.engine.drain_signals()
    }

    pub fn arm(&mut self, now: Millis) -> bool {
        !self.tournament.is_complete() && self.engine.arm(now)
    }

    pub fn advance(&mut self, now: Millis) {
        self.engine.advance(now);
    }

    /// Classify a response and record it. `None` when the response was ignored.
    pub fn respond(&mut self, now: Millis) -> Result<Option<RoundResult>, GameError> {
        let Some(result) = self.engine.respond(now) else {
            return Ok(None);
        };
        self.tournament.record_round(result)?;
        Ok(Some(result))
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<Option<RoundResult>, GameError> {
        match event.signal {
            Signal::Arm => {
                self.arm(event.timestamp);
                Ok(None)
            }
            Signal::Respond => self.respond(event.timestamp),
        }
    }

    /// Reset the engine for the next round. False while a round is in play or once complete.
    pub fn next_round(&mut self) -> bool {
        if self.engine.phase() != RoundPhase::Finished || self.tournament.is_complete() {
            return false;
        }
        self.engine.reset();
        true
    }

    pub fn summary(&self) -> Result<TournamentSummary, GameError> {
        self.tournament.finalize()
    }

    /// True once `finish` has written the record.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Finalize and persist. Partial tournaments never reach the store, and a
    /// tournament is written at most once.
    pub fn finish<S: ScoreStore + ?Sized>(
        &mut self,
        store: &S,
        created_at: DateTime<Utc>,
    ) -> Result<(TournamentSummary, TournamentRecord), GameError> {
        if self.saved {
            return Err(GameError::new("E2003", "tournament already saved"));
        }
        let summary = self.tournament.finalize()?;
        let record = summary.to_record(&self.profile, created_at);
        store.append_record(record.clone())?;
        self.saved = true;
        info!(
            driver = %self.profile.name,
            average = ?summary.best_tournament_average,
            best_single = ?summary.best_single,
            invalid = summary.invalid,
            "tournament saved"
        );
        Ok((summary, record))
    }
}
