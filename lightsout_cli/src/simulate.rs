use std::str::FromStr;

use anyhow::{bail, Context};
use chrono::Utc;
use lightsout_core::{
    JsonFileStore, Millis, RoundPhase, ScoreStore, TournamentRules, TournamentSession,
};
use lightsout_data::PlayerProfile;

use crate::report;

// Gap between one response and arming the next round.
const BETWEEN_ROUNDS_MS: Millis = 1000.0;
// How far into the hold an early response lands.
const EARLY_OFFSET_MS: Millis = 100.0;

/// One scripted response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scripted {
    /// Respond during the hold.
    Early,
    /// Respond this many ms after the lights go out.
    After(Millis),
}

impl FromStr for Scripted {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "early" | "jump" => Ok(Scripted::Early),
            other => match other.parse::<Millis>() {
                Ok(ms) if ms >= 0.0 && ms.is_finite() => Ok(Scripted::After(ms)),
                _ => Err(format!("expected a reaction in ms or 'early', got '{other}'")),
            },
        }
    }
}

/// Advance on the engine's own deadlines until `phase` is reached.
fn run_until(session: &mut TournamentSession, mut now: Millis, phase: RoundPhase) -> anyhow::Result<Millis> {
    while session.phase() != phase {
        now = session
            .next_deadline()
            .with_context(|| format!("round stalled before {phase:?}"))?;
        session.advance(now);
    }
    Ok(now)
}

pub fn run_simulation(
    profile: PlayerProfile,
    script: &[Scripted],
    seed: u64,
    store: Option<&JsonFileStore>,
) -> anyhow::Result<()> {
    if script.is_empty() {
        bail!("at least one scripted reaction is required");
    }
    let rules = TournamentRules {
        total_rounds: script.len(),
        ..TournamentRules::default()
    };
    let mut session = TournamentSession::with_seed(profile, rules, seed)?;

    println!(
        "Driver: {} #{} ({})",
        session.profile().name,
        session.profile().number,
        session.profile().difficulty
    );

    let mut now: Millis = 0.0;
    for (i, step) in script.iter().enumerate() {
        session.arm(now);
        let respond_at = match step {
            Scripted::Early => run_until(&mut session, now, RoundPhase::Holding)? + EARLY_OFFSET_MS,
            Scripted::After(ms) => {
                run_until(&mut session, now, RoundPhase::Go)?;
                let go_at = session
                    .engine()
                    .go_timestamp()
                    .context("go timestamp missing")?;
                go_at + ms
            }
        };

        let result = session
            .respond(respond_at)?
            .context("response was ignored")?;
        let signals = session.drain_signals();
        println!(
            "{}",
            report::round_line(i + 1, &result, report::verdict_of(&signals), rules.anti_cheat_floor_ms)
        );

        now = respond_at + BETWEEN_ROUNDS_MS;
        session.next_round();
    }

    let summary = match store {
        Some(store) => {
            let (summary, _) = session
                .finish(store, Utc::now())
                .with_context(|| format!("failed to save to {}", store.path().display()))?;
            summary
        }
        None => session.summary()?,
    };
    report::print_summary(&summary, rules.false_start_limit);

    if let Some(store) = store {
        println!("Saved ({} records)", store.load_records()?.len());
    }
    Ok(())
}
