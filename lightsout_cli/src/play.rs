use std::{
    io::{self, BufRead},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Context};
use chrono::Utc;
use lightsout_core::input::events::InputEvent;
use lightsout_core::input::InputQueue;
use lightsout_core::time::SessionClock;
use lightsout_core::{
    JsonFileStore, Leaderboard, RoundPhase, RoundSignal, TournamentRules, TournamentSession,
};
use lightsout_data::PlayerProfile;
use tracing::debug;

use crate::report;

// Wake-up interval while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Every line on stdin becomes one timestamped press.
fn spawn_stdin_reader(clock: SessionClock, queue: &InputQueue, closed: Arc<AtomicBool>) {
    let sender = queue.sender();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() {
                break;
            }
            if sender.send(InputEvent::respond(clock.now_ms())).is_err() {
                break;
            }
        }
        closed.store(true, Ordering::Release);
    });
}

fn prompt(session: &TournamentSession) {
    println!();
    println!(
        "ROUND {} OF {} - press Enter to arm, then Enter when the lights go out",
        session.current_round(),
        session.tournament().rules().total_rounds
    );
}

fn render(session: &mut TournamentSession, floor_ms: u32) {
    let signals = session.drain_signals();
    for signal in &signals {
        match signal {
            RoundSignal::Lights(bank) => println!("  {bank}"),
            RoundSignal::Phase(RoundPhase::Holding) => println!("  WAIT FOR IT..."),
            RoundSignal::Phase(RoundPhase::Go) => println!("  GO GO GO!"),
            RoundSignal::Shake(true) => println!("  ~ ~ ~"),
            RoundSignal::Classified { result, .. } => {
                let line = report::round_line(
                    session.tournament().rounds().len(),
                    result,
                    report::verdict_of(&signals),
                    floor_ms,
                );
                println!("{line}");
                let stats = session.tournament().stats();
                println!(
                    "  Best: {} | False starts: {}",
                    stats
                        .best_single
                        .map_or_else(|| "N/A".to_string(), |b| format!("{b}ms")),
                    stats.false_starts
                );
            }
            _ => {}
        }
    }
}

/// Feed one press into the session. Enter arms, responds, or moves on to the next round.
fn press(session: &mut TournamentSession, event: InputEvent) -> anyhow::Result<()> {
    match session.phase() {
        RoundPhase::ArmWait => {
            session.arm(event.timestamp);
        }
        RoundPhase::Finished => {
            if session.next_round() {
                prompt(session);
            }
        }
        _ => {
            session.respond(event.timestamp)?;
        }
    }
    Ok(())
}

pub fn run_play(
    profile: PlayerProfile,
    store: &JsonFileStore,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let rules = TournamentRules::default();
    let mut session = match seed {
        Some(seed) => TournamentSession::with_seed(profile, rules, seed)?,
        None => TournamentSession::new(profile, rules)?,
    };

    let clock = SessionClock::start();
    let queue = InputQueue::new();
    let closed = Arc::new(AtomicBool::new(false));
    spawn_stdin_reader(clock, &queue, closed.clone());

    println!(
        "F1 REACTION CHAMPIONSHIP - {} #{} ({})",
        session.profile().name,
        session.profile().number,
        session.profile().difficulty
    );
    prompt(&session);

    while !(session.is_complete() && session.phase() == RoundPhase::Finished) {
        session.advance(clock.now_ms());
        render(&mut session, rules.anti_cheat_floor_ms);

        let timeout = match session.next_deadline() {
            Some(at) => clock.instant_of(at).saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };

        match queue.wait(timeout) {
            Some(event) => press(&mut session, event)?,
            None if closed.load(Ordering::Acquire) => match queue.pop() {
                Some(event) => press(&mut session, event)?,
                None => bail!(
                    "input closed during round {} of {}; tournament not saved",
                    session.current_round(),
                    rules.total_rounds
                ),
            },
            None => {}
        }
        render(&mut session, rules.anti_cheat_floor_ms);
    }
    debug!("all rounds played");

    println!();
    let (summary, record) = session
        .finish(store, Utc::now())
        .with_context(|| format!("failed to save to {}", store.path().display()))?;
    report::print_summary(&summary, rules.false_start_limit);

    let board = Leaderboard::load(store)
        .context("failed to load leaderboard")?
        .for_difficulty(record.difficulty);
    println!();
    report::print_leaderboard(&board, Some(session.profile()));
    Ok(())
}
