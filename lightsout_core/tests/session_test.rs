use chrono::Utc;
use lightsout_core::input::events::InputEvent;
use lightsout_core::{
    GameErrorKind, MemoryStore, RoundPhase, RoundResult, ScoreStore, TournamentRules,
    TournamentSession,
};
use lightsout_data::{Difficulty, PlayerProfile};

fn driver() -> PlayerProfile {
    PlayerProfile::new("0400111222", "Kimi", 7, Difficulty::Normal)
}

/// Arm at `now`, wait for go, respond `reaction` ms later (or during the hold when `None`).
fn play_round(session: &mut TournamentSession, now: f64, reaction: Option<f64>) -> (RoundResult, f64) {
    assert!(session.arm(now));
    let respond_at = loop {
        let deadline = session.next_deadline().expect("round stalled");
        if session.phase() == RoundPhase::Holding && reaction.is_none() {
            break deadline - 1.0;
        }
        session.advance(deadline);
        if let Some(go_at) = session.engine().go_timestamp() {
            break go_at + reaction.unwrap_or(0.0);
        }
    };
    let result = session
        .respond(respond_at)
        .expect("recording should succeed")
        .expect("round should finish");
    (result, respond_at + 1000.0)
}

#[test]
fn test_clean_tournament_is_saved() {
    let mut session = TournamentSession::with_seed(driver(), TournamentRules::default(), 5).unwrap();
    let store = MemoryStore::new();

    let mut now = 0.0;
    for ms in [220.0, 195.0, 260.0, 180.0, 240.0] {
        let (result, next) = play_round(&mut session, now, Some(ms));
        assert_eq!(result, RoundResult::valid(ms as u32));
        now = next;
        session.next_round();
    }

    assert!(session.is_complete());
    assert!(!session.next_round());
    assert!(!session.arm(now));

    let (summary, record) = session.finish(&store, Utc::now()).unwrap();
    assert_eq!(summary.best_tournament_average, Some(219));
    assert_eq!(record.best_single_reaction, Some(180));
    assert_eq!(record.name, "Kimi");
    assert_eq!(record.difficulty, Difficulty::Normal);
    assert_eq!(store.load_records().unwrap(), vec![record]);
}

#[test]
fn test_finished_tournament_is_saved_once() {
    let mut session = TournamentSession::with_seed(driver(), TournamentRules::default(), 6).unwrap();
    let store = MemoryStore::new();

    let mut now = 0.0;
    for ms in [210.0, 205.0, 199.0, 230.0, 190.0] {
        let (_, next) = play_round(&mut session, now, Some(ms));
        now = next;
        session.next_round();
    }
    assert!(!session.is_saved());

    session.finish(&store, Utc::now()).unwrap();
    assert!(session.is_saved());

    let err = session.finish(&store, Utc::now()).unwrap_err();
    assert_eq!(err.code, "E2003");
    assert_eq!(err.kind, GameErrorKind::State);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_false_start_then_valid_round() {
    let mut session = TournamentSession::with_seed(driver(), TournamentRules::default(), 8).unwrap();

    let (first, now) = play_round(&mut session, 0.0, None);
    assert_eq!(first, RoundResult::false_start());
    assert!(session.next_round());
    assert_eq!(session.current_round(), 2);

    let (second, _) = play_round(&mut session, now, Some(150.0));
    assert_eq!(second, RoundResult::valid(150));
    assert_eq!(session.tournament().stats().false_starts, 1);
    assert_eq!(session.tournament().stats().best_single, Some(150));
}

#[test]
fn test_partial_tournament_is_not_saved() {
    let mut session = TournamentSession::with_seed(driver(), TournamentRules::default(), 1).unwrap();
    let store = MemoryStore::new();
    play_round(&mut session, 0.0, Some(200.0));

    let err = session.finish(&store, Utc::now()).unwrap_err();
    assert_eq!(err.code, "E2001");
    assert!(store.is_empty());
}

#[test]
fn test_next_round_waits_for_the_current_one() {
    let mut session = TournamentSession::with_seed(driver(), TournamentRules::default(), 2).unwrap();
    assert!(!session.next_round());
    session.arm(0.0);
    assert!(!session.next_round());
    assert_eq!(session.phase(), RoundPhase::Sequencing);
}

#[test]
fn test_double_response_records_once() {
    let mut session = TournamentSession::with_seed(driver(), TournamentRules::default(), 3).unwrap();
    session.handle(InputEvent::arm(0.0)).unwrap();
    let first = session.handle(InputEvent::respond(100.0)).unwrap();
    let second = session.handle(InputEvent::respond(101.0)).unwrap();

    assert_eq!(first, Some(RoundResult::false_start()));
    assert_eq!(second, None);
    assert_eq!(session.tournament().rounds().len(), 1);
}

#[test]
fn test_invalid_profiles_are_rejected() {
    let rules = TournamentRules::default();

    let blank = PlayerProfile::new("0400", "   ", 7, Difficulty::Chaos);
    let err = TournamentSession::new(blank, rules).err().unwrap();
    assert_eq!(err.code, "E1001");
    assert_eq!(err.field, Some("name"));

    let zero = PlayerProfile::new("0400", "Max", 0, Difficulty::Chaos);
    let err = TournamentSession::new(zero, rules).err().unwrap();
    assert_eq!(err.code, "E1002");
    assert_eq!(err.kind, GameErrorKind::Profile);

    let hundred = PlayerProfile::new("0400", "Max", 100, Difficulty::Chaos);
    assert!(TournamentSession::new(hundred, rules).is_err());

    let no_phone = PlayerProfile::new("", "Max", 33, Difficulty::Chaos);
    let err = TournamentSession::new(no_phone, rules).err().unwrap();
    assert_eq!(err.code, "E1003");

    let ok = PlayerProfile::new("0400", "Max", 99, Difficulty::Chaos);
    assert!(TournamentSession::new(ok, rules).is_ok());
}

#[test]
fn test_session_applies_rules_floor() {
    let rules = TournamentRules {
        anti_cheat_floor_ms: 150,
        ..TournamentRules::default()
    };
    let mut session = TournamentSession::with_seed(driver(), rules, 4).unwrap();
    let (result, _) = play_round(&mut session, 0.0, Some(120.0));
    assert_eq!(result, RoundResult::false_start());
}
