use lightsout_core::{GameErrorKind, RoundResult, Tournament, TournamentRules};

fn play(results: &[RoundResult]) -> Tournament {
    let mut tournament = Tournament::default();
    for result in results {
        tournament.record_round(*result).expect("round should record");
    }
    tournament
}

fn valid(ms: u32) -> RoundResult {
    RoundResult::valid(ms)
}

fn jump() -> RoundResult {
    RoundResult::false_start()
}

#[test]
fn test_full_clean_tournament() {
    let tournament = play(&[valid(220), valid(195), valid(260), valid(180), valid(240)]);
    assert!(tournament.is_complete());

    let summary = tournament.finalize().unwrap();
    assert_eq!(summary.best_single, Some(180));
    assert_eq!(summary.false_starts, 0);
    assert_eq!(summary.total_attempts, 5);
    assert_eq!(summary.tournament_average, Some(219));
    assert!(!summary.invalid);
    assert_eq!(summary.best_tournament_average, Some(219));
}

#[test]
fn test_best_single_tracks_minimum_of_valid_rounds() {
    let mut tournament = Tournament::default();
    assert_eq!(tournament.stats().best_single, None);

    tournament.record_round(jump()).unwrap();
    assert_eq!(tournament.stats().best_single, None);

    let mut seen = Vec::new();
    for ms in [240, 310, 205, 260] {
        tournament.record_round(valid(ms)).unwrap();
        seen.push(ms);
        assert_eq!(tournament.stats().best_single, seen.iter().copied().min());
    }
}

#[test]
fn test_three_false_starts_invalidate_the_average() {
    let tournament = play(&[jump(), valid(200), jump(), valid(210), jump()]);
    let summary = tournament.finalize().unwrap();

    assert_eq!(summary.false_starts, 3);
    assert_eq!(summary.tournament_average, Some(205));
    assert!(summary.invalid);
    assert_eq!(summary.best_tournament_average, None);
    assert_eq!(summary.best_single, Some(200));
}

#[test]
fn test_two_false_starts_still_count() {
    let tournament = play(&[jump(), valid(201), jump(), valid(202), valid(204)]);
    let summary = tournament.finalize().unwrap();

    assert!(!summary.invalid);
    // 607 / 3 = 202.33
    assert_eq!(summary.best_tournament_average, Some(202));
}

#[test]
fn test_average_rounds_half_up() {
    let tournament = play(&[valid(200), valid(201), jump(), jump(), valid(200)]);
    // 601 / 3 = 200.33
    assert_eq!(tournament.finalize().unwrap().tournament_average, Some(200));

    let tournament = play(&[valid(200), valid(201), jump(), jump(), jump()]);
    // 200.5 rounds up
    assert_eq!(tournament.finalize().unwrap().tournament_average, Some(201));
}

#[test]
fn test_all_false_starts_have_no_average() {
    let tournament = play(&[jump(); 5]);
    let summary = tournament.finalize().unwrap();
    assert_eq!(summary.tournament_average, None);
    assert_eq!(summary.best_single, None);
    assert!(summary.invalid);
}

#[test]
fn test_finalize_is_idempotent() {
    let tournament = play(&[valid(220), jump(), valid(260), valid(180), valid(240)]);
    let first = tournament.finalize().unwrap();
    let second = tournament.finalize().unwrap();
    assert_eq!(first, second);
    assert_eq!(tournament.rounds().len(), 5);
    assert_eq!(first.rounds, tournament.rounds());
}

#[test]
fn test_finalize_before_complete_fails() {
    let tournament = play(&[valid(220), valid(230)]);
    assert!(!tournament.is_complete());

    let err = tournament.finalize().unwrap_err();
    assert_eq!(err.code, "E2001");
    assert_eq!(err.kind, GameErrorKind::State);
}

#[test]
fn test_recording_past_the_last_round_fails() {
    let mut tournament = play(&[valid(220); 5]);
    let err = tournament.record_round(valid(100)).unwrap_err();
    assert_eq!(err.code, "E2002");
    assert_eq!(tournament.stats().total_attempts, 5);
    assert_eq!(tournament.stats().best_single, Some(220));
}

#[test]
fn test_current_round_counts_from_one() {
    let mut tournament = Tournament::new(TournamentRules {
        total_rounds: 3,
        ..TournamentRules::default()
    });
    assert_eq!(tournament.current_round(), 1);
    tournament.record_round(valid(200)).unwrap();
    assert_eq!(tournament.current_round(), 2);
    tournament.record_round(valid(200)).unwrap();
    tournament.record_round(valid(200)).unwrap();
    assert_eq!(tournament.current_round(), 3);
    assert!(tournament.is_complete());
}
