use lightsout_core::{Leaderboard, RoundResult, RoundSignal, TournamentSummary, Verdict};
use lightsout_data::PlayerProfile;

pub fn verdict_of(signals: &[RoundSignal]) -> Option<Verdict> {
    signals.iter().find_map(|s| match s {
        RoundSignal::Classified { verdict, .. } => Some(*verdict),
        _ => None,
    })
}

pub fn round_line(round: usize, result: &RoundResult, verdict: Option<Verdict>, floor_ms: u32) -> String {
    match (result.reaction(), verdict) {
        (Some(ms), _) => format!("Round {round}: {ms}ms"),
        (None, Some(Verdict::Implausible)) => {
            format!("Round {round}: FALSE START (faster than {floor_ms}ms)")
        }
        (None, _) => format!("Round {round}: FALSE START (jumped the lights)"),
    }
}

fn ms(value: Option<u32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v}ms"))
}

pub fn print_summary(summary: &TournamentSummary, limit: u32) {
    println!("TOURNAMENT COMPLETE");
    println!("Best single: {}", ms(summary.best_single));
    if summary.invalid {
        println!("Tournament average: INVALID");
        println!("Tournament invalid (more than {limit} false starts)");
    } else {
        println!("Tournament average: {}", ms(summary.tournament_average));
    }
    println!(
        "False starts: {} / {}",
        summary.false_starts, summary.total_attempts
    );
}

pub fn print_leaderboard(board: &Leaderboard, current: Option<&PlayerProfile>) {
    if board.is_empty() {
        println!("No entries yet");
        return;
    }
    println!(
        "  {:>4}  {:<16} {:>3}  {:<8} {:>6}  {:>8}  {:>2}",
        "RANK", "DRIVER", "#", "TIER", "BEST", "AVG", "FS"
    );
    for standing in board.standings(current) {
        let r = standing.record;
        let marker = if standing.highlighted { '>' } else { ' ' };
        println!(
            "{} {:>4}  {:<16} {:>3}  {:<8} {:>6}  {:>8}  {:>2}",
            marker,
            standing.rank,
            r.name,
            r.number,
            r.difficulty.as_str(),
            ms(r.best_single_reaction),
            ms(r.best_tournament_average),
            r.false_starts
        );
    }
}
