//! Mock ranking
//!
//! Builds a placeholder leaderboard from the local player's persisted stats
//! plus a handful of randomized example players. There is no backend; in a
//! real deployment these rows would come from an API.

use crate::stats::GameStats;
use rand::Rng;

/// One leaderboard row
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    pub total_games: u32,
    pub games_won: u32,
    pub win_rate: u32,
    pub total_score: u32,
    pub best_streak: u32,
    pub average_guesses: f64,
    /// True for the local player's own row
    pub is_you: bool,
}

/// Leaderboard ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortBy {
    #[default]
    Score,
    WinRate,
    Streak,
}

/// Mock opponents: name plus (games, score, streak, avg-guess) ranges
const EXAMPLE_PLAYERS: [(&str, (u32, u32), (u32, u32), (u32, u32), (f64, f64)); 5] = [
    ("Carlos Rodriguez", (20, 70), (500, 2500), (5, 20), (3.0, 5.0)),
    ("Mar\u{ed}a Fern\u{e1}ndez", (15, 55), (400, 2200), (3, 15), (3.5, 5.5)),
    ("Diego Gonz\u{e1}lez", (10, 45), (300, 1800), (2, 12), (4.0, 6.0)),
    ("Ana L\u{f3}pez", (25, 85), (600, 2800), (6, 24), (3.0, 4.5)),
    ("Mart\u{ed}n P\u{e9}rez", (18, 63), (450, 2150), (4, 18), (3.2, 5.2)),
];

/// Build the mock leaderboard around the local player's stats
///
/// The local row always appears (named "Vos"); example players are
/// randomized within fixed ranges and win between 60% and 90% of their
/// games, as the original placeholder data did.
#[must_use]
pub fn build(local: &GameStats, sort_by: SortBy) -> Vec<PlayerEntry> {
    let mut rng = rand::rng();
    let mut players = vec![PlayerEntry {
        name: "Vos".to_string(),
        total_games: local.total_games,
        games_won: local.games_won,
        win_rate: local.win_rate(),
        total_score: local.total_score,
        best_streak: local.best_streak,
        average_guesses: local.average_guesses,
        is_you: true,
    }];

    for &(name, games, score, streak, avg) in &EXAMPLE_PLAYERS {
        let total_games = rng.random_range(games.0..=games.1);
        let games_won = (f64::from(total_games) * rng.random_range(0.6..0.9)).floor() as u32;
        let win_rate = (f64::from(games_won) / f64::from(total_games) * 100.0).round() as u32;
        players.push(PlayerEntry {
            name: name.to_string(),
            total_games,
            games_won,
            win_rate,
            total_score: rng.random_range(score.0..=score.1),
            best_streak: rng.random_range(streak.0..=streak.1),
            average_guesses: rng.random_range(avg.0..avg.1),
            is_you: false,
        });
    }

    sort(&mut players, sort_by);
    players
}

fn sort(players: &mut [PlayerEntry], sort_by: SortBy) {
    match sort_by {
        SortBy::Score => players.sort_by(|a, b| b.total_score.cmp(&a.total_score)),
        SortBy::WinRate => players.sort_by(|a, b| b.win_rate.cmp(&a.win_rate)),
        SortBy::Streak => players.sort_by(|a, b| b.best_streak.cmp(&a.best_streak)),
    }
}
