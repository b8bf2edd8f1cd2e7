//! Per-player statistics
//!
//! The stats collaborator the game reports to after each terminal
//! transition. The engine never touches this module; the TUI app and the
//! simple CLI mode call `GameStats::record` with `(won, guesses_used)` and
//! then persist through `store`.

pub mod store;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Base score for any won match
const WIN_BASE_SCORE: u32 = 100;

/// Aggregate statistics for one player
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub total_games: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub total_score: u32,
    pub best_streak: u32,
    pub current_streak: u32,
    pub average_guesses: f64,
    /// Unix seconds of the last finished match, 0 if never played
    pub last_played: u64,
}

/// Score for one finished match
///
/// Losses score nothing. Wins score 100 plus a bonus that shrinks with each
/// extra guess: 100/75/50/25/10 for 1-5 guesses, no bonus for 6.
#[must_use]
pub fn score_for(won: bool, guesses_used: usize) -> u32 {
    if !won {
        return 0;
    }
    let bonus = match guesses_used {
        1 => 100,
        2 => 75,
        3 => 50,
        4 => 25,
        5 => 10,
        _ => 0,
    };
    WIN_BASE_SCORE + bonus
}

impl GameStats {
    /// Win rate in whole percent, 0 when no games were played
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.total_games == 0 {
            0
        } else {
            (f64::from(self.games_won) / f64::from(self.total_games) * 100.0).round() as u32
        }
    }

    /// Fold one finished match into the aggregates
    ///
    /// Streak resets to zero on a loss; the running average covers every
    /// finished match, won or lost.
    pub fn record(&mut self, won: bool, guesses_used: usize) {
        let new_streak = if won { self.current_streak + 1 } else { 0 };
        let played_before = f64::from(self.total_games);

        self.average_guesses = if self.total_games > 0 {
            (self.average_guesses * played_before + guesses_used as f64) / (played_before + 1.0)
        } else {
            guesses_used as f64
        };

        self.total_games += 1;
        if won {
            self.games_won += 1;
        } else {
            self.games_lost += 1;
        }
        self.total_score += score_for(won, guesses_used);
        self.current_streak = new_streak;
        self.best_streak = self.best_streak.max(new_streak);
        self.last_played = unix_now();
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_loss_is_zero() {
        for guesses in 1..=6 {
            assert_eq!(score_for(false, guesses), 0);
        }
    }

    #[test]
    fn score_win_bonus_by_guess_count() {
        assert_eq!(score_for(true, 1), 200);
        assert_eq!(score_for(true, 2), 175);
        assert_eq!(score_for(true, 3), 150);
        assert_eq!(score_for(true, 4), 125);
        assert_eq!(score_for(true, 5), 110);
        assert_eq!(score_for(true, 6), 100);
    }

    #[test]
    fn record_win_updates_everything() {
        let mut stats = GameStats::default();
        stats.record(true, 3);

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_lost, 0);
        assert_eq!(stats.total_score, 150);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);
        assert!((stats.average_guesses - 3.0).abs() < f64::EPSILON);
        assert!(stats.last_played > 0);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = GameStats::default();
        stats.record(true, 2);
        stats.record(true, 4);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);

        stats.record(false, 6);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);
        assert_eq!(stats.games_lost, 1);
    }

    #[test]
    fn running_average_over_all_games() {
        let mut stats = GameStats::default();
        stats.record(true, 2);
        stats.record(true, 4);
        stats.record(false, 6);
        assert!((stats.average_guesses - 4.0).abs() < 1e-9);
    }

    #[test]
    fn win_rate_rounds() {
        let mut stats = GameStats::default();
        assert_eq!(stats.win_rate(), 0);
        stats.record(true, 3);
        stats.record(true, 3);
        stats.record(false, 6);
        assert_eq!(stats.win_rate(), 67);
    }
}
