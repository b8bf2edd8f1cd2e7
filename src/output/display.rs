//! Display functions for command results

use super::formatters::win_rate_bar;
use crate::leaderboard::PlayerEntry;
use crate::stats::GameStats;
use colored::Colorize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Print the persisted player statistics
pub fn print_stats(stats: &GameStats) {
    println!("\n{}", "\u{2550}".repeat(60).cyan());
    println!(" {} ", "ESTAD\u{cd}STICAS".bright_cyan().bold());
    println!("{}", "\u{2550}".repeat(60).cyan());

    if stats.total_games == 0 {
        println!("\nTodav\u{ed}a no jugaste ninguna partida.");
        println!("Corr\u{e9} `wordle_argentino play` para empezar.\n");
        return;
    }

    println!("\n   Jugados:          {}", stats.total_games);
    println!(
        "   Ganados:          {} ({})",
        stats.games_won,
        format!("{}%", stats.win_rate()).bright_yellow()
    );
    println!("   Perdidos:         {}", stats.games_lost);
    println!(
        "   Puntos:           {}",
        stats.total_score.to_string().bright_yellow().bold()
    );
    println!(
        "   Racha actual:     {}",
        stats.current_streak.to_string().green()
    );
    println!(
        "   Mejor racha:      {}",
        stats.best_streak.to_string().green().bold()
    );
    println!("   Promedio:         {:.1} intentos", stats.average_guesses);
    println!(
        "   % Ganados:        [{}] {}%",
        win_rate_bar(stats.win_rate(), 30).green(),
        stats.win_rate()
    );

    if let Some(ago) = last_played_ago(stats.last_played) {
        println!("   \u{da}ltima partida:   {ago}");
    }
    println!();
}

/// Print the mock ranking table
pub fn print_ranking(players: &[PlayerEntry]) {
    println!("\n{}", "\u{2550}".repeat(72).cyan());
    println!(" {} ", "RANKING".bright_cyan().bold());
    println!("{}", "\u{2550}".repeat(72).cyan());
    println!(
        "\n   {}",
        "Datos de ejemplo: sin backend, los rivales son simulados".bright_black()
    );
    println!(
        "\n   {:<4}{:<20}{:>8}{:>8}{:>9}{:>8}{:>10}",
        "#", "Jugador", "Jugados", "Ganados", "% Gan.", "Racha", "Puntos"
    );
    println!("   {}", "\u{2500}".repeat(67).bright_black());

    for (rank, p) in players.iter().enumerate() {
        let medal = match rank {
            0 => "\u{1f947}",
            1 => "\u{1f948}",
            2 => "\u{1f949}",
            _ => "  ",
        };
        let line = format!(
            "{medal} {:<4}{:<20}{:>8}{:>8}{:>8}%{:>8}{:>10}",
            rank + 1,
            p.name,
            p.total_games,
            p.games_won,
            p.win_rate,
            p.best_streak,
            p.total_score,
        );
        if p.is_you {
            println!("   {}", line.bright_yellow().bold());
        } else {
            println!("   {line}");
        }
    }
    println!();
}

/// Rough "hace N ..." description of the last-played timestamp
fn last_played_ago(last_played: u64) -> Option<String> {
    if last_played == 0 {
        return None;
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()?
        .as_secs();
    let elapsed = now.saturating_sub(last_played);

    let text = match elapsed {
        0..=59 => "hace menos de un minuto".to_string(),
        60..=3599 => format!("hace {} min", elapsed / 60),
        3600..=86_399 => format!("hace {} h", elapsed / 3600),
        _ => format!("hace {} d\u{ed}as", elapsed / 86_400),
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_played_never_is_none() {
        assert_eq!(last_played_ago(0), None);
    }

    #[test]
    fn last_played_just_now() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(
            last_played_ago(now).unwrap(),
            "hace menos de un minuto"
        );
    }

    #[test]
    fn last_played_minutes() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(last_played_ago(now - 180).unwrap(), "hace 3 min");
    }
}
