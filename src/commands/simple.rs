//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a 5-letter word per turn, see the
//! colored result rows. No reveal animation here; rows commit immediately.

use crate::core::{WORD_LEN, Word, is_game_letter};
use crate::game::{Key, KeyOutcome, MAX_GUESSES, Match, Status};
use crate::output::formatters::{row_to_emoji, row_to_tiles};
use crate::stats::store::StatsStore;
use anyhow::{Result, anyhow};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based play mode
///
/// # Errors
///
/// Returns an error if reading user input fails or if the word list is
/// empty.
pub fn run_simple(words: &[Word], store: &StatsStore) -> Result<()> {
    println!("\n\u{2554}{}\u{2557}", "\u{2550}".repeat(62));
    println!("\u{2551}{:^62}\u{2551}", "Wordle Argentino");
    println!("\u{255a}{}\u{255d}\n", "\u{2550}".repeat(62));

    println!("Adivin\u{e1} la palabra de {WORD_LEN} letras en {MAX_GUESSES} intentos.");
    println!("  {} letra en su lugar", " V ".black().on_green().bold());
    println!("  {} letra en otra posici\u{f3}n", " V ".black().on_yellow().bold());
    println!("  {} letra que no est\u{e1}", " V ".white().on_bright_black().bold());
    println!("\nComandos: 'salir' para terminar, 'nueva' para otra palabra\n");

    loop {
        let mut game =
            Match::start(words).ok_or_else(|| anyhow!("word list is empty"))?;

        match play_one_match(&mut game)? {
            MatchEnd::Quit => return Ok(()),
            MatchEnd::Restart => continue,
            MatchEnd::Finished => {}
        }

        report_result(&game, store);

        match prompt("Jugar de nuevo? (si/no)")?.to_lowercase().as_str() {
            "si" | "s" | "yes" | "y" => {
                println!("\n\u{1f504} Nueva partida!\n");
            }
            _ => {
                println!("\n\u{1f44b} Gracias por jugar!\n");
                return Ok(());
            }
        }
    }
}

/// How one line-mode match ended
enum MatchEnd {
    Finished,
    Restart,
    Quit,
}

/// Play a single match until it reaches a terminal state or the user leaves
fn play_one_match(game: &mut Match) -> Result<MatchEnd> {
    while game.status() == Status::Playing {
        let turn = game.guesses_used() + 1;
        let input = prompt(&format!("Intento {turn}/{MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "salir" | "quit" | "q" => return Ok(MatchEnd::Quit),
            "nueva" | "new" => {
                // Abandoning records nothing; caller starts a fresh word
                println!("\n\u{1f504} Palabra nueva!\n");
                return Ok(MatchEnd::Restart);
            }
            _ => {}
        }

        match submit_line(game, &input) {
            KeyOutcome::Submitted(sub) => {
                let guess = &game.guesses()[sub.row_index];
                println!(
                    "  {}   {}\n",
                    row_to_tiles(guess, &sub.row),
                    row_to_emoji(&sub.row)
                );
            }
            _ => {
                println!(
                    "  {}\n",
                    format!("\u{274c} La palabra debe tener {WORD_LEN} letras").red()
                );
            }
        }
    }
    Ok(MatchEnd::Finished)
}

/// Validate and submit one typed line as a guess
///
/// The line must consist of exactly 5 alphabet letters; anything else is
/// rejected without touching the match. An over-long line can never be
/// quietly cut down to a guess the user didn't type, and a line with
/// unrecognized characters never burns an attempt.
fn submit_line(game: &mut Match, input: &str) -> KeyOutcome {
    let letters: Vec<char> = input
        .trim()
        .chars()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .collect();

    if letters.len() != WORD_LEN || !letters.iter().all(|&c| is_game_letter(c)) {
        return KeyOutcome::Incomplete;
    }

    for &ch in &letters {
        game.press(Key::Letter(ch));
    }
    game.press(Key::Enter)
}

fn report_result(game: &Match, store: &StatsStore) {
    let won = game.status() == Status::Won;
    let guesses_used = game.guesses_used();

    if won {
        println!(
            "{}",
            format!("\u{2705} Ganaste en {guesses_used} intentos!")
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("\u{274c} Perdiste. La palabra era {}", game.solution())
                .red()
                .bold()
        );
    }

    // Stats failures never roll back the finished match
    match store.load() {
        Ok(mut stats) => {
            stats.record(won, guesses_used);
            if let Err(e) = store.save(&stats) {
                eprintln!("{}", format!("No se pudieron guardar las estad\u{ed}sticas: {e}").yellow());
            } else {
                println!(
                    "Puntos totales: {}  Racha: {}",
                    stats.total_score.to_string().bright_yellow(),
                    stats.current_streak
                );
            }
        }
        Err(e) => {
            eprintln!("{}", format!("No se pudieron leer las estad\u{ed}sticas: {e}").yellow());
        }
    }
    println!();
}

/// Get user input with a prompt
fn prompt(text: &str) -> Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(solution: &str) -> Match {
        Match::with_solution(Word::new(solution).unwrap())
    }

    #[test]
    fn exact_line_submits() {
        let mut g = game("GATOS");
        let outcome = submit_line(&mut g, "TOGAS");

        assert!(matches!(outcome, KeyOutcome::Submitted(_)));
        assert_eq!(g.guesses()[0].text(), "TOGAS");
        assert_eq!(g.guesses_used(), 1);
    }

    #[test]
    fn lowercase_and_padding_accepted() {
        let mut g = game("GATOS");
        submit_line(&mut g, "  gatos  ");
        assert_eq!(g.status(), Status::Won);
    }

    #[test]
    fn long_line_is_rejected_not_truncated() {
        // A 6-letter line must not be cut down to its first 5 letters and
        // committed as a guess the user never typed
        let mut g = game("GATOS");
        let outcome = submit_line(&mut g, "GATITO");

        assert_eq!(outcome, KeyOutcome::Incomplete);
        assert_eq!(g.guesses_used(), 0);
        assert!(g.buffer().is_empty());
        assert_eq!(g.status(), Status::Playing);
    }

    #[test]
    fn short_line_is_rejected() {
        let mut g = game("GATOS");
        assert_eq!(submit_line(&mut g, "GAT"), KeyOutcome::Incomplete);
        assert_eq!(g.guesses_used(), 0);
    }

    #[test]
    fn line_with_invalid_characters_is_rejected() {
        let mut g = game("GATOS");
        assert_eq!(submit_line(&mut g, "GAT0S"), KeyOutcome::Incomplete);
        assert_eq!(submit_line(&mut g, "GA TO"), KeyOutcome::Incomplete);
        assert_eq!(g.guesses_used(), 0);
        assert!(g.buffer().is_empty());
    }
}
