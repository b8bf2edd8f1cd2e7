//! TUI application state and event loop
//!
//! The engine commits its state the moment a guess is submitted; everything
//! time-based here is presentation only. A `Reveal` record drives the
//! staggered row animation and is dropped on restart, so a stale timer can
//! never touch a new match.

use crate::core::Word;
use crate::game::{Key, KeyOutcome, MAX_GUESSES, Match, Status};
use crate::stats::store::StatsStore;
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between successive cell reveals in a submitted row
pub const REVEAL_STAGGER: Duration = Duration::from_millis(200);

/// Time from submit until the row (and any result message) is fully visible
pub const REVEAL_COMMIT: Duration = Duration::from_millis(1200);

/// Duration of the shake cue after an incomplete submit
const SHAKE_DURATION: Duration = Duration::from_millis(300);

/// Redraw/poll cadence of the event loop
const TICK: Duration = Duration::from_millis(50);

/// In-flight reveal animation for one submitted row
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row_index: usize,
    started: Instant,
}

impl Reveal {
    #[must_use]
    pub fn new(row_index: usize) -> Self {
        Self {
            row_index,
            started: Instant::now(),
        }
    }

    /// How many cells of the row are visibly colored at `now`
    #[must_use]
    pub fn visible_cells(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        ((elapsed.as_millis() / REVEAL_STAGGER.as_millis()) as usize).min(5)
    }

    /// Whether the whole row (and the result, if any) may be shown
    #[must_use]
    pub fn is_committed(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= REVEAL_COMMIT
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Matches finished during this terminal session
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

/// Application state
pub struct App<'a> {
    words: &'a [Word],
    pub game: Match,
    pub store: StatsStore,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    pub shake_until: Option<Instant>,
    pub session: SessionStats,
    pub should_quit: bool,
    /// Pending result line, shown once the reveal commits
    pending_result: Option<(String, MessageStyle)>,
}

impl<'a> App<'a> {
    /// Start the app with a first match already dealt
    ///
    /// # Errors
    /// Fails when the word list is empty.
    pub fn new(words: &'a [Word], store: StatsStore) -> Result<Self> {
        let game = Match::start(words).ok_or_else(|| anyhow!("word list is empty"))?;
        Ok(Self {
            words,
            game,
            store,
            messages: vec![Message {
                text: "Adivin\u{e1} la palabra de 5 letras en 6 intentos".to_string(),
                style: MessageStyle::Info,
            }],
            reveal: None,
            shake_until: None,
            session: SessionStats::default(),
            should_quit: false,
            pending_result: None,
        })
    }

    /// Whether a reveal animation is still running
    #[must_use]
    pub fn reveal_in_flight(&self, now: Instant) -> bool {
        self.reveal.is_some_and(|r| !r.is_committed(now))
    }

    /// Whether the shake cue is active
    #[must_use]
    pub fn shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    /// Whether the end-of-match toast should be drawn
    #[must_use]
    pub fn toast_visible(&self, now: Instant) -> bool {
        self.game.status().is_terminal() && !self.reveal_in_flight(now)
    }

    /// Feed a game key through the engine and react to the outcome
    pub fn handle_game_key(&mut self, key: Key) {
        let now = Instant::now();

        // Input is paused while a row is revealing; the engine state is
        // already committed, this only avoids typing over the animation.
        if self.reveal_in_flight(now) {
            return;
        }

        match self.game.press(key) {
            KeyOutcome::Submitted(sub) => {
                self.reveal = Some(Reveal::new(sub.row_index));
                self.shake_until = None;
                match sub.status {
                    Status::Won => self.finish_match(true),
                    Status::Lost => self.finish_match(false),
                    Status::Playing => {}
                }
            }
            KeyOutcome::Incomplete => {
                self.shake_until = Some(now + SHAKE_DURATION);
                self.add_message("La palabra debe tener 5 letras", MessageStyle::Error);
            }
            KeyOutcome::Edited | KeyOutcome::Ignored => {}
        }
    }

    /// Record a finished match: session tally, persisted stats, result toast
    ///
    /// The match outcome is already committed; a stats failure only surfaces
    /// a warning.
    fn finish_match(&mut self, won: bool) {
        let guesses_used = self.game.guesses_used();

        self.session.total_games += 1;
        if won {
            self.session.games_won += 1;
            if guesses_used <= MAX_GUESSES {
                self.session.guess_distribution[guesses_used] += 1;
            }
        }

        let result = if won {
            let text = match guesses_used {
                1 => "\u{1f3c6} Ganaste al primer intento!".to_string(),
                n => format!("\u{1f389} Ganaste en {n} intentos!"),
            };
            (text, MessageStyle::Success)
        } else {
            (
                format!("Perdiste. La palabra era {}", self.game.solution()),
                MessageStyle::Error,
            )
        };
        self.pending_result = Some(result);

        match self.store.load() {
            Ok(mut stats) => {
                stats.record(won, guesses_used);
                if let Err(e) = self.store.save(&stats) {
                    self.add_message(
                        &format!("No se pudieron guardar las estad\u{ed}sticas: {e}"),
                        MessageStyle::Error,
                    );
                }
            }
            Err(e) => {
                self.add_message(
                    &format!("No se pudieron leer las estad\u{ed}sticas: {e}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Take the result line once the reveal has committed
    pub fn surface_pending_result(&mut self, now: Instant) {
        if self.reveal_in_flight(now) {
            return;
        }
        if let Some((text, style)) = self.pending_result.take() {
            self.add_message(&text, style);
        }
    }

    /// Start a fresh match; drops any in-flight reveal and shake
    pub fn new_game(&mut self) {
        if let Some(game) = Match::start(self.words) {
            self.game = game;
        }
        self.reveal = None;
        self.shake_until = None;
        self.pending_result = None;
        self.messages.clear();
        self.add_message("Nueva partida!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.surface_pending_result(now);
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so the reveal animation keeps redrawing
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    _ if app.game.status().is_terminal() => match key.code {
                        KeyCode::Char('n' | 'N') => app.new_game(),
                        KeyCode::Char('q' | 'Q') => app.should_quit = true,
                        _ => {}
                    },
                    KeyCode::Char(c) => app.handle_game_key(Key::Letter(c)),
                    KeyCode::Backspace => app.handle_game_key(Key::Delete),
                    KeyCode::Enter => app.handle_game_key(Key::Enter),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
