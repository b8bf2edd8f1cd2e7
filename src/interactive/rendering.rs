//! TUI rendering with ratatui
//!
//! Board grid, virtual keyboard, and message log. Cell colors for the row
//! being revealed are filtered through the `Reveal` schedule so the engine's
//! already-committed classification appears column by column.

use super::app::{App, MessageStyle};
use crate::core::{CellState, WORD_LEN};
use crate::game::{ALPHABET, MAX_GUESSES, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let now = Instant::now();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Min(5),     // Messages
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, now, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.toast_visible(now) {
        render_toast(f, app, chunks[1]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("\u{2600} WORDLE ARGENTINO \u{2600}")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Color for a cell classification
fn cell_style(state: CellState) -> Style {
    match state {
        CellState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        CellState::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        CellState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellState::Default => Style::default().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LEN * 2);

        // Shake cue: jitter the active input row sideways
        let active_row = app.game.guesses_used();
        let jitter = app.shake_until.is_some_and(|until| {
            until > now && (until.saturating_duration_since(now).subsec_millis() / 50) % 2 == 0
        });
        if row == active_row && jitter {
            spans.push(Span::raw(" "));
        }

        for col in 0..WORD_LEN {
            let (letter, state) = board_cell(app, now, row, col);
            let text = format!(" {letter} ");
            spans.push(Span::styled(
                text,
                cell_style(state).add_modifier(Modifier::BOLD),
            ));
            if col + 1 < WORD_LEN {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        if row + 1 < MAX_GUESSES {
            lines.push(Line::default());
        }
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Tablero "),
    );
    f.render_widget(board, area);
}

/// Letter and visible classification for one board cell
///
/// Submitted rows show their committed classification, except the row being
/// revealed, whose colors appear column by column. The active row shows the
/// input buffer uncolored.
fn board_cell(app: &App, now: Instant, row: usize, col: usize) -> (char, CellState) {
    let guesses = app.game.guesses();

    if row < guesses.len() {
        let letter = guesses[row].letter_at(col);
        let state = app.game.board()[row][col];

        if let Some(reveal) = app.reveal {
            if reveal.row_index == row && !reveal.is_committed(now) {
                if col < reveal.visible_cells(now) {
                    return (letter, state);
                }
                return (letter, CellState::Default);
            }
        }
        return (letter, state);
    }

    if row == guesses.len() && !app.game.status().is_terminal() {
        let buffer = app.game.buffer();
        let letter = buffer.get(col).copied().unwrap_or(' ');
        return (letter, CellState::Default);
    }

    (' ', CellState::Default)
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(&msg.text, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Mensajes "),
    );
    f.render_widget(list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    // QWERTY rows of the 27-letter alphabet
    let rows: [&[char]; 3] = [&ALPHABET[0..10], &ALPHABET[10..20], &ALPHABET[20..27]];

    let mut lines: Vec<Line> = Vec::with_capacity(3);
    for (i, row) in rows.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        if i == 2 {
            spans.push(Span::styled(
                " ENTER ",
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            spans.push(Span::raw(" "));
        }
        for (j, &ch) in row.iter().enumerate() {
            let state = app.game.keyboard().state_of(ch);
            spans.push(Span::styled(format!(" {ch} "), cell_style(state)));
            if j + 1 < row.len() {
                spans.push(Span::raw(" "));
            }
        }
        if i == 2 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                " DEL ",
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Teclado "),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let controls = if app.game.status().is_terminal() {
        "n: nueva partida | q/Esc: salir"
    } else {
        "letras: escribir | Enter: enviar | Backspace: borrar | Esc: salir"
    };
    let session = format!(
        "Sesi\u{f3}n: {} jugados, {} ganados",
        app.session.total_games, app.session.games_won
    );

    let status = Paragraph::new(format!("{session}  \u{2502}  {controls}"))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

/// End-of-match popup over the board
fn render_toast(f: &mut Frame, app: &App, board_area: Rect) {
    let area = centered_rect(board_area, 40, 5);

    let (title, style) = match app.game.status() {
        Status::Won => (
            " Ganaste! ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (" Perdiste ", Style::default().fg(Color::Red)),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("La palabra era {}", app.game.solution()),
        Style::default().fg(Color::White),
    ))];
    lines.push(Line::from(Span::styled(
        "n: volver a jugar  q: salir",
        Style::default().fg(Color::Gray),
    )));

    let toast = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .title_style(style)
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );

    f.render_widget(Clear, area);
    f.render_widget(toast, area);
}

/// A rect of the given size centered inside `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
