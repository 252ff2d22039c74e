//! The main menu: title, current level card, and progression summary.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::level::LevelProgression;
use crate::game::session::GameSession;

const TITLE: [&str; 5] = [
    " ____  _                                _ ",
    "/ ___|| | ___   ___      ____ _ _ __ __| |",
    "\\___ \\| |/ / | | \\ \\ /\\ / / _` | '__/ _` |",
    " ___) |   <| |_| |\\ V  V / (_| | | | (_| |",
    "|____/|_|\\_\\\\__, | \\_/\\_/ \\__,_|_|  \\__,_|",
];

pub fn render_menu(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let progression = session.progression();
    let level = session.current_level();
    let spec = LevelProgression::spec(level);

    let mut lines = vec![Line::from("")];
    for row in TITLE {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(Span::styled(
        "        (__/)  multi-level flappy",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(
            format!("Level {}: {}", level, spec.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  (x{:.1})", spec.difficulty_multiplier),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        spec.description,
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    // Unlock row: filled markers for unlocked levels
    let markers: Vec<Span> = (1..=progression.max_level())
        .map(|l| {
            if progression.is_unlocked(l) {
                Span::styled(
                    format!(" [{}] ", l),
                    Style::default().fg(Color::Green),
                )
            } else {
                Span::styled(" [x] ".to_string(), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    lines.push(Line::from(markers));
    lines.push(Line::from(Span::styled(
        progression.progress_summary(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        progression.next_level_preview(),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    if session.score() > 0 {
        // A run is paused behind the menu
        lines.push(Line::from(Span::styled(
            format!("Run in progress - score {}", session.score()),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Space/Enter]", Style::default().fg(Color::Cyan)),
        Span::raw(" Play   "),
        Span::styled("[Q]", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
