//! Game-over overlay, drawn on top of the frozen play field.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::level::LevelProgression;
use crate::game::session::GameSession;
use crate::ui::play_scene::centered_rect;

pub fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let overlay = centered_rect(area, 44, 9);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let level = session.current_level();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Final Score: {}", session.score()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Level {} - {}", level, LevelProgression::spec(level).name),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R]", Style::default().fg(Color::Cyan)),
            Span::raw(" Restart   "),
            Span::styled("[M]", Style::default().fg(Color::Cyan)),
            Span::raw(" Main Menu"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
