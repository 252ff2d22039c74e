//! The play scene: the scrolling field, the bird, the HUD, and the
//! level-transition overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::assets::{self, VisualRef};
use crate::constants::*;
use crate::game::level::LevelProgression;
use crate::game::session::GameSession;
use crate::settings::Settings;

/// Render the full play screen: bordered field, status bar, optional
/// debug line.
pub fn render_play(frame: &mut Frame, area: Rect, session: &GameSession, settings: &Settings) {
    frame.render_widget(Clear, area);

    let spec = session.progression().current_spec();

    let block = Block::default()
        .title(format!(" Skyward - {} ", spec.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status_height = if settings.show_debug_hud { 3 } else { 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(status_height)])
        .split(inner);

    render_field(frame, chunks[0], session);
    render_status(frame, chunks[1], session, settings);
}

/// Rasterize the 800x600 field into the available cell grid. Each cell is
/// sampled at its center point in field coordinates.
fn render_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let level = session.current_level();
    let bird_skin = assets::resolve(session.bird().visual);
    let background = assets::resolve(VisualRef::Background { level });

    let bird = session.bird().bounds();
    let mut lines = Vec::with_capacity(height);

    for row in 0..height {
        let field_y = ((row as f64 + 0.5) * FIELD_HEIGHT as f64 / height as f64) as i32;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let field_x = ((col as f64 + 0.5) * FIELD_WIDTH as f64 / width as f64) as i32;

            if contains(&bird, field_x, field_y) {
                spans.push(Span::styled(
                    bird_skin.glyph.to_string(),
                    Style::default()
                        .fg(bird_skin.color)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let hit = session
                .obstacles()
                .iter()
                .find(|o| contains(&o.bounds(), field_x, field_y));
            match hit {
                Some(obstacle) => {
                    let skin = assets::resolve(obstacle.visual);
                    spans.push(Span::styled(
                        skin.glyph.to_string(),
                        Style::default().fg(skin.color),
                    ));
                }
                None => spans.push(Span::styled(
                    background.glyph.to_string(),
                    Style::default().fg(background.color),
                )),
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn contains(rect: &crate::game::obstacle::Rect, x: i32, y: i32) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn render_status(frame: &mut Frame, area: Rect, session: &GameSession, settings: &Settings) {
    let level = session.current_level();
    let within = session.score() % SCORE_TO_NEXT_LEVEL;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Level: ", Style::default().fg(Color::DarkGray)),
            Span::styled(level.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(
                    "   Next Level: {}/{} ({:.0}%)",
                    within,
                    SCORE_TO_NEXT_LEVEL,
                    session.progression().completion_percentage(session.score())
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(" [Space]", Style::default().fg(Color::Cyan)),
            Span::raw(" Jump  "),
            Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
            Span::raw(" Menu"),
        ]),
    ];

    if settings.show_debug_hud {
        lines.push(Line::from(Span::styled(
            format!(
                " mode={:?} speed={} obstacles={} vel={}",
                session.mode(),
                session.game_speed(),
                session.obstacles().len(),
                session.bird().velocity
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// "LEVEL N / Get Ready!" overlay. Purely visual: the simulation re-enters
/// play on its very next step.
pub fn render_transition_overlay(frame: &mut Frame, area: Rect, session: &GameSession) {
    let entering = session.current_level() + 1;
    let spec = LevelProgression::spec(entering);

    let overlay = centered_rect(area, 40, 7);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("LEVEL {}", entering),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(spec.name, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            "Get Ready!",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
