//! Race board rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use rsb_engine::{FINISH_LINE, Horse, RaceSession};

use super::app::RaceApp;

const HORSE_ICON: &str = "\u{265e}";
const TROPHY_ICON: &str = "\u{2605}";

/// Colour group for a lane: matching colours share a bonus size.
pub fn horse_color(horse: Horse) -> Color {
    match horse {
        Horse::H2_3 | Horse::H4 | Horse::H10 | Horse::H11_12 => Color::Blue,
        Horse::H6 | Horse::H8 => Color::Red,
        Horse::H5 | Horse::H9 => Color::Yellow,
        Horse::H7 => Color::White,
    }
}

/// `Roll: 7` or `Roll: -` before the first roll.
pub fn roll_text(session: &RaceSession) -> String {
    match session.last_roll() {
        Some(roll) => format!("Roll: {}", roll.horse.outcome()),
        None => "Roll: -".to_string(),
    }
}

/// `BONUS: 3 steps` when the last roll earned the bonus.
pub fn bonus_text(session: &RaceSession) -> String {
    match session.last_roll() {
        Some(roll) if roll.bonus_applied => format!("BONUS: {} steps", roll.bonus()),
        _ => "BONUS: None".to_string(),
    }
}

/// Draw the whole board: header, one row per horse, and the end banner.
pub fn draw(frame: &mut Frame, app: &RaceApp) {
    let area = frame.area();
    let block = Block::default()
        .title(" Ready Set Bet ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(roll_text(&app.session), Style::default().fg(Color::White).bold()),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(bonus_text(&app.session), Style::default().fg(Color::Yellow)),
        Span::styled(" | Press 'q' to quit.", Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    let moved = app.session.last_roll().map(|r| r.horse);
    for horse in Horse::ALL {
        lines.push(track_line(app, horse, moved == Some(horse)));
        lines.push(Line::from(""));
    }

    if let Some(banner) = banner_line(app) {
        lines.push(banner);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One lane: label, track with the horse on it, finish line, probability.
fn track_line(app: &RaceApp, horse: Horse, just_moved: bool) -> Line<'static> {
    let color = horse_color(horse);
    let base = Style::default().fg(color).bold();
    let position = app.session.state().position(horse);

    let mut spans = vec![Span::styled(format!("{:<7}", horse.label()), base)];
    if position < FINISH_LINE {
        let icon_style = if just_moved { base.reversed() } else { base };
        spans.push(Span::styled("-".repeat(position as usize), base));
        spans.push(Span::styled(HORSE_ICON, icon_style));
        spans.push(Span::styled(
            "-".repeat((FINISH_LINE - position - 1) as usize),
            base,
        ));
        spans.push(Span::styled("|", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled("-".repeat(FINISH_LINE as usize), base));
        spans.push(Span::styled(
            TROPHY_ICON,
            Style::default().fg(Color::Green).reversed(),
        ));
    }
    spans.push(Span::styled(
        format!("   P(Win): {:>6.2}%", app.probabilities.get(horse) * 100.0),
        base,
    ));
    Line::from(spans)
}

/// End-of-race banner, if the animation is over.
fn banner_line(app: &RaceApp) -> Option<Line<'static>> {
    let style = Style::default().bold();
    if let Some(winner) = app.session.winner() {
        Some(Line::from(Span::styled(
            format!("RACE OVER! WINNER: {}!  Press any key to exit.", winner.label()),
            style.fg(Color::Green),
        )))
    } else if app.interrupted {
        Some(Line::from(Span::styled(
            "Race Interrupted.  Press any key to exit.",
            style,
        )))
    } else {
        None
    }
}
