//! Full-screen notices shown while there is nothing to browse.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

const TITLE: &str = "QUESTIONS";

pub fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let message = Line::from(Span::styled(
        "Loading questions...",
        Style::default().fg(Color::Yellow),
    ));
    render_notice(frame, area, app, message, "q to quit");
}

pub fn render_failed(frame: &mut Frame, area: Rect, app: &App) {
    let message = Line::from(Span::styled(
        app.failure().unwrap_or("Failed to load questions").to_string(),
        Style::default().fg(Color::Red).bold(),
    ));
    render_notice(frame, area, app, message, "q to quit");
}

pub fn render_empty(frame: &mut Frame, area: Rect, app: &App) {
    let message = Line::from("No questions matched".fg(Color::DarkGray));
    render_notice(frame, area, app, message, "q to quit");
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App, message: Line, hint: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .horizontal_margin(4)
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(app.route().path.as_str().fg(Color::DarkGray)),
        Line::from(""),
        message,
        Line::from(""),
        Line::from(hint.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, chunks[1]);
}
