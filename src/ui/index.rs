//! Every record of the displayed list on one scrollable screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::app::App;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let header = Paragraph::new(format!(
        "{}  ·  {} questions",
        app.route().path,
        app.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = app
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let mut spans = vec![
                Span::styled(
                    format!("{:3}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(truncate(&question.question)),
            ];
            if app.is_revealed(index) {
                spans.push(Span::styled(
                    format!("  → {}", question.answer),
                    Style::default().fg(Color::Green),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.cursor()));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let controls = Paragraph::new("j/k move  ·  enter open  ·  tab back  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}

fn truncate(text: &str) -> String {
    if text.chars().count() > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        let long = "é".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let short = truncate(&long);
        assert_eq!(short.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(short.ends_with("..."));
        assert_eq!(truncate("Where did I put my keys?"), "Where did I put my keys?");
    }
}
