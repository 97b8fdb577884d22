use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::QuestionRecord;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };
    let revealed = app.is_revealed(app.cursor());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.question);
    render_options(frame, chunks[2], question, revealed);
    render_controls(frame, chunks[3], revealed);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}  {}/{}  ·  {} revealed",
        app.route().path,
        app.cursor() + 1,
        app.total_questions(),
        app.revealed_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, question: &QuestionRecord, revealed: bool) {
    let options = question.options();
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.into_iter().enumerate() {
        let (marker, style) = option_look(question, index, revealed);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

/// Marker and style of one option. Options look alike until the answer is revealed.
fn option_look(question: &QuestionRecord, index: usize, revealed: bool) -> (&'static str, Style) {
    match (revealed, question.is_correct(index)) {
        (false, _) => (" ", Style::default().fg(Color::Gray)),
        (true, true) => ("✓", Style::default().fg(Color::Green).bold()),
        (true, false) => ("✗", Style::default().fg(Color::Red).dim()),
    }
}

/// `A`, `B`, ... `Z`, then `27`, `28`, ... for unusually long option lists.
fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, revealed: bool) {
    let reveal = if revealed { "hide" } else { "reveal" };
    let widget = Paragraph::new(format!(
        "h/l previous/next  ·  enter {}  ·  tab index  ·  q quit",
        reveal
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), "A");
        assert_eq!(option_label(3), "D");
        assert_eq!(option_label(25), "Z");
        assert_eq!(option_label(26), "27");
    }

    #[test]
    fn test_answer_only_marked_once_revealed() {
        let question = QuestionRecord::new("Q", "A", ["D1", "D2"]);

        let answer = question.answer_slot();
        let distractor = (answer + 1) % question.option_count();

        assert_eq!(option_look(&question, answer, false), option_look(&question, distractor, false));

        let (answer_marker, answer_style) = option_look(&question, answer, true);
        let (distractor_marker, distractor_style) = option_look(&question, distractor, true);
        assert_eq!(answer_marker, "✓");
        assert_eq!(answer_style.fg, Some(Color::Green));
        assert_eq!(distractor_marker, "✗");
        assert_eq!(distractor_style.fg, Some(Color::Red));
    }
}
