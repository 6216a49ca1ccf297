use crate::config::QuizConfig;
use crate::models::{Phase, QuizSession, Record, UrgencyPhase};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{max_width, pad_to_width};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn title_line(config: &QuizConfig) -> Line<'static> {
    let spans: Vec<Span<'static>> = config
        .title
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let color = config
                .title_colors
                .get(i % config.title_colors.len().max(1))
                .copied()
                .unwrap_or(Color::White);
            Span::styled(
                c.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

pub fn countdown_style(urgency: UrgencyPhase, phase: Phase) -> Style {
    match (urgency, phase) {
        (UrgencyPhase::Expired, _) => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        (UrgencyPhase::UrgentOn, _) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        (UrgencyPhase::UrgentOff, _) => Style::default().fg(Color::DarkGray),
        (UrgencyPhase::Normal, Phase::Armed) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        (UrgencyPhase::Normal, _) => Style::default().fg(Color::DarkGray),
    }
}

fn card_text(record: &Record, session: &QuizSession) -> Text<'static> {
    let config = session.config();
    let label_width = max_width(config.categories.iter().map(|c| c.label));
    let mut text = Text::default();

    for (index, entry) in record.entries.iter().enumerate() {
        let Some(category) = config.category(index) else {
            continue;
        };
        let active = session.active_category() == Some(index);
        let mut label_style = Style::default()
            .fg(Color::Black)
            .bg(category.color)
            .add_modifier(Modifier::BOLD);
        if active {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }

        text.push_line(Line::from(vec![
            Span::from(if active { "▶ " } else { "  " }),
            Span::styled(format!("{}", index + 1), key_style()),
            Span::from(" "),
            Span::styled(
                format!(" {} ", pad_to_width(category.label, label_width)),
                label_style,
            ),
            Span::from("  "),
            Span::from(entry.prompt.clone()),
        ]));
        text.push_line(Line::from(""));
    }

    text
}

fn status_line(session: &QuizSession) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" ⏱ {:>2}s ", session.remaining_seconds()),
        countdown_style(session.urgency(), session.phase()),
    )];

    if let Some(id) = session.current_id()
        && let Some(position) = session.store().position_of(id)
    {
        spans.push(Span::from(format!(
            "   {} / {}",
            position + 1,
            session.store().len()
        )));
    }

    if session.jump_input_active {
        spans.push(Span::from("   "));
        spans.push(Span::styled("ID: ", key_style()));
        spans.push(Span::from(format!("{}_", session.jump_buffer)));
    }

    Line::from(spans)
}

fn help_line(session: &QuizSession) -> Line<'static> {
    let pairs: &[(&str, &str)] = if session.jump_input_active {
        &[("0-9", " Type ID  "), ("Enter", " Jump  "), ("Esc", " Cancel")]
    } else {
        match session.phase() {
            Phase::Idle => &[
                ("←/→", " Navigate  "),
                ("1-5", " Category  "),
                ("r", " Random  "),
                ("g", " Jump to ID  "),
                ("q", " Quit"),
            ],
            Phase::Armed => &[
                ("Space", " Reveal  "),
                ("1-5", " Switch category  "),
                ("q", " Quit"),
            ],
            Phase::Revealed => &[("Enter", " Next question  "), ("q", " Quit")],
        }
    };

    let spans: Vec<Span<'static>> = pairs
        .iter()
        .flat_map(|(key, action)| [Span::styled(*key, key_style()), Span::from(*action)])
        .collect();
    Line::from(spans)
}

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());
    let config = session.config();

    let title = Paragraph::new(title_line(config))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    if let Some(record) = session.current_record() {
        let card = Paragraph::new(card_text(record, session))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" #{} ", record.id)),
            );
        f.render_widget(card, layout.card_area);
    }

    let status = Paragraph::new(status_line(session)).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, layout.status_area);

    let help = Paragraph::new(help_line(session))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// Shown for as long as the store is empty.
pub fn draw_loading(f: &mut Frame, config: &QuizConfig) {
    let layout = calculate_quiz_chunks(f.area());

    let title = Paragraph::new(title_line(config))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        "載入中…",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "No questions loaded",
        Style::default().fg(Color::DarkGray),
    )));
    let loading = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, layout.card_area);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("q", key_style()),
        Span::from(" Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG;

    #[test]
    fn test_title_line_cycles_colors() {
        let line = title_line(&DEFAULT_CONFIG);
        assert_eq!(line.spans.len(), DEFAULT_CONFIG.title.chars().count());
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_CONFIG.title_colors[0]));
    }

    #[test]
    fn test_countdown_styles_differ_by_urgency() {
        let on = countdown_style(UrgencyPhase::UrgentOn, Phase::Armed);
        let off = countdown_style(UrgencyPhase::UrgentOff, Phase::Armed);
        let expired = countdown_style(UrgencyPhase::Expired, Phase::Revealed);
        assert_ne!(on, off);
        assert_eq!(expired.bg, Some(Color::Red));
        assert_eq!(on.fg, Some(Color::Red));
    }
}
