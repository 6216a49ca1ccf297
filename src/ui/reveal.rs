use crate::config::QuizConfig;
use crate::models::RevealContent;
use crate::ui::layout::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn reveal_text(content: &RevealContent) -> Text<'static> {
    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        content.answer.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));

    if let Some(teaching) = &content.teaching {
        text.push_line(Line::from(""));
        for line in teaching.lines() {
            text.push_line(Line::from(Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    text
}

pub fn draw_reveal_popup(f: &mut Frame, content: &RevealContent, config: &QuizConfig) {
    let area = centered_rect(70, 50, f.area());

    f.render_widget(Clear, area);

    let (label, color) = config
        .category(content.category)
        .map_or(("", Color::White), |c| (c.label, c.color));

    let popup = Paragraph::new(reveal_text(content))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    format!(" {} ", label),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Line::from(" Enter: next question ").right_aligned()),
        );
    f.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_text_with_teaching() {
        let content = RevealContent {
            category: 0,
            answer: "Answer".to_string(),
            teaching: Some("Line one\nLine two".to_string()),
        };
        let text = reveal_text(&content);
        assert_eq!(text.lines.len(), 4);
        assert_eq!(text.lines[0].spans[0].content, "Answer");
        assert_eq!(text.lines[3].spans[0].content, "Line two");
    }

    #[test]
    fn test_reveal_text_without_teaching() {
        let content = RevealContent {
            category: 2,
            answer: "Only".to_string(),
            teaching: None,
        };
        assert_eq!(reveal_text(&content).lines.len(), 1);
    }
}
