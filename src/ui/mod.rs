pub mod layout;
mod quiz;
mod reveal;

use crate::models::QuizSession;
use ratatui::Frame;

pub use layout::{calculate_quiz_chunks, centered_rect};
pub use quiz::{countdown_style, draw_loading, draw_quiz, title_line};
pub use reveal::{draw_reveal_popup, reveal_text};

pub fn draw_app(f: &mut Frame, session: &QuizSession) {
    if session.store().is_empty() {
        draw_loading(f, session.config());
        return;
    }

    draw_quiz(f, session);
    if let Some(content) = session.reveal_content() {
        draw_reveal_popup(f, content, session.config());
    }
}
