use crate::logger;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize,
}

/// Terminal events the quiz loop cares about; releases and repeats are dropped.
pub fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::Key(key)),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    }
}

pub fn spawn_input_worker(tx: Sender<InputEvent>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("category-flashcards::input_worker".to_string())
        .spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(event) => event,
                    Err(e) => {
                        logger::log(&format!("Input worker read error: {}", e));
                        break;
                    }
                };
                if let Some(input) = translate_event(event)
                    && tx.send(input).is_err()
                {
                    // Receiver gone, the quiz loop has exited
                    logger::log("Input channel disconnected, exiting");
                    break;
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_translate_key_press() {
        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(
            translate_event(Event::Key(key)),
            Some(InputEvent::Key(key))
        );
    }

    #[test]
    fn test_translate_drops_key_release() {
        let key = KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_event(Event::Key(key)), None);
    }

    #[test]
    fn test_translate_resize_and_focus() {
        assert_eq!(
            translate_event(Event::Resize(80, 24)),
            Some(InputEvent::Resize)
        );
        assert_eq!(translate_event(Event::FocusGained), None);
    }
}
