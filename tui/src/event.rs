use crate::app::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

pub fn map_crossterm_event_to_input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(InputEvent::AttemptQuit)
                }
                KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                    Some(InputEvent::Next)
                }
                KeyCode::Left | KeyCode::Char('b') => Some(InputEvent::Back),
                KeyCode::Char('s') => Some(InputEvent::Skip),
                KeyCode::Esc | KeyCode::Backspace => Some(InputEvent::SystemBack),
                KeyCode::Char('q') => Some(InputEvent::Quit),
                _ => None,
            }
        }
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(InputEvent::MouseClick(me.column, me.row))
            }
            _ => None,
        },
        Event::Resize(w, h) => Some(InputEvent::Resized(w, h)),
        _ => None,
    }
}
