use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use tracing::trace;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into a lifegrid event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => {
            trace!(?key_event, "key event");

            match key_event {
                KeyEvent {
                    kind: KeyEventKind::Release,
                    ..
                } => None,
                KeyEvent {
                    code: KeyCode::Char('q'),
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => Some(Event::AppEvent(AppEvent::Exit)),
                KeyEvent {
                    code: KeyCode::Char(' '),
                    ..
                } => Some(Event::AppEvent(AppEvent::TogglePause)),
                KeyEvent {
                    code: KeyCode::Char('n'),
                    ..
                } => Some(Event::EngineEvent(EngineEvent::Advance(1))),
                _ => None,
            }
        }
        CrossTermEvent::Resize(cols, rows) => {
            Some(Event::AppEvent(AppEvent::Resize { cols, rows }))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrossTermEvent {
        CrossTermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn exit_keys() {
        let exit = Some(Event::AppEvent(AppEvent::Exit));

        assert_eq!(convert_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), exit);
        assert_eq!(convert_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), exit);
        assert_eq!(convert_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn pause_and_step() {
        assert_eq!(
            convert_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Event::AppEvent(AppEvent::TogglePause))
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Event::EngineEvent(EngineEvent::Advance(1)))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        assert_eq!(convert_event(CrossTermEvent::Key(release)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            convert_event(CrossTermEvent::Resize(80, 24)),
            Some(Event::AppEvent(AppEvent::Resize { cols: 80, rows: 24 }))
        );
    }
}
