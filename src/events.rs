//! Environment event model.
//!
//! The controller consumes a small, host-neutral event vocabulary rather
//! than raw terminal events so that tests and non-crossterm hosts can drive
//! it directly. `EnvEvent::from_crossterm` bridges the common case of a
//! crossterm event loop.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};

/// The subset of keys the dismissal policy and menu navigation consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Up,
    Down,
    Enter,
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// A document-level environment event, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvEvent {
    PointerDown { x: i32, y: i32 },
    KeyDown(Key),
    /// The owning viewport resized or scrolled; positions must be
    /// recomputed against fresh measurements.
    ViewChanged,
}

impl EnvEvent {
    /// Map a crossterm event into the controller's vocabulary.
    ///
    /// Returns `None` for events the controller has no interest in (mouse
    /// movement, key releases, paste, focus changes).
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(EnvEvent::PointerDown {
                    x: i32::from(mouse.column),
                    y: i32::from(mouse.row),
                }),
                MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown
                | MouseEventKind::ScrollLeft
                | MouseEventKind::ScrollRight => Some(EnvEvent::ViewChanged),
                _ => None,
            },
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(EnvEvent::KeyDown(Key::from(key.code)))
            }
            Event::Resize(_, _) => Some(EnvEvent::ViewChanged),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    #[test]
    fn maps_mouse_down_to_pointer_down() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            EnvEvent::from_crossterm(&ev),
            Some(EnvEvent::PointerDown { x: 12, y: 7 })
        );
    }

    #[test]
    fn ignores_mouse_movement_and_release() {
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EnvEvent::from_crossterm(&moved), None);
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EnvEvent::from_crossterm(&up), None);
    }

    #[test]
    fn maps_escape_and_resize() {
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(
            EnvEvent::from_crossterm(&esc),
            Some(EnvEvent::KeyDown(Key::Escape))
        );
        assert_eq!(
            EnvEvent::from_crossterm(&Event::Resize(80, 24)),
            Some(EnvEvent::ViewChanged)
        );
    }

    #[test]
    fn scroll_wheel_counts_as_view_change() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EnvEvent::from_crossterm(&ev), Some(EnvEvent::ViewChanged));
    }

    #[test]
    fn unlisted_keys_map_to_other() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(
            EnvEvent::from_crossterm(&ev),
            Some(EnvEvent::KeyDown(Key::Other))
        );
    }
}
