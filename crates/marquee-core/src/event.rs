//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Text input received
    TextInput {
        /// Input text
        text: String,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

impl Event {
    /// Primary-button press at `position`.
    #[must_use]
    pub const fn click(position: Point) -> Self {
        Self::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    /// Arrow left
    Left,
    /// Secondary button
    /// Arrow right
    Right,
    /// Wheel button
    Middle,
}

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Space bar
    Space,
    /// Forward delete
    Delete,
    /// Home
    Home,
    /// End
    End,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_click_is_left_mouse_down() {
        let e = Event::click(Point::new(5.0, 6.0));
        assert_eq!(
            e,
            Event::MouseDown {
                position: Point::new(5.0, 6.0),
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_event_text_input() {
        let e = Event::TextInput {
            text: "hello".to_string(),
        };
        if let Event::TextInput { text } = e {
            assert_eq!(text, "hello");
        } else {
            panic!("Expected TextInput event");
        }
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let e = Event::KeyDown { key: Key::Backspace };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
