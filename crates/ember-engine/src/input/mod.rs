//! Window input folded into the small event vocabulary the widget layer
//! consumes.

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::coords::Vec2;

/// Character emitted for backspace so text consumers can treat it like any
/// other keystroke.
pub const BACKSPACE: char = '\u{8}';

/// Input event in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    PointerDown(Vec2),
    PointerUp(Vec2),
    Char(char),
}

/// Folds winit window events into [`InputEvent`]s.
///
/// winit reports button presses without a position, so the tracker keeps the
/// last cursor position and stamps it onto button events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the translated events for one window event. Most events
    /// translate to zero or one; a keystroke carrying multi-char text
    /// produces one event per character.
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.position = Vec2::new(position.x as f32, position.y as f32);
                vec![InputEvent::PointerMoved(self.position)]
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => vec![InputEvent::PointerDown(self.position)],
                ElementState::Released => vec![InputEvent::PointerUp(self.position)],
            },
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if event.logical_key == Key::Named(NamedKey::Backspace) {
                    return vec![InputEvent::Char(BACKSPACE)];
                }
                let Some(text) = event.text.as_ref() else {
                    return Vec::new();
                };
                text.chars()
                    .filter(|c| !c.is_control())
                    .map(InputEvent::Char)
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}
