use ember_engine::coords::Vec2;
use ember_engine::input::BACKSPACE;
use ember_engine::render::{Renderer, TextAlign};

use crate::style::TextEntryStyle;
use crate::widget::WidgetBase;

/// Single-line text buffer fed by keystrokes.
pub struct TextEntry {
    pub base: WidgetBase,
    pub style: TextEntryStyle,
    buffer: String,
    max_len: usize,
}

impl TextEntry {
    pub fn new(
        top_left: Vec2,
        size: Vec2,
        label: impl Into<String>,
        max_len: usize,
    ) -> Self {
        Self {
            base: WidgetBase::new(top_left, size, label),
            style: TextEntryStyle::default(),
            buffer: String::new(),
            max_len,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Backspace pops the last character; anything else appends while the
    /// buffer is under its limit.
    pub fn on_char(&mut self, c: char) {
        if c == BACKSPACE {
            self.buffer.pop();
        } else if self.buffer.chars().count() < self.max_len {
            self.buffer.push(c);
        }
    }

    pub fn draw(&mut self, renderer: &mut Renderer) {
        let base = &self.base;
        renderer.add_outlined_frame(
            base.top_left,
            base.size,
            self.style.border.thickness,
            self.style.border.outline_thickness,
            self.style.border.color,
            self.style.border.outline_color,
        );

        let pad = Vec2::splat(self.style.border.padding());
        renderer.add_rect_filled_multicolor(
            base.top_left + pad,
            base.size - pad * 2.0,
            self.style.background,
        );

        renderer.add_text(
            Vec2::new(base.top_left.x, base.top_left.y - self.style.text.px - 2.0),
            &base.label,
            self.style.text.px,
            self.style.text.color,
            TextAlign::Left,
        );
        renderer.add_text(
            Vec2::new(
                base.top_left.x + pad.x + 2.0,
                base.top_left.y + (base.size.y - self.style.buffer_text.px) / 2.0,
            ),
            &self.buffer,
            self.style.buffer_text.px,
            self.style.buffer_text.color,
            TextAlign::Left,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_until_full_and_backspaces() {
        let mut entry = TextEntry::new(Vec2::zero(), Vec2::new(120.0, 20.0), "name", 3);
        for c in "abcd".chars() {
            entry.on_char(c);
        }
        assert_eq!(entry.buffer(), "abc");

        entry.on_char(BACKSPACE);
        assert_eq!(entry.buffer(), "ab");

        // Backspacing an empty buffer is a no-op.
        entry.on_char(BACKSPACE);
        entry.on_char(BACKSPACE);
        entry.on_char(BACKSPACE);
        assert_eq!(entry.buffer(), "");
    }
}
