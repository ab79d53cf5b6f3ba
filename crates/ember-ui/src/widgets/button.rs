use ember_engine::coords::Vec2;
use ember_engine::render::{Renderer, TextAlign};

use crate::style::ButtonStyle;
use crate::widget::WidgetBase;

/// Push button; a completed click latches until read with
/// [`Button::take_click`].
pub struct Button {
    pub base: WidgetBase,
    pub style: ButtonStyle,
}

impl Button {
    pub fn new(top_left: Vec2, size: Vec2, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(top_left, size, label),
            style: ButtonStyle::default(),
        }
    }

    /// Returns whether the button has been clicked since the last call,
    /// clearing the latch.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.base.mouse.clicked)
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
            Vec2::new(
                base.top_left.x + base.size.x / 2.0,
                base.top_left.y + (base.size.y - self.style.text.px) / 2.0,
            ),
            &base.label,
            self.style.text.px,
            self.style.text.color,
            TextAlign::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_click_clears_the_latch() {
        let mut button = Button::new(Vec2::zero(), Vec2::new(80.0, 24.0), "ok");
        button.base.on_pointer_down(Vec2::new(5.0, 5.0));
        button.base.mouse.end_click();
        assert!(button.take_click());
        assert!(!button.take_click());
    }
}
