use std::cell::Cell;
use std::rc::Rc;

use ember_engine::coords::Vec2;
use ember_engine::render::{Renderer, TextAlign};

use crate::style::CheckboxStyle;
use crate::widget::WidgetBase;

/// Toggles its bound value on pointer-up while mid-click.
pub struct Checkbox {
    pub base: WidgetBase,
    pub style: CheckboxStyle,
    value: Rc<Cell<bool>>,
}

impl Checkbox {
    pub fn new(
        top_left: Vec2,
        size: Vec2,
        label: impl Into<String>,
        value: Rc<Cell<bool>>,
    ) -> Self {
        Self {
            base: WidgetBase::new(top_left, size, label),
            style: CheckboxStyle::default(),
            value,
        }
    }

    pub fn is_set(&self) -> bool {
        self.value.get()
    }

    pub fn on_pointer_up(&mut self) {
        if self.base.mouse.end_click() {
            self.value.set(!self.value.get());
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

        if self.value.get() {
            let inset = pad + Vec2::splat(self.style.gap);
            renderer.add_rect_filled_multicolor(
                base.top_left + inset,
                base.size - inset * 2.0,
                self.style.check,
            );
        }

        // Label sits to the right of the box.
        renderer.add_text(
            Vec2::new(
                base.top_left.x + base.size.x + 8.0,
                base.top_left.y + (base.size.y - self.style.text.px) / 2.0,
            ),
            &base.label,
            self.style.text.px,
            self.style.text.color,
            TextAlign::Left,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox(value: Rc<Cell<bool>>) -> Checkbox {
        Checkbox::new(Vec2::zero(), Vec2::splat(16.0), "toggle", value)
    }

    #[test]
    fn toggles_only_when_mid_click() {
        let value = Rc::new(Cell::new(false));
        let mut cb = checkbox(value.clone());

        // Release without a press changes nothing.
        cb.on_pointer_up();
        assert!(!value.get());

        cb.base.on_pointer_down(Vec2::new(4.0, 4.0));
        cb.on_pointer_up();
        assert!(value.get());

        cb.base.on_pointer_down(Vec2::new(4.0, 4.0));
        cb.on_pointer_up();
        assert!(!value.get());
    }
}
