use ember_engine::coords::Vec2;
use ember_engine::render::{Renderer, TextAlign};

use crate::style::ComboBoxStyle;
use crate::widget::WidgetBase;

/// Framed grouping region with a centered label.
pub struct ComboBox {
    pub base: WidgetBase,
    pub style: ComboBoxStyle,
}

impl ComboBox {
    pub fn new(top_left: Vec2, size: Vec2, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(top_left, size, label),
            style: ComboBoxStyle::default(),
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
            Vec2::new(base.top_left.x + base.size.x / 2.0, base.top_left.y + pad.y + 2.0),
            &base.label,
            self.style.text.px,
            self.style.text.color,
            TextAlign::Center,
        );
    }
}
