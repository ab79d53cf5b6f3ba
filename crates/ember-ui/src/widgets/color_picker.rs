use std::cell::Cell;
use std::rc::Rc;

use ember_engine::coords::Vec2;
use ember_engine::paint::{Color, CornerColors};
use ember_engine::render::{Renderer, TextAlign};
use ember_engine::text::TextMeasure;

use crate::style::ColorPickerStyle;
use crate::widget::WidgetBase;

const CHANNELS: usize = 4; // r, g, b, a
const CHECKER_CELL: f32 = 6.0;

/// RGBA editor: a preview swatch plus one horizontal strip per channel.
///
/// A pointer-down inside a strip captures that channel for the whole drag;
/// the pointer may leave the strip (or the widget) and still only that
/// channel updates, clamped to `[0, 1]`. Release clears the capture.
pub struct ColorPicker {
    pub base: WidgetBase,
    color: Rc<Cell<Color>>,
    style: ColorPickerStyle,
    active_strip: Option<usize>,

    // Layout derived from the style and the measured label; recomputed when
    // the style changes.
    header_size: Vec2,
    padding: f32,
    strip_size: Vec2,
}

impl ColorPicker {
    pub fn new(
        top_left: Vec2,
        size: Vec2,
        label: impl Into<String>,
        color: Rc<Cell<Color>>,
        measure: &dyn TextMeasure,
    ) -> Self {
        let mut picker = Self {
            base: WidgetBase::new(top_left, size, label),
            color,
            style: ColorPickerStyle::default(),
            active_strip: None,
            header_size: Vec2::zero(),
            padding: 0.0,
            strip_size: Vec2::zero(),
        };
        picker.layout(measure);
        picker
    }

    pub fn style(&self) -> &ColorPickerStyle {
        &self.style
    }

    /// Replaces the style and recomputes the derived layout.
    pub fn set_style(&mut self, style: ColorPickerStyle, measure: &dyn TextMeasure) {
        self.style = style;
        self.layout(measure);
    }

    fn layout(&mut self, measure: &dyn TextMeasure) {
        self.padding = self.style.border.padding();
        self.header_size = measure.measure_text(&self.base.label, self.style.text.px);

        let inner_w = self.base.size.x - 2.0 * self.padding;
        let strips_h = self.base.size.y
            - 2.0 * self.padding
            - self.header_size.y
            - self.style.strip_gap;
        let strip_h =
            (strips_h - (CHANNELS as f32 - 1.0) * self.style.strip_gap) / CHANNELS as f32;
        self.strip_size = Vec2::new(inner_w.max(0.0), strip_h.max(0.0));
    }

    fn strip_origin(&self, index: usize) -> Vec2 {
        let strips_top = self.base.top_left.y
            + self.padding
            + self.header_size.y
            + self.style.strip_gap;
        Vec2::new(
            self.base.top_left.x + self.padding,
            strips_top + index as f32 * (self.strip_size.y + self.style.strip_gap),
        )
    }

    fn strip_at(&self, pos: Vec2) -> Option<usize> {
        (0..CHANNELS).find(|&i| {
            let origin = self.strip_origin(i);
            pos.x >= origin.x
                && pos.x <= origin.x + self.strip_size.x
                && pos.y >= origin.y
                && pos.y <= origin.y + self.strip_size.y
        })
    }

    fn apply(&mut self, channel: usize, x: f32) {
        let left = self.strip_origin(channel).x;
        let ratio = (x - left).clamp(0.0, self.strip_size.x) / self.strip_size.x;
        let mut color = self.color.get();
        color.set_channel(channel, ratio);
        self.color.set(color);
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.base.on_pointer_down(pos);
        if let Some(strip) = self.strip_at(pos) {
            self.active_strip = Some(strip);
            self.apply(strip, pos.x);
        }
    }

    pub fn on_drag(&mut self, pos: Vec2) {
        // The strip grabbed at pointer-down stays captured for the whole
        // drag; only a drag that started on no strip may still latch one.
        let strip = match self.active_strip {
            Some(strip) => strip,
            None => match self.strip_at(pos) {
                Some(strip) => {
                    self.active_strip = Some(strip);
                    strip
                }
                None => return,
            },
        };
        self.apply(strip, pos.x);
    }

    pub fn on_pointer_up(&mut self) {
        self.base.mouse.end_click();
        self.active_strip = None;
    }

    fn strip_tint(&self, channel: usize) -> Color {
        match channel {
            0 => Color::opaque(0.85, 0.2, 0.2),
            1 => Color::opaque(0.2, 0.8, 0.25),
            2 => Color::opaque(0.25, 0.4, 0.9),
            _ => {
                // Alpha reads as gray, lifted so a zero alpha is still visible.
                let v = self.color.get().a * 0.7 + 0.3;
                Color::opaque(v, v, v)
            }
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

        let pad = Vec2::splat(self.padding);
        renderer.add_rect_filled_multicolor(
            base.top_left + pad,
            base.size - pad * 2.0,
            self.style.background,
        );

        renderer.add_text(
            base.top_left + pad,
            &base.label,
            self.style.text.px,
            self.style.text.color,
            TextAlign::Left,
        );

        self.draw_preview(renderer);

        for channel in 0..CHANNELS {
            let origin = self.strip_origin(channel);
            renderer.add_frame(
                origin,
                self.strip_size,
                self.style.strip_border.thickness,
                self.style.strip_border.color,
            );
            let fill = self.strip_size.x * self.color.get().channel(channel).clamp(0.0, 1.0);
            if fill > 0.0 {
                renderer.add_rect_filled(
                    origin,
                    Vec2::new(fill, self.strip_size.y),
                    self.strip_tint(channel),
                );
            }
        }
    }

    /// Swatch over a checker pattern so the alpha channel reads visually.
    fn draw_preview(&self, renderer: &mut Renderer) {
        let side = self.header_size.y;
        if side <= 0.0 {
            return;
        }
        let origin = Vec2::new(
            self.base.top_left.x + self.base.size.x - self.padding - side,
            self.base.top_left.y + self.padding,
        );

        renderer.add_rect_filled(origin, Vec2::splat(side), Color::opaque(0.85, 0.85, 0.85));
        let dark = Color::opaque(0.55, 0.55, 0.55);
        let cells = (side / CHECKER_CELL).ceil() as usize;
        for row in 0..cells {
            for col in 0..cells {
                if (row + col) % 2 == 0 {
                    continue;
                }
                let cell_origin =
                    origin + Vec2::new(col as f32 * CHECKER_CELL, row as f32 * CHECKER_CELL);
                let cell = Vec2::new(
                    CHECKER_CELL.min(side - col as f32 * CHECKER_CELL),
                    CHECKER_CELL.min(side - row as f32 * CHECKER_CELL),
                );
                renderer.add_rect_filled(cell_origin, cell, dark);
            }
        }

        renderer.add_rect_filled_multicolor(
            origin,
            Vec2::splat(side),
            CornerColors::uniform(self.color.get()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMeasure(Vec2);

    impl TextMeasure for FixedMeasure {
        fn measure_text(&self, _text: &str, _px: f32) -> Vec2 {
            self.0
        }
    }

    fn picker(color: Rc<Cell<Color>>) -> ColorPicker {
        ColorPicker::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(110.0, 120.0),
            "paint",
            color,
            &FixedMeasure(Vec2::new(40.0, 14.0)),
        )
    }

    #[test]
    fn strips_stack_below_the_header() {
        let picker = picker(Rc::new(Cell::new(Color::transparent())));
        let first = picker.strip_origin(0);
        let second = picker.strip_origin(1);
        assert!(first.y > picker.base.top_left.y + 14.0);
        assert_eq!(second.y - first.y, picker.strip_size.y + picker.style.strip_gap);
        assert_eq!(picker.strip_at(first + Vec2::splat(1.0)), Some(0));
    }

    #[test]
    fn drag_stays_on_the_captured_channel() {
        let color = Rc::new(Cell::new(Color::transparent()));
        let mut picker = picker(color.clone());

        let red_strip = picker.strip_origin(0) + Vec2::new(picker.strip_size.x / 2.0, 1.0);
        picker.on_pointer_down(red_strip);
        assert_eq!(color.get().r, 0.5);

        // Drag down into the green strip's rows: still channel 0.
        let over_green = picker.strip_origin(1) + Vec2::new(picker.strip_size.x, 1.0);
        picker.on_drag(over_green);
        assert_eq!(color.get().r, 1.0);
        assert_eq!(color.get().g, 0.0);

        // After release, a fresh press latches the green strip.
        picker.on_pointer_up();
        picker.on_pointer_down(over_green);
        assert_eq!(color.get().g, 1.0);
    }

    #[test]
    fn drag_clamps_outside_the_strip() {
        let color = Rc::new(Cell::new(Color::transparent()));
        let mut picker = picker(color.clone());
        picker.on_pointer_down(picker.strip_origin(2) + Vec2::splat(1.0));
        picker.on_drag(Vec2::new(-500.0, 0.0));
        assert_eq!(color.get().b, 0.0);
        picker.on_drag(Vec2::new(5000.0, 0.0));
        assert_eq!(color.get().b, 1.0);
    }

    #[test]
    fn drag_that_started_nowhere_can_latch_a_strip() {
        let color = Rc::new(Cell::new(Color::transparent()));
        let mut picker = picker(color.clone());
        // Press in the header: no strip captured.
        picker.on_pointer_down(picker.base.top_left + Vec2::splat(3.0));
        picker.on_drag(picker.strip_origin(3) + Vec2::new(picker.strip_size.x / 2.0, 1.0));
        assert_eq!(color.get().a, 0.5);
    }
}
