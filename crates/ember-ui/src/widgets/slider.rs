use std::cell::Cell;
use std::rc::Rc;

use ember_engine::coords::Vec2;
use ember_engine::render::{Renderer, TextAlign};

use crate::style::SliderStyle;
use crate::widget::WidgetBase;

/// Value binding of a [`Slider`].
///
/// Integer sliders round to the nearest step; float sliders map the pointer
/// ratio directly onto the range.
pub enum SliderBinding {
    Float {
        value: Rc<Cell<f32>>,
        min: f32,
        max: f32,
    },
    Int {
        value: Rc<Cell<i32>>,
        min: i32,
        max: i32,
    },
}

/// Horizontal drag slider. Both the initial press and every drag sample
/// reposition the value from the pointer's x.
pub struct Slider {
    pub base: WidgetBase,
    pub style: SliderStyle,
    binding: SliderBinding,
}

impl Slider {
    pub fn new(
        top_left: Vec2,
        size: Vec2,
        label: impl Into<String>,
        binding: SliderBinding,
    ) -> Self {
        Self {
            base: WidgetBase::new(top_left, size, label),
            style: SliderStyle::default(),
            binding,
        }
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.base.on_pointer_down(pos);
        self.apply(pos.x);
    }

    pub fn on_drag(&mut self, pos: Vec2) {
        self.apply(pos.x);
    }

    /// Maps pointer x onto the bound range:
    /// `ratio = clamp(x - left, 0, width) / width`, then
    /// `min + ratio * (max - min)`.
    fn apply(&mut self, x: f32) {
        let ratio = (x - self.base.top_left.x).clamp(0.0, self.base.size.x) / self.base.size.x;
        match &self.binding {
            SliderBinding::Float { value, min, max } => {
                value.set(min + ratio * (max - min));
            }
            SliderBinding::Int { value, min, max } => {
                value.set((*min as f32 + ratio * (max - min) as f32).round() as i32);
            }
        }
    }

    /// Current value's position in the range, for the fill width.
    pub fn ratio(&self) -> f32 {
        let ratio = match &self.binding {
            SliderBinding::Float { value, min, max } => {
                if max == min {
                    0.0
                } else {
                    (value.get() - min) / (max - min)
                }
            }
            SliderBinding::Int { value, min, max } => {
                if max == min {
                    0.0
                } else {
                    (value.get() - min) as f32 / (max - min) as f32
                }
            }
        };
        ratio.clamp(0.0, 1.0)
    }

    fn value_text(&self) -> String {
        match &self.binding {
            SliderBinding::Float { value, .. } => format!("{:.2}", value.get()),
            SliderBinding::Int { value, .. } => value.get().to_string(),
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
        let inner_origin = base.top_left + pad;
        let inner_size = base.size - pad * 2.0;
        renderer.add_rect_filled_multicolor(inner_origin, inner_size, self.style.background);

        let fill_width = inner_size.x * self.ratio();
        if fill_width > 0.0 {
            renderer.add_rect_filled_multicolor(
                inner_origin,
                Vec2::new(fill_width, inner_size.y),
                self.style.fill,
            );
        }

        // Label above, current value centered in the track.
        renderer.add_text(
            Vec2::new(base.top_left.x, base.top_left.y - self.style.text.px - 2.0),
            &base.label,
            self.style.text.px,
            self.style.text.color,
            TextAlign::Left,
        );
        renderer.add_text(
            Vec2::new(
                base.top_left.x + base.size.x / 2.0,
                base.top_left.y + (base.size.y - self.style.text.px) / 2.0,
            ),
            &self.value_text(),
            self.style.text.px,
            self.style.text.color,
            TextAlign::Center,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_slider(min: f32, max: f32, width: f32) -> (Slider, Rc<Cell<f32>>) {
        let value = Rc::new(Cell::new(min));
        let slider = Slider::new(
            Vec2::zero(),
            Vec2::new(width, 16.0),
            "s",
            SliderBinding::Float {
                value: value.clone(),
                min,
                max,
            },
        );
        (slider, value)
    }

    #[test]
    fn midpoint_maps_to_range_midpoint() {
        let (mut slider, value) = float_slider(0.0, 20.0, 200.0);
        slider.on_pointer_down(Vec2::new(100.0, 8.0));
        assert_eq!(value.get(), 10.0);
    }

    #[test]
    fn pointer_outside_track_clamps() {
        let (mut slider, value) = float_slider(0.0, 20.0, 200.0);
        slider.on_drag(Vec2::new(-50.0, 8.0));
        assert_eq!(value.get(), 0.0);
        slider.on_drag(Vec2::new(900.0, 8.0));
        assert_eq!(value.get(), 20.0);
    }

    #[test]
    fn integer_slider_rounds() {
        let value = Rc::new(Cell::new(0));
        let mut slider = Slider::new(
            Vec2::zero(),
            Vec2::new(100.0, 16.0),
            "i",
            SliderBinding::Int {
                value: value.clone(),
                min: 0,
                max: 3,
            },
        );
        slider.on_drag(Vec2::new(40.0, 8.0));
        // ratio 0.4 * 3 = 1.2 rounds to 1
        assert_eq!(value.get(), 1);
        slider.on_drag(Vec2::new(55.0, 8.0));
        // ratio 0.55 * 3 = 1.65 rounds to 2
        assert_eq!(value.get(), 2);
    }

    #[test]
    fn ratio_reflects_bound_value() {
        let (slider, value) = float_slider(10.0, 30.0, 100.0);
        value.set(20.0);
        assert_eq!(slider.ratio(), 0.5);
    }
}
