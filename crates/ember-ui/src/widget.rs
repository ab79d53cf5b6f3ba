use ember_engine::coords::Vec2;
use ember_engine::render::Renderer;

use crate::widgets::{Button, Checkbox, ColorPicker, ComboBox, Slider, TextEntry};

/// Pointer interaction state shared by every widget.
///
/// Transitions: idle, then `clicking` from pointer-down inside the widget
/// (recording `click_origin` relative to the widget), then `clicked` from
/// pointer-up while clicking. Pointer-up elsewhere clears `clicking`
/// without ever setting `clicked`.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    pub clicked: bool,
    pub clicking: bool,
    pub hovering: bool,
    pub click_origin: Vec2,
}

impl MouseState {
    pub fn begin_click(&mut self, relative: Vec2) {
        self.clicking = true;
        self.clicked = false;
        self.hovering = false;
        self.click_origin = relative;
    }

    /// Completes a click. Returns true when the widget was mid-click, which
    /// is the condition action widgets key their activation on. The pointer
    /// is still over the widget on release, so it is hovering again.
    pub fn end_click(&mut self) -> bool {
        if self.clicking {
            self.clicking = false;
            self.clicked = true;
            self.hovering = true;
            true
        } else {
            false
        }
    }
}

/// Position, size, label, and interaction state common to all widgets.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    pub top_left: Vec2,
    pub size: Vec2,
    pub label: String,
    pub active: bool,
    pub mouse: MouseState,
}

impl WidgetBase {
    pub fn new(top_left: Vec2, size: Vec2, label: impl Into<String>) -> Self {
        Self {
            top_left,
            size,
            label: label.into(),
            active: true,
            mouse: MouseState::default(),
        }
    }

    /// Inclusive bounds test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.top_left.x + self.size.x
            && point.y >= self.top_left.y
            && point.y <= self.top_left.y + self.size.y
    }

    pub fn relative(&self, point: Vec2) -> Vec2 {
        point - self.top_left
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        let relative = self.relative(pos);
        self.mouse.begin_click(relative);
    }

    /// Move-mode reposition: the widget follows the pointer, keeping the
    /// grab point under it.
    pub fn reposition(&mut self, pos: Vec2) {
        self.top_left = pos - self.mouse.click_origin;
    }
}

/// The widget vocabulary as a closed tagged union.
///
/// Dispatch is a `match` per operation; per-kind behavior lives on the
/// variant structs in [`crate::widgets`].
pub enum Widget {
    Checkbox(Checkbox),
    Button(Button),
    Slider(Slider),
    TextEntry(TextEntry),
    ComboBox(ComboBox),
    ColorPicker(ColorPicker),
}

impl Widget {
    pub fn base(&self) -> &WidgetBase {
        match self {
            Widget::Checkbox(w) => &w.base,
            Widget::Button(w) => &w.base,
            Widget::Slider(w) => &w.base,
            Widget::TextEntry(w) => &w.base,
            Widget::ComboBox(w) => &w.base,
            Widget::ColorPicker(w) => &w.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut WidgetBase {
        match self {
            Widget::Checkbox(w) => &mut w.base,
            Widget::Button(w) => &mut w.base,
            Widget::Slider(w) => &mut w.base,
            Widget::TextEntry(w) => &mut w.base,
            Widget::ComboBox(w) => &mut w.base,
            Widget::ColorPicker(w) => &mut w.base,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.base().contains(point)
    }

    pub fn is_clicking(&self) -> bool {
        self.base().mouse.clicking
    }

    pub fn draw(&mut self, renderer: &mut Renderer) {
        match self {
            Widget::Checkbox(w) => w.draw(renderer),
            Widget::Button(w) => w.draw(renderer),
            Widget::Slider(w) => w.draw(renderer),
            Widget::TextEntry(w) => w.draw(renderer),
            Widget::ComboBox(w) => w.draw(renderer),
            Widget::ColorPicker(w) => w.draw(renderer),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        match self {
            Widget::Slider(w) => w.on_pointer_down(pos),
            Widget::ColorPicker(w) => w.on_pointer_down(pos),
            _ => self.base_mut().on_pointer_down(pos),
        }
    }

    pub fn on_pointer_up(&mut self, _pos: Vec2) {
        match self {
            Widget::Checkbox(w) => w.on_pointer_up(),
            Widget::ColorPicker(w) => w.on_pointer_up(),
            _ => {
                self.base_mut().mouse.end_click();
            }
        }
    }

    /// Pointer motion while this widget is clicking and the list is not in
    /// move mode.
    pub fn on_drag(&mut self, pos: Vec2) {
        match self {
            Widget::Slider(w) => w.on_drag(pos),
            Widget::ColorPicker(w) => w.on_drag(pos),
            _ => {}
        }
    }

    /// Pointer motion while clicking in move mode: reposition instead of
    /// operating.
    pub fn on_move(&mut self, pos: Vec2) {
        self.base_mut().reposition(pos);
    }

    pub fn on_char(&mut self, c: char) {
        if let Widget::TextEntry(w) = self {
            w.on_char(c);
        }
    }

    /// Clears an in-flight click without registering it; used when the
    /// pointer is released outside the widget.
    pub fn clear_clicking(&mut self) {
        self.base_mut().mouse.clicking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let base = WidgetBase::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0), "w");
        assert!(base.contains(Vec2::new(10.0, 10.0)));
        assert!(base.contains(Vec2::new(30.0, 30.0)));
        assert!(!base.contains(Vec2::new(30.1, 30.0)));
    }

    #[test]
    fn click_state_machine() {
        let mut base = WidgetBase::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0), "w");
        base.on_pointer_down(Vec2::new(15.0, 12.0));
        assert!(base.mouse.clicking);
        assert!(!base.mouse.clicked);
        assert!(!base.mouse.hovering);
        assert_eq!(base.mouse.click_origin, Vec2::new(5.0, 2.0));

        assert!(base.mouse.end_click());
        assert!(!base.mouse.clicking);
        assert!(base.mouse.clicked);
        assert!(base.mouse.hovering);

        // A second release without a press registers nothing.
        assert!(!base.mouse.end_click());

        // A fresh press clears the hover latched by the release.
        base.on_pointer_down(Vec2::new(15.0, 12.0));
        assert!(!base.mouse.hovering);
    }

    #[test]
    fn reposition_keeps_grab_point() {
        let mut base = WidgetBase::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0), "w");
        base.on_pointer_down(Vec2::new(15.0, 12.0));
        base.reposition(Vec2::new(100.0, 50.0));
        assert_eq!(base.top_left, Vec2::new(95.0, 48.0));
    }
}
