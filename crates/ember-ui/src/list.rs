use std::collections::VecDeque;

use ember_engine::coords::Vec2;
use ember_engine::input::InputEvent;
use ember_engine::paint::CornerColors;
use ember_engine::render::Renderer;

use crate::widget::Widget;

/// Owns a set of widgets and their pending input.
///
/// Input arrives through [`push_input`](Self::push_input) in FIFO order and
/// is consumed at exactly one event per draw pass, so a burst of events
/// drains across the following frames in arrival order.
pub struct WidgetList {
    pub top_left: Vec2,
    pub size: Vec2,
    /// Gradient drawn under all widgets when set.
    pub background: Option<CornerColors>,
    active: bool,
    move_mode: bool,
    widgets: Vec<Widget>,
    queue: VecDeque<InputEvent>,
}

impl WidgetList {
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self {
            top_left,
            size,
            background: None,
            active: true,
            move_mode: false,
            widgets: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deactivating also drops any queued input.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.queue.clear();
        }
    }

    /// While move mode is on, dragging a widget repositions it instead of
    /// operating it.
    pub fn move_mode(&self) -> bool {
        self.move_mode
    }

    pub fn set_move_mode(&mut self, on: bool) {
        self.move_mode = on;
    }

    pub fn toggle_move_mode(&mut self) {
        self.move_mode = !self.move_mode;
    }

    pub fn add_widget(&mut self, widget: Widget) -> usize {
        self.widgets.push(widget);
        self.widgets.len() - 1
    }

    pub fn remove_widget(&mut self, index: usize) -> Option<Widget> {
        if index < self.widgets.len() {
            Some(self.widgets.remove(index))
        } else {
            log::warn!("remove_widget: index {index} out of range");
            None
        }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    /// Enqueues an input event. Ignored while the list is inactive.
    pub fn push_input(&mut self, event: InputEvent) {
        if !self.active {
            return;
        }
        self.queue.push_back(event);
    }

    /// Drains and dispatches at most one queued event.
    pub fn process_next_input(&mut self) {
        let Some(event) = self.queue.pop_front() else {
            return;
        };

        match event {
            InputEvent::PointerMoved(pos) => {
                for widget in &mut self.widgets {
                    if !widget.is_clicking() {
                        continue;
                    }
                    if self.move_mode {
                        widget.on_move(pos);
                    } else {
                        widget.on_drag(pos);
                    }
                }
            }
            InputEvent::PointerDown(pos) => {
                for widget in &mut self.widgets {
                    if widget.contains(pos) {
                        widget.on_pointer_down(pos);
                    }
                }
            }
            InputEvent::PointerUp(pos) => {
                for widget in &mut self.widgets {
                    if widget.contains(pos) {
                        widget.on_pointer_up(pos);
                    } else {
                        widget.clear_clicking();
                    }
                }
            }
            InputEvent::Char(c) => {
                for widget in &mut self.widgets {
                    widget.on_char(c);
                }
            }
        }
    }

    /// One UI pass: consume one input event, then draw the background and
    /// every widget. No-op while inactive.
    pub fn draw_widgets(&mut self, renderer: &mut Renderer) {
        if !self.active {
            return;
        }

        self.process_next_input();

        if let Some(background) = self.background {
            renderer.add_rect_filled_multicolor(self.top_left, self.size, background);
        }

        for widget in &mut self.widgets {
            widget.draw(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::widgets::{Checkbox, Slider, SliderBinding};

    fn list_with_checkbox() -> (WidgetList, Rc<Cell<bool>>) {
        let mut list = WidgetList::new(Vec2::zero(), Vec2::new(400.0, 300.0));
        let value = Rc::new(Cell::new(false));
        list.add_widget(Widget::Checkbox(Checkbox::new(
            Vec2::new(10.0, 10.0),
            Vec2::splat(16.0),
            "check",
            value.clone(),
        )));
        (list, value)
    }

    #[test]
    fn one_event_per_pass() {
        let (mut list, value) = list_with_checkbox();
        let inside = Vec2::new(14.0, 14.0);
        list.push_input(InputEvent::PointerDown(inside));
        list.push_input(InputEvent::PointerUp(inside));

        list.process_next_input();
        assert!(!value.get(), "click completes only after the second pass");
        list.process_next_input();
        assert!(value.get());
    }

    #[test]
    fn inactive_list_ignores_input() {
        let (mut list, value) = list_with_checkbox();
        list.set_active(false);
        let inside = Vec2::new(14.0, 14.0);
        list.push_input(InputEvent::PointerDown(inside));
        list.push_input(InputEvent::PointerUp(inside));
        list.set_active(true);
        list.process_next_input();
        list.process_next_input();
        assert!(!value.get());
    }

    #[test]
    fn release_outside_cancels_the_click() {
        let (mut list, value) = list_with_checkbox();
        list.push_input(InputEvent::PointerDown(Vec2::new(14.0, 14.0)));
        list.push_input(InputEvent::PointerUp(Vec2::new(200.0, 200.0)));
        list.process_next_input();
        list.process_next_input();
        assert!(!value.get());
        assert!(!list.widgets()[0].is_clicking());
    }

    #[test]
    fn move_mode_repositions_instead_of_dragging() {
        let mut list = WidgetList::new(Vec2::zero(), Vec2::new(400.0, 300.0));
        let value = Rc::new(Cell::new(0.0f32));
        list.add_widget(Widget::Slider(Slider::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(100.0, 16.0),
            "s",
            SliderBinding::Float {
                value: value.clone(),
                min: 0.0,
                max: 1.0,
            },
        )));
        list.set_move_mode(true);

        list.push_input(InputEvent::PointerDown(Vec2::new(10.0, 10.0)));
        list.push_input(InputEvent::PointerMoved(Vec2::new(60.0, 40.0)));
        list.process_next_input();
        let value_after_down = value.get();
        list.process_next_input();

        assert_eq!(list.widgets()[0].base().top_left, Vec2::new(60.0, 40.0));
        // The drag moved the widget, not its value.
        assert_eq!(value.get(), value_after_down);
    }
}
