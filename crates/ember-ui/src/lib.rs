//! Ember widget layer.
//!
//! Immediate-mode widgets drawn through the engine's primitive emitters.
//! Widgets form a tagged union ([`widget::Widget`]) over per-kind structs
//! sharing a [`widget::WidgetBase`]; a [`list::WidgetList`] owns them and
//! feeds them queued input, one event per draw pass.

pub mod list;
pub mod style;
pub mod widget;
pub mod widgets;

pub use list::WidgetList;
pub use widget::{MouseState, Widget, WidgetBase};
pub use widgets::{Button, Checkbox, ColorPicker, ComboBox, Slider, SliderBinding, TextEntry};
