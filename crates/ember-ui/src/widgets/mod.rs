//! Per-kind widget structs; shared state and dispatch live in
//! [`crate::widget`].

mod button;
mod checkbox;
mod color_picker;
mod combo_box;
mod slider;
mod text_entry;

pub use button::Button;
pub use checkbox::Checkbox;
pub use color_picker::ColorPicker;
pub use combo_box::ComboBox;
pub use slider::{Slider, SliderBinding};
pub use text_entry::TextEntry;
