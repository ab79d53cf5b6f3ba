mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};

use crate::coords::Vec2;

/// Text measurement seam for layout-dependent consumers.
///
/// Widgets size themselves from label measurements; taking this trait
/// instead of the renderer keeps their layout testable without a GPU.
pub trait TextMeasure {
    /// Returns the `(width, height)` of `text` laid out at `px` pixels.
    fn measure_text(&self, text: &str, px: f32) -> Vec2;
}
