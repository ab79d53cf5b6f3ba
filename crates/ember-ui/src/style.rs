//! Per-widget visual styles with usable dark-theme defaults.

use ember_engine::paint::{Color, CornerColors};

/// Label and value text styling.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub px: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            px: 14.0,
            color: Color::opaque(0.92, 0.92, 0.92),
        }
    }
}

/// Border styling: the main frame plus the outline drawn on both its edges.
#[derive(Debug, Clone)]
pub struct BorderStyle {
    pub thickness: f32,
    pub outline_thickness: f32,
    pub color: Color,
    pub outline_color: Color,
}

impl BorderStyle {
    /// Total inset the border consumes on one side.
    pub fn padding(&self) -> f32 {
        2.0 * (self.thickness + self.outline_thickness)
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            outline_thickness: 1.0,
            color: Color::opaque(0.35, 0.35, 0.4),
            outline_color: Color::opaque(0.1, 0.1, 0.12),
        }
    }
}

fn panel_background() -> CornerColors {
    CornerColors::vertical(Color::opaque(0.16, 0.16, 0.19), Color::opaque(0.12, 0.12, 0.14))
}

fn accent_fill() -> CornerColors {
    CornerColors::vertical(Color::opaque(0.25, 0.5, 0.85), Color::opaque(0.18, 0.38, 0.68))
}

#[derive(Debug, Clone)]
pub struct CheckboxStyle {
    pub text: TextStyle,
    pub border: BorderStyle,
    pub background: CornerColors,
    pub check: CornerColors,
    /// Inset of the check mark from the border.
    pub gap: f32,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            border: BorderStyle::default(),
            background: panel_background(),
            check: accent_fill(),
            gap: 3.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub text: TextStyle,
    pub border: BorderStyle,
    pub background: CornerColors,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            border: BorderStyle::default(),
            background: CornerColors::vertical(
                Color::opaque(0.22, 0.22, 0.28),
                Color::opaque(0.15, 0.15, 0.19),
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SliderStyle {
    pub text: TextStyle,
    pub border: BorderStyle,
    pub background: CornerColors,
    pub fill: CornerColors,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            border: BorderStyle::default(),
            background: panel_background(),
            fill: accent_fill(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextEntryStyle {
    pub text: TextStyle,
    pub buffer_text: TextStyle,
    pub border: BorderStyle,
    pub background: CornerColors,
}

impl Default for TextEntryStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            buffer_text: TextStyle {
                px: 14.0,
                color: Color::opaque(0.8, 0.85, 0.8),
            },
            border: BorderStyle::default(),
            background: panel_background(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComboBoxStyle {
    pub text: TextStyle,
    pub border: BorderStyle,
    pub background: CornerColors,
}

impl Default for ComboBoxStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            border: BorderStyle::default(),
            background: panel_background(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColorPickerStyle {
    pub text: TextStyle,
    pub border: BorderStyle,
    pub background: CornerColors,
    /// Border drawn around each channel strip.
    pub strip_border: BorderStyle,
    /// Vertical gap between channel strips.
    pub strip_gap: f32,
}

impl Default for ColorPickerStyle {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            border: BorderStyle::default(),
            background: panel_background(),
            strip_border: BorderStyle {
                thickness: 1.0,
                outline_thickness: 0.0,
                ..BorderStyle::default()
            },
            strip_gap: 4.0,
        }
    }
}
