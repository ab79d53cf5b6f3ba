/// Straight-alpha RGBA color with channels nominally in `[0, 1]`.
///
/// Blending with the alpha channel happens on the GPU; nothing here is
/// premultiplied. Out-of-range channels are accepted and clamped only where
/// an API needs bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from straight sRGB bytes (`0..=255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Reads a channel by index: 0 = r, 1 = g, 2 = b, 3 = a.
    ///
    /// The color picker addresses its four strips this way.
    #[inline]
    pub fn channel(self, index: usize) -> f32 {
        match index {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            3 => self.a,
            _ => panic!("color channel index out of range: {index}"),
        }
    }

    /// Writes a channel by index: 0 = r, 1 = g, 2 = b, 3 = a.
    #[inline]
    pub fn set_channel(&mut self, index: usize, value: f32) {
        match index {
            0 => self.r = value,
            1 => self.g = value,
            2 => self.b = value,
            3 => self.a = value,
            _ => panic!("color channel index out of range: {index}"),
        }
    }

    /// Packs into a little-endian `0xAABBGGRR` word, the byte order some
    /// overlay text APIs expect. Channels are clamped to `[0, 1]` first.
    #[inline]
    pub fn to_abgr(self) -> u32 {
        let b = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (b(self.a) << 24) | (b(self.b) << 16) | (b(self.g) << 8) | b(self.r)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }
}

/// Per-corner colors for gradient-filled rectangles.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerColors {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_left: Color,
    pub bottom_right: Color,
}

impl CornerColors {
    #[inline]
    pub const fn uniform(color: Color) -> Self {
        Self {
            top_left: color,
            top_right: color,
            bottom_left: color,
            bottom_right: color,
        }
    }

    /// Top-to-bottom vertical gradient.
    #[inline]
    pub const fn vertical(top: Color, bottom: Color) -> Self {
        Self {
            top_left: top,
            top_right: top,
            bottom_left: bottom,
            bottom_right: bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_round_trip() {
        let mut c = Color::new(0.1, 0.2, 0.3, 0.4);
        for i in 0..4 {
            c.set_channel(i, 0.5 + i as f32 * 0.1);
        }
        assert_eq!(c, Color::new(0.5, 0.6, 0.7, 0.8));
        assert_eq!(c.channel(2), 0.7);
    }

    #[test]
    fn abgr_packing() {
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).to_abgr(), 0xFF00_00FF);
        assert_eq!(Color::new(0.0, 1.0, 0.0, 0.0).to_abgr(), 0x0000_FF00);
        // Out-of-range channels clamp instead of wrapping.
        assert_eq!(Color::new(2.0, -1.0, 0.0, 1.0).to_abgr(), 0xFF00_00FF);
    }
}
