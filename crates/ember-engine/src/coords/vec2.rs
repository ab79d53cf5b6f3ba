use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in screen pixels. Y grows downward.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Ordering used to pick the first point of a clockwise triangle:
    /// greatest `y` wins, ties broken by smallest `x`.
    #[inline]
    pub fn lower_or_leftmost(self, other: Vec2) -> bool {
        self.y > other.y || (self.y == other.y && self.x < other.x)
    }

    /// Ordering used to pick the second point of a clockwise triangle:
    /// greatest `x` wins, ties broken by greatest `y`.
    #[inline]
    pub fn rightmost_or_lower(self, other: Vec2) -> bool {
        self.x > other.x || (self.x == other.x && self.y > other.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a - b, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a / 2.0, Vec2::new(1.5, 2.0));
    }

    #[test]
    fn lower_or_leftmost_prefers_greater_y_then_smaller_x() {
        assert!(Vec2::new(5.0, 2.0).lower_or_leftmost(Vec2::new(0.0, 1.0)));
        assert!(Vec2::new(1.0, 2.0).lower_or_leftmost(Vec2::new(3.0, 2.0)));
        assert!(!Vec2::new(3.0, 2.0).lower_or_leftmost(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn rightmost_or_lower_prefers_greater_x_then_greater_y() {
        assert!(Vec2::new(5.0, 0.0).rightmost_or_lower(Vec2::new(4.0, 9.0)));
        assert!(Vec2::new(4.0, 9.0).rightmost_or_lower(Vec2::new(4.0, 1.0)));
    }
}
