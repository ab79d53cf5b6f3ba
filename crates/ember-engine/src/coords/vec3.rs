use crate::coords::Vec2;

/// 3D point in screen pixels plus a depth offset.
///
/// The renderer does not project; `z` rides along in the vertex stream and
/// only the pseudo-3D wireframe emitter gives it meaning on the CPU side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_xy(v: Vec2) -> Self {
        Self { x: v.x, y: v.y, z: 0.0 }
    }

    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
