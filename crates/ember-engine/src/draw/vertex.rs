use bytemuck::{Pod, Zeroable};

use crate::coords::{Vec2, Vec3};
use crate::paint::Color;

/// Vertex as uploaded to the GPU.
///
/// Position is in screen pixels (converted to NDC in the vertex shader via
/// the viewport uniform); `pos[2]` is carried through untransformed. Color
/// is straight-alpha RGBA.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos: [pos.x, pos.y, 0.0],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn new_3d(pos: Vec3, color: Color) -> Self {
        Self {
            pos: [pos.x, pos.y, pos.z],
            color: color.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
