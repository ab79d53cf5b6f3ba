//! GPU submission: topology pipelines, the frame loop, and text.

mod emit;
mod renderer;
mod text;

pub use renderer::{Renderer, RendererInit};
pub use text::TextAlign;

use bytemuck::{Pod, Zeroable};

/// Borrowed GPU handles passed down to sub-renderers for one frame.
pub(crate) struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: [f32; 2],
}

/// Encoder plus the color attachment of the frame being recorded.
pub(crate) struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

/// Straight-alpha blending; vertex colors are not premultiplied.
pub(crate) fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState::ALPHA_BLENDING
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

/// Minimum binding size for the viewport uniform buffer.
pub(crate) fn viewport_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
}
