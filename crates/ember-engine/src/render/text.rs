use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use wgpu::util::DeviceExt;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::text::{FontId, FontSystem};

use super::{
    straight_alpha_blend, viewport_ubo_min_binding_size, RenderCtx, RenderTarget, ViewportUniform,
};

/// Horizontal alignment of a text run around its anchor position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One recorded string, resolved to a concrete origin at record time.
pub(super) struct TextRun {
    pub font: FontId,
    pub origin: Vec2,
    pub text: String,
    pub px: f32,
    pub color: Color,
}

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1;

// ── glyph atlas ───────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone)]
struct AtlasSlot {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf-packed R8Unorm glyph atlas.
///
/// Glyphs are rasterized through fontdue on first use and kept for the
/// atlas's lifetime, keyed by `GlyphRasterConfig` (font identity, glyph
/// index, pixel size), so each distinct glyph is rasterized once.
struct GlyphAtlas {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
    cache: HashMap<GlyphRasterConfig, AtlasSlot>,
}

impl GlyphAtlas {
    fn new(device: &wgpu::Device) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ember text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
            full: false,
            cache: HashMap::new(),
        }
    }

    fn slot(
        &mut self,
        ctx: &RenderCtx<'_>,
        font: &fontdue::Font,
        key: GlyphRasterConfig,
    ) -> Option<AtlasSlot> {
        if let Some(slot) = self.cache.get(&key) {
            return Some(*slot);
        }

        let (metrics, bitmap) = font.rasterize_config(key);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }

        let slot = self.place(ctx, &bitmap, metrics.width as u32, metrics.height as u32)?;
        self.cache.insert(key, slot);
        Some(slot)
    }

    fn place(&mut self, ctx: &RenderCtx<'_>, bitmap: &[u8], w: u32, h: u32) -> Option<AtlasSlot> {
        if self.full {
            return None;
        }

        // Advance to a new shelf row when the glyph doesn't fit horizontally.
        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            log::warn!(
                "glyph atlas is full ({ATLAS_SIZE}x{ATLAS_SIZE}); \
                 some glyphs will not be rendered"
            );
            self.full = true;
            return None;
        }

        let gx = self.cursor_x;
        let gy = self.cursor_y;

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );

        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);

        let scale = 1.0 / ATLAS_SIZE as f32;
        Some(AtlasSlot {
            uv_min: [gx as f32 * scale, gy as f32 * scale],
            uv_max: [(gx + w) as f32 * scale, (gy + h) as f32 * scale],
        })
    }
}

// ── pipeline resources ────────────────────────────────────────────────────

/// Everything the text pass needs besides the atlas, built eagerly the
/// first time text is rendered and rebuilt only if the surface format
/// changes.
struct TextResources {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    viewport_ubo: wgpu::Buffer,
    quad_vbo: wgpu::Buffer,
    quad_ibo: wgpu::Buffer,
}

impl TextResources {
    fn new(ctx: &RenderCtx<'_>) -> Self {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ember text shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/text.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("ember text bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: viewport_ubo_min_binding_size(),
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 2,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("ember text pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("ember text pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[QuadVertex::layout(), GlyphInstance::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(straight_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("ember text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ember text viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let quad_vbo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("ember text quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let quad_ibo = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("ember text quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        Self {
            format: ctx.surface_format,
            pipeline,
            bind_group_layout,
            sampler,
            viewport_ubo,
            quad_vbo,
            quad_ibo,
        }
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Instanced glyph-quad text renderer. One quad per visible glyph, sampled
/// from the shared atlas, drawn in a single indexed instanced call.
pub(super) struct TextRenderer {
    resources: Option<TextResources>,
    atlas: Option<GlyphAtlas>,
    bind_group: Option<wgpu::BindGroup>,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            resources: None,
            atlas: None,
            bind_group: None,
            instance_vbo: None,
            instance_capacity: 0,
        }
    }

    /// Renders `runs` into `target` in record order.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        runs: &[TextRun],
        font_system: &FontSystem,
    ) {
        if self.resources.as_ref().map(|r| r.format) != Some(ctx.surface_format) {
            self.resources = Some(TextResources::new(ctx));
            self.bind_group = None;
        }
        if self.atlas.is_none() {
            self.atlas = Some(GlyphAtlas::new(ctx.device));
            self.bind_group = None;
        }

        let instances = self.build_instances(ctx, runs, font_system);
        if instances.is_empty() {
            return;
        }
        self.upload_instances(ctx, &instances);

        let Some(res) = self.resources.as_ref() else { return };
        let Some(atlas) = self.atlas.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };

        let bind_group = self.bind_group.get_or_insert_with(|| {
            ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("ember text bind group"),
                layout: &res.bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: res.viewport_ubo.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(&atlas.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&res.sampler),
                    },
                ],
            })
        });

        ctx.queue.write_buffer(
            &res.viewport_ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform {
                viewport: ctx.viewport,
                _pad: [0.0; 2],
            }),
        );

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ember text pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&res.pipeline);
        rpass.set_bind_group(0, &*bind_group, &[]);
        rpass.set_vertex_buffer(0, res.quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(res.quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..instances.len() as u32);
    }

    fn build_instances(
        &mut self,
        ctx: &RenderCtx<'_>,
        runs: &[TextRun],
        font_system: &FontSystem,
    ) -> Vec<GlyphInstance> {
        let Some(atlas) = self.atlas.as_mut() else {
            return Vec::new();
        };

        // max_width stays unset: runs never wrap.
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        let mut instances = Vec::new();

        for run in runs {
            let Some(font) = font_system.get(run.font) else {
                log::warn!("unknown FontId {:?}, skipping text run", run.font);
                continue;
            };

            layout.reset(&LayoutSettings {
                x: run.origin.x,
                y: run.origin.y,
                ..LayoutSettings::default()
            });
            layout.append(&[font], &TextStyle::new(&run.text, run.px, 0));

            let color = run.color.to_array();
            for glyph in layout.glyphs() {
                if !glyph.char_data.rasterize() || glyph.width == 0 || glyph.height == 0 {
                    continue;
                }
                let Some(slot) = atlas.slot(ctx, font, glyph.key) else {
                    continue;
                };
                instances.push(GlyphInstance {
                    dst_min: [glyph.x, glyph.y],
                    dst_max: [
                        glyph.x + glyph.width as f32,
                        glyph.y + glyph.height as f32,
                    ],
                    uv_min: slot.uv_min,
                    uv_max: slot.uv_max,
                    color,
                });
            }
        }

        instances
    }

    fn upload_instances(&mut self, ctx: &RenderCtx<'_>, instances: &[GlyphInstance]) {
        if instances.len() > self.instance_capacity || self.instance_vbo.is_none() {
            let new_cap = instances.len().next_power_of_two().max(64);
            self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("ember text instance vbo"),
                size: (new_cap * std::mem::size_of::<GlyphInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.instance_capacity = new_cap;
        }
        if let Some(vbo) = self.instance_vbo.as_ref() {
            ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(instances));
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Corners of the unit quad stretched to `dst_min..dst_max` per instance.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min: [f32; 2],
    uv_max: [f32; 2],
    color: [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}
