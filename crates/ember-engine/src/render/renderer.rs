use std::sync::Arc;

use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::Vec2;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::draw::{CircleCache, DrawList, Topology, Vertex, MAX_VERTICES};
use crate::paint::Color;
use crate::text::{FontId, FontLoadError, FontSystem, TextMeasure};

use super::text::{TextRenderer, TextRun};
use super::{
    straight_alpha_blend, viewport_ubo_min_binding_size, RenderCtx, RenderTarget, ViewportUniform,
};

/// Initialization parameters for [`Renderer::new`].
#[derive(Debug, Clone)]
pub struct RendererInit {
    pub gpu: GpuInit,
    pub clear_color: Color,
}

impl Default for RendererInit {
    fn default() -> Self {
        Self {
            gpu: GpuInit::default(),
            clear_color: Color::opaque(0.08, 0.08, 0.1),
        }
    }
}

/// Immediate-mode renderer over one window surface.
///
/// Primitives accumulate in a [`DrawList`]; [`Renderer::draw`] uploads the
/// whole vertex vector once, issues one draw call per batch run, renders any
/// pending text above the primitives, and presents. Emitters that would
/// overflow the fixed vertex buffer trigger the same submission mid-frame,
/// so one logical frame can present more than once.
pub struct Renderer {
    gpu: Gpu,
    pipelines: TopologyPipelines,
    bind_group: wgpu::BindGroup,
    viewport_ubo: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,

    pub(super) list: DrawList,
    pub(super) circles: CircleCache,

    fonts: FontSystem,
    default_font: Option<FontId>,
    text: TextRenderer,
    pub(super) text_runs: Vec<TextRun>,
    pub(super) warned_no_font: bool,

    clear_color: Color,
}

impl Renderer {
    /// Creates a renderer bound to `window`.
    ///
    /// Device acquisition is asynchronous under wgpu; callers typically
    /// block with `pollster::block_on`. Failures here are initialization
    /// failures and should be treated as fatal by `main`.
    pub async fn new(window: Arc<Window>, init: RendererInit) -> Result<Self> {
        let gpu = Gpu::new(window, init.gpu).await?;

        let device = gpu.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ember prim shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/prim.wgsl").into()),
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("ember prim bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: viewport_ubo_min_binding_size(),
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ember prim pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            // Newer wgpu uses immediate constants; keep disabled for now.
            immediate_size: 0,
        });

        let pipelines = TopologyPipelines {
            line_list: build_pipeline(
                device,
                &pipeline_layout,
                &shader,
                gpu.surface_format(),
                wgpu::PrimitiveTopology::LineList,
            ),
            line_strip: build_pipeline(
                device,
                &pipeline_layout,
                &shader,
                gpu.surface_format(),
                wgpu::PrimitiveTopology::LineStrip,
            ),
            triangle_list: build_pipeline(
                device,
                &pipeline_layout,
                &shader,
                gpu.surface_format(),
                wgpu::PrimitiveTopology::TriangleList,
            ),
            triangle_strip: build_pipeline(
                device,
                &pipeline_layout,
                &shader,
                gpu.surface_format(),
                wgpu::PrimitiveTopology::TriangleStrip,
            ),
        };

        let viewport_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ember prim viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ember prim bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        // One fixed allocation for the accumulator's whole capacity; the
        // list guarantees it never grows past this.
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ember prim vbo"),
            size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            gpu,
            pipelines,
            bind_group,
            viewport_ubo,
            vertex_buffer,
            list: DrawList::new(),
            circles: CircleCache::new(),
            fonts: FontSystem::new(),
            default_font: None,
            text: TextRenderer::new(),
            text_runs: Vec::new(),
            warned_no_font: false,
            clear_color: init.clear_color,
        })
    }

    pub fn window(&self) -> &Arc<Window> {
        self.gpu.window()
    }

    /// Drawable size in pixels.
    pub fn viewport(&self) -> Vec2 {
        let size = self.gpu.size();
        Vec2::new(size.width as f32, size.height as f32)
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Loads a font; the first loaded font becomes the default used by
    /// `add_text` and `measure_text`.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.fonts.load_font(bytes)?;
        if self.default_font.is_none() {
            self.default_font = Some(id);
        }
        Ok(id)
    }

    pub(super) fn default_font(&self) -> Option<FontId> {
        self.default_font
    }

    /// Reconfigures the surface after a window resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size);
    }

    /// Submits everything accumulated since the last call and presents.
    ///
    /// An empty list still clears, draws pending text, and presents. On a
    /// transient surface error the submission is skipped with a log line and
    /// the accumulated vertices are retained for the next attempt; running
    /// out of surface memory is fatal.
    pub fn draw(&mut self) {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => {
                        log::debug!("surface reconfigured; skipping this submission");
                    }
                    SurfaceErrorAction::SkipFrame => {
                        log::warn!("transient surface error; skipping this submission");
                    }
                    SurfaceErrorAction::Fatal => {
                        panic!("surface out of memory");
                    }
                }
                return;
            }
        };

        let viewport = self.viewport();
        let uniform = ViewportUniform {
            viewport: [viewport.x.max(1.0), viewport.y.max(1.0)],
            _pad: [0.0; 2],
        };
        self.gpu
            .queue()
            .write_buffer(&self.viewport_ubo, 0, bytemuck::bytes_of(&uniform));

        // One upload for the whole accumulated vector.
        if !self.list.is_empty() {
            self.gpu.queue().write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(self.list.vertices()),
            );
        }

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ember prim pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: self.clear_color.r as f64,
                            g: self.clear_color.g as f64,
                            b: self.clear_color.b as f64,
                            a: self.clear_color.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            // One draw call per batch run. Separator runs have no pipeline
            // but still advance the offset past their degenerate vertex.
            let mut offset = 0u32;
            for batch in self.list.batches() {
                if let Some(pipeline) = self.pipelines.get(batch.topology) {
                    rpass.set_pipeline(pipeline);
                    rpass.draw(offset..offset + batch.vertex_count, 0..1);
                }
                offset += batch.vertex_count;
            }
        }

        self.list.clear();

        // Text always renders above the primitives of the same submission.
        let runs = std::mem::take(&mut self.text_runs);
        if !runs.is_empty() {
            let ctx = RenderCtx {
                device: self.gpu.device(),
                queue: self.gpu.queue(),
                surface_format: self.gpu.surface_format(),
                viewport: [viewport.x.max(1.0), viewport.y.max(1.0)],
            };
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            self.text.render(&ctx, &mut target, &runs, &self.fonts);
        }

        self.gpu.submit(frame);
    }

    /// Appends a primitive through the overflow-checked path.
    ///
    /// When the primitive would not fit, the accumulated list is submitted
    /// and cleared first, which presents a frame mid-accumulation.
    pub(super) fn push_primitive(&mut self, vertices: &[Vertex], topology: Topology) {
        if self.list.requires_flush(vertices.len(), topology) {
            self.draw();
            if self.list.requires_flush(vertices.len(), topology) {
                // The submission was skipped (broken surface) and left the
                // list full; drop it rather than breach capacity.
                log::warn!(
                    "dropping {} accumulated vertices after a skipped submission",
                    self.list.len()
                );
                self.list.clear();
            }
        }
        self.list.append(vertices, topology);
    }
}

impl TextMeasure for Renderer {
    /// Measures with the default font, falling back to a coarse per-glyph
    /// estimate when no font is loaded so layout-dependent callers still
    /// get usable dimensions.
    fn measure_text(&self, text: &str, px: f32) -> Vec2 {
        match self.default_font {
            Some(id) => self.fonts.measure(text, id, px),
            None => Vec2::new(px * 0.5 * text.chars().count() as f32, px * 1.2),
        }
    }
}

struct TopologyPipelines {
    line_list: wgpu::RenderPipeline,
    line_strip: wgpu::RenderPipeline,
    triangle_list: wgpu::RenderPipeline,
    triangle_strip: wgpu::RenderPipeline,
}

impl TopologyPipelines {
    fn get(&self, topology: Topology) -> Option<&wgpu::RenderPipeline> {
        match topology {
            Topology::LineList => Some(&self.line_list),
            Topology::LineStrip => Some(&self.line_strip),
            Topology::TriangleList => Some(&self.triangle_list),
            Topology::TriangleStrip => Some(&self.triangle_strip),
            Topology::Separator => None,
        }
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    let strip_index_format = None;

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("ember prim pipeline"),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(straight_alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format,
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
    })
}
