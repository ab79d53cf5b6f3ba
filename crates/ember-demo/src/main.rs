//! Demo: a sample primitive scene plus one of every widget.
//!
//! F2 toggles move mode (drag widgets to rearrange them). Set a font with
//! `EMBER_FONT=/path/to/font.ttf`; without one the scene still renders,
//! minus text.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use ember_engine::coords::{Vec2, Vec3};
use ember_engine::input::PointerTracker;
use ember_engine::logging::{init_logging, LoggingConfig};
use ember_engine::paint::{Color, CornerColors};
use ember_engine::render::{Renderer, RendererInit, TextAlign};
use ember_engine::text::TextMeasure;
use ember_ui::widgets::{Button, Checkbox, ColorPicker, ComboBox, Slider, SliderBinding, TextEntry};
use ember_ui::{Widget, WidgetList};

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

struct DemoValues {
    enabled: Rc<Cell<bool>>,
    radius: Rc<Cell<f32>>,
    segments: Rc<Cell<i32>>,
    tint: Rc<Cell<Color>>,
}

struct DemoState {
    renderer: Renderer,
    pointer: PointerTracker,
    widgets: WidgetList,
    values: DemoValues,
    caption_index: usize,
    button_index: usize,
}

impl DemoState {
    fn new(renderer: Renderer) -> Self {
        let values = DemoValues {
            enabled: Rc::new(Cell::new(true)),
            radius: Rc::new(Cell::new(60.0)),
            segments: Rc::new(Cell::new(32)),
            tint: Rc::new(Cell::new(Color::new(0.9, 0.4, 0.2, 1.0))),
        };

        let mut widgets = WidgetList::new(Vec2::new(20.0, 20.0), Vec2::new(240.0, 480.0));
        widgets.background = Some(CornerColors::vertical(
            Color::new(0.1, 0.1, 0.13, 0.9),
            Color::new(0.06, 0.06, 0.08, 0.9),
        ));

        widgets.add_widget(Widget::ComboBox(ComboBox::new(
            Vec2::new(30.0, 30.0),
            Vec2::new(220.0, 460.0),
            "scene controls",
        )));
        widgets.add_widget(Widget::Checkbox(Checkbox::new(
            Vec2::new(45.0, 70.0),
            Vec2::splat(18.0),
            "show circle",
            values.enabled.clone(),
        )));
        widgets.add_widget(Widget::Slider(Slider::new(
            Vec2::new(45.0, 125.0),
            Vec2::new(190.0, 18.0),
            "radius",
            SliderBinding::Float {
                value: values.radius.clone(),
                min: 10.0,
                max: 150.0,
            },
        )));
        widgets.add_widget(Widget::Slider(Slider::new(
            Vec2::new(45.0, 175.0),
            Vec2::new(190.0, 18.0),
            "segments",
            SliderBinding::Int {
                value: values.segments.clone(),
                min: 4,
                max: 128,
            },
        )));
        let caption_index = widgets.add_widget(Widget::TextEntry(TextEntry::new(
            Vec2::new(45.0, 230.0),
            Vec2::new(190.0, 22.0),
            "caption",
            32,
        )));
        let picker = ColorPicker::new(
            Vec2::new(45.0, 270.0),
            Vec2::new(190.0, 140.0),
            "circle tint",
            values.tint.clone(),
            &renderer,
        );
        widgets.add_widget(Widget::ColorPicker(picker));
        let button_index = widgets.add_widget(Widget::Button(Button::new(
            Vec2::new(45.0, 430.0),
            Vec2::new(190.0, 28.0),
            "reset",
        )));

        Self {
            renderer,
            pointer: PointerTracker::new(),
            widgets,
            values,
            caption_index,
            button_index,
        }
    }

    fn reset_values(&mut self) {
        self.values.enabled.set(true);
        self.values.radius.set(60.0);
        self.values.segments.set(32);
        self.values.tint.set(Color::new(0.9, 0.4, 0.2, 1.0));
    }

    fn caption(&self) -> String {
        match &self.widgets.widgets()[self.caption_index] {
            Widget::TextEntry(entry) if !entry.buffer().is_empty() => entry.buffer().to_owned(),
            _ => "ember demo".to_owned(),
        }
    }

    fn frame(&mut self) {
        if let Widget::Button(button) = &mut self.widgets.widgets_mut()[self.button_index] {
            if button.take_click() {
                self.reset_values();
            }
        }

        let viewport = self.renderer.viewport();
        let center = Vec2::new(viewport.x * 0.62, viewport.y * 0.45);

        // Primitive sampler.
        self.renderer.add_rect_filled_multicolor(
            Vec2::new(viewport.x - 260.0, 40.0),
            Vec2::new(220.0, 90.0),
            CornerColors {
                top_left: Color::opaque(0.9, 0.2, 0.2),
                top_right: Color::opaque(0.2, 0.9, 0.2),
                bottom_left: Color::opaque(0.2, 0.2, 0.9),
                bottom_right: Color::opaque(0.9, 0.9, 0.2),
            },
        );
        self.renderer.add_triangle_filled_multicolor(
            Vec2::new(viewport.x - 250.0, 280.0),
            Vec2::new(viewport.x - 140.0, 160.0),
            Vec2::new(viewport.x - 40.0, 280.0),
            Color::opaque(1.0, 0.3, 0.3),
            Color::opaque(0.3, 1.0, 0.3),
            Color::opaque(0.3, 0.3, 1.0),
        );
        self.renderer.add_wireframe_3d(
            Vec2::new(viewport.x - 240.0, 340.0),
            Vec3::new(160.0, 100.0, 18.0),
            Color::opaque(0.7, 0.7, 0.8),
        );

        if self.values.enabled.get() {
            let segments = self.values.segments.get().max(4) as usize;
            let radius = self.values.radius.get();
            self.renderer
                .add_circle_filled(center, radius, self.values.tint.get(), segments);
            self.renderer
                .add_circle(center, radius, Color::opaque(0.95, 0.95, 0.95), segments);
        }

        let caption = self.caption();
        let caption_y = viewport.y - 50.0;
        let caption_size = self.renderer.measure_text(&caption, 18.0);
        self.renderer.add_frame(
            Vec2::new(viewport.x / 2.0 - caption_size.x / 2.0 - 8.0, caption_y - 6.0),
            caption_size + Vec2::new(16.0, 12.0),
            1.0,
            Color::opaque(0.5, 0.5, 0.6),
        );
        self.renderer.add_text(
            Vec2::new(viewport.x / 2.0, caption_y),
            &caption,
            18.0,
            Color::opaque(0.95, 0.95, 0.95),
            TextAlign::Center,
        );

        self.widgets.draw_widgets(&mut self.renderer);
        self.renderer.draw();
    }
}

#[derive(Default)]
struct DemoApp {
    state: Option<DemoState>,
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("ember demo")
            .with_inner_size(LogicalSize::new(1024.0, 640.0));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                event_loop.exit();
                return;
            }
        };

        let mut renderer =
            match pollster::block_on(Renderer::new(window, RendererInit::default())) {
                Ok(renderer) => renderer,
                Err(e) => {
                    log::error!("renderer initialization failed: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

        match load_font_bytes() {
            Some(bytes) => {
                if let Err(e) = renderer.load_font(&bytes) {
                    log::warn!("could not parse font: {e}");
                }
            }
            None => log::warn!("no font found; set EMBER_FONT to render text"),
        }

        self.state = Some(DemoState::new(renderer));
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(state) = &self.state {
            state.renderer.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Resized(new_size) => {
                state.renderer.resize(*new_size);
            }
            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed
                    && key.physical_key == PhysicalKey::Code(KeyCode::F2) =>
            {
                state.widgets.toggle_move_mode();
                log::info!(
                    "move mode {}",
                    if state.widgets.move_mode() { "on" } else { "off" }
                );
                return;
            }
            WindowEvent::RedrawRequested => {
                state.frame();
                return;
            }
            _ => {}
        }

        for input in state.pointer.translate(&event) {
            state.widgets.push_input(input);
        }
    }
}

fn load_font_bytes() -> Option<Vec<u8>> {
    if let Ok(path) = std::env::var("EMBER_FONT") {
        match std::fs::read(&path) {
            Ok(bytes) => return Some(bytes),
            Err(e) => log::warn!("EMBER_FONT {path}: {e}"),
        }
    }
    FONT_PATHS.iter().find_map(|path| std::fs::read(path).ok())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut app = DemoApp::default();
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    Ok(())
}
