//! Terraflight - fly through procedurally generated noise terrain
//!
//! The terrain mesh is built once at startup from seeded fractal noise;
//! every frame only re-derives the view-projection matrix from the camera.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use glam::Mat4;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use terraflight::camera::{FlyCamera, MovementInput};
use terraflight::cli::Args;
use terraflight::params::{CameraParams, LightingParams, RenderConfig, TextureConfig};
use terraflight::rendering::{RenderSystem, Uniforms};
use terraflight::terrain::{Heightmap, TerrainMesh};
use terraflight::texture::TextureSet;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Static geometry, built before the event loop starts
    mesh: TerrainMesh,

    // Live camera and input state
    camera: FlyCamera,
    input: MovementInput,

    // Configuration
    render_config: RenderConfig,
    lighting: LightingParams,
    texture_config: TextureConfig,

    // Time tracking
    last_frame: Instant,
}

impl App {
    fn new(args: &Args) -> Self {
        let seed = args.resolve_seed();
        let terrain_params = args.terrain_params(seed);
        println!(
            "Generating {}x{} terrain mesh...",
            terrain_params.grid_width, terrain_params.grid_depth
        );

        let heightmap = Heightmap::new(&terrain_params);
        let mesh = TerrainMesh::generate(&terrain_params, &heightmap);
        println!(
            "Mesh ready: {} vertices, {} triangles",
            mesh.vertices.len(),
            mesh.indices.len() / 3
        );

        Self {
            window: None,
            render_system: None,
            mesh,
            camera: FlyCamera::new(CameraParams::default()),
            input: MovementInput::default(),
            render_config: RenderConfig::default(),
            lighting: LightingParams::default(),
            texture_config: TextureConfig::default(),
            last_frame: Instant::now(),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let pressed = event.state == ElementState::Pressed;
        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) if pressed => event_loop.exit(),
            PhysicalKey::Code(KeyCode::KeyW) => self.input.forward = pressed,
            PhysicalKey::Code(KeyCode::KeyS) => self.input.backward = pressed,
            PhysicalKey::Code(KeyCode::KeyA) => self.input.left = pressed,
            PhysicalKey::Code(KeyCode::KeyD) => self.input.right = pressed,
            _ => {}
        }
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        let now = Instant::now();
        let delta_ms = now.duration_since(self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        self.camera.advance(&self.input, delta_ms);

        let view_proj = self.camera.view_proj(&self.render_config);
        let mvp = view_proj * Mat4::IDENTITY; // Model transform is identity
        render_system.update_uniforms(&Uniforms::new(mvp, &self.lighting));

        if let Err(e) = render_system.render() {
            eprintln!("Render error: {:?}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Terraflight")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Capture the cursor for mouse-look
        window.set_cursor_visible(false);
        if window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            .is_err()
        {
            eprintln!("Warning: cursor grab unavailable, mouse-look may escape the window");
        }

        let textures = TextureSet::load(&self.texture_config);

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.mesh,
            &textures,
            &self.lighting,
            self.render_config.sky_color,
        ))
        .unwrap_or_else(|e| {
            eprintln!("Failed to initialize rendering: {}", e);
            std::process::exit(1);
        });

        println!("\nTerraflight is running!");
        println!("WASD to fly, mouse to look, ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw deltas, not cursor positions, so look keeps working at the
        // screen edge while the cursor is grabbed.
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.camera.process_mouse(dx as f32, dy as f32);
        }
    }
}

fn main() {
    println!("Terraflight - procedural terrain flyover");

    let args = Args::parse();
    let mut app = App::new(&args);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
