use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use field_core::render::encode_frame;
use field_core::{
    surface_to_ndc, Camera, FieldConfig, Palette, ParticleField, ParticlePass, SceneMotion,
};
use glam::Vec2;
use rand::prelude::*;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticlePass,
    clear_color: wgpu::Color,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        field: &ParticleField,
        clear_color: wgpu::Color,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", config.width, config.height, format);

        let particles = ParticlePass::new(&device, format, field);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            particles,
            clear_color,
        })
    }

    fn resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(
        &mut self,
        field: &ParticleField,
        camera: &Camera,
        motion: &SceneMotion,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.particles
            .write_uniforms(&self.queue, field, camera, motion.model_matrix());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        encode_frame(&mut encoder, &view, self.clear_color, &self.particles);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Everything the per-frame update needs besides the GPU.
struct Scene {
    field: ParticleField,
    motion: SceneMotion,
    camera: Camera,
    pointer_ndc: Vec2,
    started: Instant,
}

impl Scene {
    fn set_size(&mut self, width: u32, height: u32) {
        self.camera.set_surface_size(width, height);
        self.field.resize(width, height);
    }

    // Cursor and window size are both in physical pixels
    fn set_cursor(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if let Some(ndc) = surface_to_ndc(x as f32, y as f32, width as f32, height as f32) {
            self.pointer_ndc = ndc;
        }
    }

    fn step(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        self.field
            .update(elapsed, self.pointer_ndc, self.camera.viewport());
        self.motion.step(elapsed, self.pointer_ndc);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let palette = Palette::from_tokens()?;
    let mut rng = StdRng::from_entropy();
    let field = ParticleField::new(
        FieldConfig::default().with_color(palette.particles),
        &mut rng,
    );
    let motion = SceneMotion::new(&mut rng);
    log::info!("[field] particles={}", field.len());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Particle Field (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(
        &window,
        &field,
        palette.background.to_linear().to_wgpu(),
    ))?;
    let size = window.inner_size();
    let mut scene = Scene {
        field,
        motion,
        camera: Camera::default(),
        pointer_ndc: Vec2::ZERO,
        started: Instant::now(),
    };
    scene.set_size(size.width, size.height);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            scene.set_size(size.width, size.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let size = state.window.inner_size();
            scene.set_cursor(position.x, position.y, size.width, size.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => {
            scene.step();
            match state.render(&scene.field, &scene.camera, &scene.motion) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
