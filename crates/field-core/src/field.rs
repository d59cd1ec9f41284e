use crate::config::FieldConfig;
use crate::constants::ACTIVE_COLOR;
use crate::particles::ParticleSet;
use glam::Vec2;
use rand::prelude::*;

/// Values shared read-only by every particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    /// Seconds since the scene started.
    pub time: f32,
    /// Pointer in the particles' coordinate space (z = 0 plane).
    pub pointer: Vec2,
    /// Linear RGB.
    pub color: [f32; 3],
    /// Linear RGB the color blends toward under full influence.
    pub active_color: [f32; 3],
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    /// Render surface size in physical pixels.
    pub resolution: Vec2,
}

/// Visible extent of the scene in world units, as reported by the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }
}

/// Map a point measured from the surface's top-left corner to NDC: x grows
/// right, y grows up, both -1..1 across the surface. Points outside the
/// surface map outside that range. `None` for an empty surface.
///
/// Units only need to agree between position and size (CSS or physical px).
#[inline]
pub fn surface_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let ndc = Vec2::new((x / width) * 2.0 - 1.0, 1.0 - (y / height) * 2.0);
    ndc.is_finite().then_some(ndc)
}

/// Owns the particle buffers and the per-frame uniform record.
///
/// Draw layers borrow the buffers and uniforms each frame; only
/// [`update`](Self::update) and [`resize`](Self::resize) mutate anything.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: FieldConfig,
    particles: ParticleSet,
    uniforms: FrameUniforms,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, rng: &mut R) -> Self {
        let particles = ParticleSet::generate(config.count, config.spawn_half_extents, rng);
        let uniforms = FrameUniforms {
            time: 0.0,
            pointer: Vec2::ZERO,
            color: config.color.to_linear().to_array(),
            active_color: ACTIVE_COLOR,
            repulsion_radius: config.repulsion_radius,
            repulsion_strength: config.repulsion_strength,
            resolution: Vec2::ZERO,
        };
        log::debug!(
            "[field] particles={} half_extents={:?} radius={:.2} strength={:.2}",
            particles.len(),
            config.spawn_half_extents,
            config.repulsion_radius,
            config.repulsion_strength
        );
        Self {
            config,
            particles,
            uniforms,
        }
    }

    pub fn seeded(config: FieldConfig, seed: u64) -> Self {
        Self::new(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Per-frame update. `pointer_ndc` is the pointer in normalized device
    /// coordinates (nominally -1..1 on both axes, not clamped).
    pub fn update(&mut self, elapsed_sec: f32, pointer_ndc: Vec2, viewport: Viewport) {
        self.uniforms.time = elapsed_sec;
        self.uniforms.pointer = pointer_ndc * viewport.half_extents();
    }

    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.uniforms.resolution = Vec2::new(width_px as f32, height_px as f32);
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn uniforms(&self) -> &FrameUniforms {
        &self.uniforms
    }

    pub fn positions(&self) -> &[f32] {
        self.particles.positions()
    }

    pub fn initial_positions(&self) -> &[f32] {
        self.particles.initial_positions()
    }

    pub fn phases(&self) -> &[f32] {
        self.particles.phases()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
