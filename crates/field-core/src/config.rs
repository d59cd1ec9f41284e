use crate::color::Rgb;
use crate::constants::{
    FRICTION, PARTICLE_COUNT, REPULSION_RADIUS, REPULSION_RADIUS_WORLD_SCALE, REPULSION_STRENGTH,
    REPULSION_STRENGTH_WORLD_SCALE, SPAWN_HALF_EXTENTS, SPRING,
};
use glam::Vec3;

/// Spring-physics tokens. Carried with the configuration but not read by the
/// current displacement formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsTokens {
    pub friction: f32,
    pub spring: f32,
}

impl Default for PhysicsTokens {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            spring: SPRING,
        }
    }
}

/// Setup parameters for a [`ParticleField`](crate::ParticleField).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// Positions are drawn from `[-h, h)` on each axis.
    pub spawn_half_extents: Vec3,
    /// Base particle color, sRGB.
    pub color: Rgb,
    /// World units.
    pub repulsion_radius: f32,
    /// World units of displacement at zero distance.
    pub repulsion_strength: f32,
    pub physics: PhysicsTokens,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spawn_half_extents: Vec3::from_array(SPAWN_HALF_EXTENTS),
            color: Rgb::WHITE,
            repulsion_radius: REPULSION_RADIUS * REPULSION_RADIUS_WORLD_SCALE,
            repulsion_strength: REPULSION_STRENGTH * REPULSION_STRENGTH_WORLD_SCALE,
            physics: PhysicsTokens::default(),
        }
    }
}

impl FieldConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_repulsion(mut self, radius: f32, strength: f32) -> Self {
        self.repulsion_radius = radius;
        self.repulsion_strength = strength;
        self
    }
}
