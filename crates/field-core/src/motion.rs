use crate::constants::{
    FLOAT_INTENSITY, FLOAT_OFFSET_MAX, FLOAT_ROTATION_INTENSITY, FLOAT_SPEED, PARALLAX_AMOUNT,
    PARALLAX_LERP, SPIN_RATE,
};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

/// Whole-field model transform: a slow spin with pointer parallax, wrapping a
/// gentle floating wobble.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMotion {
    float_offset: f32,
    /// Outer group rotation (x, y, z), XYZ order.
    group_rotation: Vec3,
    /// Inner floating rotation (x, y, z), XYZ order.
    float_rotation: Vec3,
    float_y: f32,
}

impl SceneMotion {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_offset(rng.gen::<f32>() * FLOAT_OFFSET_MAX)
    }

    pub fn with_offset(float_offset: f32) -> Self {
        Self {
            float_offset,
            group_rotation: Vec3::ZERO,
            float_rotation: Vec3::ZERO,
            float_y: 0.0,
        }
    }

    /// Advance one rendered frame. The parallax tilt eases toward its target
    /// by a fixed fraction per call.
    pub fn step(&mut self, elapsed_sec: f32, pointer_ndc: Vec2) {
        self.group_rotation.y = elapsed_sec * SPIN_RATE;
        let tilt = pointer_ndc * PARALLAX_AMOUNT;
        self.group_rotation.x = lerp(self.group_rotation.x, tilt.y, PARALLAX_LERP);
        self.group_rotation.z = lerp(self.group_rotation.z, tilt.x, PARALLAX_LERP);

        let t = self.float_offset + elapsed_sec;
        let a = t / 4.0 * FLOAT_SPEED;
        self.float_rotation = Vec3::new(
            a.cos() / 8.0 * FLOAT_ROTATION_INTENSITY,
            a.sin() / 8.0 * FLOAT_ROTATION_INTENSITY,
            a.sin() / 20.0 * FLOAT_ROTATION_INTENSITY,
        );
        self.float_y = a.sin() / 10.0 * FLOAT_INTENSITY;
    }

    pub fn group_rotation(&self) -> Vec3 {
        self.group_rotation
    }

    pub fn float_rotation(&self) -> Vec3 {
        self.float_rotation
    }

    pub fn float_y(&self) -> f32 {
        self.float_y
    }

    pub fn model_matrix(&self) -> Mat4 {
        let g = self.group_rotation;
        let f = self.float_rotation;
        Mat4::from_euler(EulerRot::XYZ, g.x, g.y, g.z)
            * Mat4::from_translation(Vec3::new(0.0, self.float_y, 0.0))
            * Mat4::from_euler(EulerRot::XYZ, f.x, f.y, f.z)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
