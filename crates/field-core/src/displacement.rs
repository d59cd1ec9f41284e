//! CPU mirror of the particle program in `shaders/particles.wgsl`.
//!
//! The GPU evaluates these per particle per frame; the host-side versions
//! exist so the math can be checked without a device. Keep both in step.

use crate::constants::{
    BOB_AMPLITUDE, BOB_PHASE_SPREAD, BOB_RATE, DIRECTION_EPSILON, SIZE_BASE, SIZE_PHASE_SCALE,
};
use crate::field::FrameUniforms;
use glam::{Vec2, Vec3};

/// Result of running one particle through the vertex stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displaced {
    /// Rest position after the idle bob, before repulsion.
    pub bobbed: Vec3,
    /// Final model-space position.
    pub position: Vec3,
    pub influence: f32,
}

#[inline]
pub fn bob_offset(time: f32, phase: f32) -> f32 {
    (time * BOB_RATE + phase * BOB_PHASE_SPREAD).sin() * BOB_AMPLITUDE
}

/// Hermite falloff: 1 at zero distance, 0 at and beyond `radius`.
#[inline]
pub fn influence(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    1.0 - smoothstep(0.0, radius, distance)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Unit vector from the pointer (on the z = 0 plane) to `position`, or zero
/// when the two coincide.
#[inline]
pub fn repel_direction(position: Vec3, pointer: Vec2) -> Vec3 {
    let offset = position - pointer.extend(0.0);
    let len = offset.length();
    if len > DIRECTION_EPSILON {
        offset / len
    } else {
        Vec3::ZERO
    }
}

/// Push `position` away from the pointer. Returns the new position and the
/// influence that produced it.
#[inline]
pub fn repel(position: Vec3, pointer: Vec2, radius: f32, strength: f32) -> (Vec3, f32) {
    let dist = position.truncate().distance(pointer);
    let k = influence(dist, radius);
    if k == 0.0 {
        return (position, 0.0);
    }
    (position + repel_direction(position, pointer) * k * strength, k)
}

pub fn displace(rest: Vec3, phase: f32, uniforms: &FrameUniforms) -> Displaced {
    let mut bobbed = rest;
    bobbed.y += bob_offset(uniforms.time, phase);
    let (position, influence) = repel(
        bobbed,
        uniforms.pointer,
        uniforms.repulsion_radius,
        uniforms.repulsion_strength,
    );
    Displaced {
        bobbed,
        position,
        influence,
    }
}

/// On-screen point diameter in pixels for a particle at view-space depth
/// `view_z` (negative in front of the camera). Zero when behind the eye.
#[inline]
pub fn point_size(phase: f32, view_z: f32) -> f32 {
    if view_z >= 0.0 {
        return 0.0;
    }
    (SIZE_PHASE_SCALE * phase + SIZE_BASE) / -view_z
}

/// Glow opacity for a fragment at `point_coord` (0..1 across the sprite).
/// `None` means the fragment is discarded.
#[inline]
pub fn fragment_strength(point_coord: Vec2) -> Option<f32> {
    let dist = (point_coord - Vec2::splat(0.5)).length();
    if dist > 0.5 {
        return None;
    }
    Some((1.0 - dist * 2.0).powf(1.5))
}

#[inline]
pub fn fragment_color(base: [f32; 3], active: [f32; 3], influence: f32) -> [f32; 3] {
    Vec3::from_array(base)
        .lerp(Vec3::from_array(active), influence)
        .to_array()
}
