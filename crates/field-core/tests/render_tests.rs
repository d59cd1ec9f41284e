// Uniform packing and shader/host agreement, no GPU required.

use field_core::constants::*;
use field_core::{Camera, FieldConfig, FieldUniformsGpu, ParticleField, Viewport, PARTICLES_WGSL};
use glam::{Mat4, Vec2};

#[test]
fn uniform_block_matches_wgsl_size() {
    // 2 * mat4 + 2 * vec4 + 2 * vec2 + 4 * f32
    assert_eq!(std::mem::size_of::<FieldUniformsGpu>(), 192);
    assert_eq!(std::mem::size_of::<FieldUniformsGpu>() % 16, 0);
}

#[test]
fn pack_copies_frame_state() {
    let mut field = ParticleField::seeded(FieldConfig::default().with_count(4), 1);
    field.resize(640, 480);
    field.update(4.0, Vec2::new(0.5, 0.5), Viewport::new(8.0, 6.0));
    let cam = Camera::default();
    let packed = FieldUniformsGpu::pack(&field, &cam, Mat4::IDENTITY);
    assert_eq!(packed.time, 4.0);
    assert_eq!(packed.pointer, [2.0, 1.5]);
    assert_eq!(packed.resolution, [640.0, 480.0]);
    assert_eq!(packed.active_color, [0.39, 1.0, 0.85, 1.0]);
    assert_eq!(packed.repulsion_radius, field.config().repulsion_radius);
    assert_eq!(packed.repulsion_strength, field.config().repulsion_strength);
    assert_eq!(packed.model_view, cam.view_matrix().to_cols_array_2d());
    assert_eq!(packed.projection, cam.projection_matrix().to_cols_array_2d());
}

#[test]
fn shader_constants_match_host_mirror() {
    let expect = |name: &str, value: f32| {
        let line = format!("const {name}: f32 = {value:?};");
        assert!(PARTICLES_WGSL.contains(&line), "missing `{line}` in particles.wgsl");
    };
    expect("BOB_RATE", BOB_RATE);
    expect("BOB_PHASE_SPREAD", BOB_PHASE_SPREAD);
    expect("BOB_AMPLITUDE", BOB_AMPLITUDE);
    expect("SIZE_PHASE_SCALE", SIZE_PHASE_SCALE);
    expect("SIZE_BASE", SIZE_BASE);
    expect("MIN_POINT_SIZE_PX", MIN_POINT_SIZE_PX);
    expect("DIRECTION_EPSILON", DIRECTION_EPSILON);
}

#[test]
fn shader_declares_entry_points_and_inputs() {
    for needle in [
        "fn vs_main",
        "fn fs_main",
        "@location(0) position: vec3<f32>",
        "@location(1) initial_position: vec3<f32>",
        "@location(2) phase: f32",
        "discard;",
    ] {
        assert!(PARTICLES_WGSL.contains(needle), "missing `{needle}`");
    }
}
