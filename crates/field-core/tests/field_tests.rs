// ParticleField setup and the per-frame uniform update.

use field_core::constants::{
    ACTIVE_COLOR, PARTICLE_COUNT, REPULSION_RADIUS, REPULSION_RADIUS_WORLD_SCALE,
    REPULSION_STRENGTH, REPULSION_STRENGTH_WORLD_SCALE,
};
use field_core::{surface_to_ndc, FieldConfig, ParticleField, Rgb, Viewport};
use glam::Vec2;

fn small_field() -> ParticleField {
    ParticleField::seeded(FieldConfig::default().with_count(100), 7)
}

#[test]
fn default_config_uses_design_tokens() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.count, PARTICLE_COUNT);
    assert!((cfg.repulsion_radius - REPULSION_RADIUS * REPULSION_RADIUS_WORLD_SCALE).abs() < 1e-6);
    assert!(
        (cfg.repulsion_strength - REPULSION_STRENGTH * REPULSION_STRENGTH_WORLD_SCALE).abs() < 1e-6
    );
    assert_eq!(cfg.color, Rgb::WHITE);
    assert!((cfg.physics.friction - 0.9).abs() < 1e-6);
    assert!((cfg.physics.spring - 0.1).abs() < 1e-6);
}

#[test]
fn new_field_starts_with_zeroed_frame_state() {
    let field = small_field();
    let u = field.uniforms();
    assert_eq!(u.time, 0.0);
    assert_eq!(u.pointer, Vec2::ZERO);
    assert_eq!(u.active_color, ACTIVE_COLOR);
    assert!(u.color.iter().all(|c| (c - 1.0).abs() < 1e-6));
    assert_eq!(field.len(), 100);
}

#[test]
fn zero_particles_is_a_valid_field() {
    let mut field = ParticleField::seeded(FieldConfig::default().with_count(0), 1);
    assert!(field.is_empty());
    assert!(field.positions().is_empty());
    assert!(field.phases().is_empty());
    field.update(1.0, Vec2::new(0.5, 0.5), Viewport::new(10.0, 6.0));
    assert_eq!(field.uniforms().time, 1.0);
}

#[test]
fn update_writes_time_and_scaled_pointer() {
    let mut field = small_field();
    field.update(2.5, Vec2::new(0.5, -1.0), Viewport::new(12.0, 8.0));
    let u = field.uniforms();
    assert_eq!(u.time, 2.5);
    assert!((u.pointer.x - 3.0).abs() < 1e-6);
    assert!((u.pointer.y + 4.0).abs() < 1e-6);
}

#[test]
fn update_is_idempotent_for_same_inputs() {
    let mut field = small_field();
    field.update(1.25, Vec2::new(0.3, 0.7), Viewport::new(9.0, 5.0));
    let first = *field.uniforms();
    field.update(1.25, Vec2::new(0.3, 0.7), Viewport::new(9.0, 5.0));
    assert_eq!(first, *field.uniforms());
}

#[test]
fn update_never_touches_buffers() {
    let mut field = small_field();
    let before = field.positions().to_vec();
    let phases = field.phases().to_vec();
    for i in 0..10 {
        field.update(i as f32, Vec2::new(0.1 * i as f32, -0.2), Viewport::new(10.0, 6.0));
    }
    assert_eq!(field.positions(), &before[..]);
    assert_eq!(field.initial_positions(), &before[..]);
    assert_eq!(field.phases(), &phases[..]);
}

#[test]
fn update_leaves_static_uniforms_alone() {
    let mut field = small_field();
    field.resize(800, 600);
    let before = *field.uniforms();
    field.update(3.0, Vec2::new(0.9, 0.9), Viewport::new(10.0, 6.0));
    let after = field.uniforms();
    assert_eq!(after.color, before.color);
    assert_eq!(after.active_color, before.active_color);
    assert_eq!(after.repulsion_radius, before.repulsion_radius);
    assert_eq!(after.repulsion_strength, before.repulsion_strength);
    assert_eq!(after.resolution, before.resolution);
}

#[test]
fn pointer_mapping_is_linear_in_viewport() {
    let ndc = Vec2::new(0.4, -0.6);
    let mut field = small_field();
    field.update(0.0, ndc, Viewport::new(10.0, 6.0));
    let base = field.uniforms().pointer;

    field.update(0.0, ndc, Viewport::new(20.0, 6.0));
    let wide = field.uniforms().pointer;
    assert!((wide.x - 2.0 * base.x).abs() < 1e-6);
    assert!((wide.y - base.y).abs() < 1e-6);

    field.update(0.0, ndc, Viewport::new(10.0, 12.0));
    let tall = field.uniforms().pointer;
    assert!((tall.x - base.x).abs() < 1e-6);
    assert!((tall.y - 2.0 * base.y).abs() < 1e-6);
}

#[test]
fn pointer_outside_ndc_range_is_not_clamped() {
    let mut field = small_field();
    field.update(0.0, Vec2::new(1.5, -2.0), Viewport::new(4.0, 2.0));
    assert!((field.uniforms().pointer.x - 3.0).abs() < 1e-6);
    assert!((field.uniforms().pointer.y + 2.0).abs() < 1e-6);
}

#[test]
fn resize_sets_pixel_resolution() {
    let mut field = small_field();
    field.resize(1920, 1080);
    assert_eq!(field.uniforms().resolution, Vec2::new(1920.0, 1080.0));
}

#[test]
fn base_color_is_linearized() {
    let cfg = FieldConfig::default()
        .with_count(1)
        .with_color(Rgb::new(0.5, 0.0, 1.0));
    let field = ParticleField::seeded(cfg, 2);
    let [r, g, b] = field.uniforms().color;
    assert!((r - 0.214).abs() < 1e-3);
    assert_eq!(g, 0.0);
    assert!((b - 1.0).abs() < 1e-6);
}

#[test]
fn surface_corners_and_center_map_to_ndc() {
    let near = |a: Vec2, b: Vec2| (a - b).length() < 1e-6;
    assert!(near(surface_to_ndc(0.0, 0.0, 800.0, 600.0).unwrap(), Vec2::new(-1.0, 1.0)));
    assert!(near(surface_to_ndc(800.0, 600.0, 800.0, 600.0).unwrap(), Vec2::new(1.0, -1.0)));
    assert!(near(surface_to_ndc(400.0, 300.0, 800.0, 600.0).unwrap(), Vec2::ZERO));
}

#[test]
fn points_outside_surface_fall_outside_unit_range() {
    let p = surface_to_ndc(-80.0, 900.0, 800.0, 600.0).unwrap();
    assert!(p.x < -1.0);
    assert!(p.y < -1.0);
}

#[test]
fn empty_surface_has_no_ndc() {
    assert!(surface_to_ndc(10.0, 10.0, 0.0, 600.0).is_none());
    assert!(surface_to_ndc(10.0, 10.0, 800.0, 0.0).is_none());
    assert!(surface_to_ndc(10.0, 10.0, -5.0, 600.0).is_none());
}
