// Particle set generation: buffer shapes, bounds and reproducibility.

use field_core::ParticleSet;
use glam::Vec3;

const HALF: Vec3 = Vec3::new(7.5, 5.0, 2.5);

#[test]
fn buffer_lengths_follow_count() {
    for n in [0usize, 1, 7, 100, 15_000] {
        let set = ParticleSet::seeded(n, HALF, 3);
        assert_eq!(set.len(), n);
        assert_eq!(set.positions().len(), 3 * n);
        assert_eq!(set.initial_positions().len(), 3 * n);
        assert_eq!(set.phases().len(), n);
    }
}

#[test]
fn empty_set_is_valid() {
    let set = ParticleSet::seeded(0, HALF, 1);
    assert!(set.is_empty());
    assert_eq!(set.position(0), None);
    assert_eq!(set.phase(0), None);
}

#[test]
fn positions_stay_inside_spawn_box() {
    let set = ParticleSet::seeded(15_000, HALF, 42);
    for chunk in set.positions().chunks_exact(3) {
        assert!(chunk[0].abs() <= HALF.x, "x out of range: {}", chunk[0]);
        assert!(chunk[1].abs() <= HALF.y, "y out of range: {}", chunk[1]);
        assert!(chunk[2].abs() <= HALF.z, "z out of range: {}", chunk[2]);
    }
}

#[test]
fn phases_are_in_unit_interval() {
    let set = ParticleSet::seeded(15_000, HALF, 42);
    assert!(set.phases().iter().all(|p| (0.0..1.0).contains(p)));
}

#[test]
fn axes_use_independent_extents() {
    let half = Vec3::new(10.0, 0.0, 1.0);
    let set = ParticleSet::seeded(2_000, half, 9);
    let max_x = set
        .positions()
        .chunks_exact(3)
        .map(|c| c[0].abs())
        .fold(0.0f32, f32::max);
    assert!(max_x > 5.0, "x spread should use its own extent, max {max_x}");
    assert!(set.positions().chunks_exact(3).all(|c| c[1] == 0.0));
    assert!(set.positions().chunks_exact(3).all(|c| c[2].abs() <= 1.0));
}

#[test]
fn initial_positions_match_positions_at_creation() {
    let set = ParticleSet::seeded(500, HALF, 11);
    assert_eq!(set.positions(), set.initial_positions());
}

#[test]
fn same_seed_same_particles() {
    let a = ParticleSet::seeded(256, HALF, 1234);
    let b = ParticleSet::seeded(256, HALF, 1234);
    let c = ParticleSet::seeded(256, HALF, 1235);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn index_accessors_line_up_across_buffers() {
    let set = ParticleSet::seeded(10, HALF, 5);
    for i in 0..set.len() {
        let p = set.position(i).unwrap();
        assert_eq!(p.to_array(), set.positions()[i * 3..i * 3 + 3]);
        assert_eq!(set.phase(i).unwrap(), set.phases()[i]);
    }
}
