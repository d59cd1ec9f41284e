use glam::Vec3;
use rand::prelude::*;

/// Fixed-size particle storage in structure-of-arrays layout.
///
/// `positions` and `initial_positions` hold three floats per particle,
/// `phases` one. Index `i` in every buffer refers to the same particle. The
/// buffers are written once here and only read afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleSet {
    positions: Vec<f32>,
    initial_positions: Vec<f32>,
    phases: Vec<f32>,
}

impl ParticleSet {
    /// Draw `count` particles uniformly from the box `[-h, h)` per axis, each
    /// with a phase in `[0, 1)`.
    pub fn generate<R: Rng + ?Sized>(count: usize, half_extents: Vec3, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut phases = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(spread(rng, half_extents.x));
            positions.push(spread(rng, half_extents.y));
            positions.push(spread(rng, half_extents.z));
            phases.push(rng.gen::<f32>());
        }
        Self {
            initial_positions: positions.clone(),
            positions,
            phases,
        }
    }

    pub fn seeded(count: usize, half_extents: Vec3, seed: u64) -> Self {
        Self::generate(count, half_extents, &mut StdRng::seed_from_u64(seed))
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn initial_positions(&self) -> &[f32] {
        &self.initial_positions
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions
            .get(index * 3..index * 3 + 3)
            .map(Vec3::from_slice)
    }

    pub fn phase(&self, index: usize) -> Option<f32> {
        self.phases.get(index).copied()
    }
}

// (rand() - 0.5) * 2h, so the extent is a half-open interval
#[inline]
fn spread<R: Rng + ?Sized>(rng: &mut R, half_extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half_extent
}
