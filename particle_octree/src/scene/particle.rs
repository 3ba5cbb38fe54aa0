/// Static point particle.

use std::sync::atomic::{AtomicU64, Ordering};
use glam::Vec3;
use crate::error::Result;
use crate::render::CommandList;
use super::traits::{Drawable, Positioned, Updatable};

/// Default point diameter in pixels.
pub const PARTICLE_SIZE: f32 = 5.0;

static NEXT_PARTICLE_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique particle identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(u64);

impl ParticleId {
    fn next() -> Self {
        Self(NEXT_PARTICLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// A point in space drawn as a round sprite.
///
/// Equality is identity: particles compare by [`ParticleId`], so two
/// particles at the same position are distinct while a clone stands for
/// its original (e.g. as a removal handle).
#[derive(Debug, Clone)]
pub struct Particle {
    id: ParticleId,
    position: Vec3,
    size: f32,
}

impl Particle {
    pub fn new(position: Vec3) -> Self {
        Self::with_size(position, PARTICLE_SIZE)
    }

    pub fn with_size(position: Vec3, size: f32) -> Self {
        Self { id: ParticleId::next(), position, size }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Move the particle.
    ///
    /// A particle stored in an octree is found by its current position, so
    /// move it only while it is out of the tree (remove, move, add).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

impl PartialEq for Particle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Particle {}

impl Positioned for Particle {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl Drawable for Particle {
    fn draw(&self, cmd: &mut dyn CommandList) -> Result<()> {
        cmd.draw_point(self.position, self.size)
    }
}

impl Updatable for Particle {
    // Particles are static
    fn update(&mut self, _dt: f32) {}
}

#[cfg(test)]
#[path = "particle_tests.rs"]
mod tests;
