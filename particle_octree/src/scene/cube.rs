/// Axis-aligned bounding cube.
///
/// Stored as a minimum corner (`origin`) plus per-axis extents
/// (`dimensions`), so it also covers non-uniform boxes. Draws as a
/// 12-edge wireframe.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::octree_err;
use crate::render::CommandList;
use super::octant::Octant;
use super::traits::{Drawable, Positioned, Updatable};

/// Wireframe edges as pairs of vertex indices.
///
/// Each pair joins two corners that differ in exactly one coordinate.
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (1, 3),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    origin: Vec3,
    dimensions: Vec3,
    /// Corner `4*xi + 2*yi + zi`, each index picking min (0) or max (1) on its axis
    vertices: [Vec3; 8],
}

impl Cube {
    /// Create a cube from its minimum corner and extents.
    ///
    /// # Errors
    ///
    /// `Error::InvalidGeometry` if a component is not finite or an extent is negative.
    pub fn new(origin: Vec3, dimensions: Vec3) -> Result<Self> {
        if !origin.is_finite() || !dimensions.is_finite() {
            return Err(octree_err!(
                "particle_octree::Cube",
                Error::InvalidGeometry(format!(
                    "origin {} and dimensions {} must be finite",
                    origin, dimensions
                ))
            ));
        }
        if dimensions.min_element() < 0.0 {
            return Err(octree_err!(
                "particle_octree::Cube",
                Error::InvalidGeometry(format!("dimensions {} must not be negative", dimensions))
            ));
        }
        Ok(Self::from_parts(origin, dimensions))
    }

    /// Build without validation; callers guarantee finite, non-negative extents.
    pub(crate) fn from_parts(origin: Vec3, dimensions: Vec3) -> Self {
        let vertices = std::array::from_fn(|i| {
            origin + dimensions * Octant::ALL[i].offset()
        });
        Self { origin, dimensions, vertices }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.origin + self.dimensions
    }

    pub fn center(&self) -> Vec3 {
        self.origin + self.dimensions * 0.5
    }

    pub fn volume(&self) -> f32 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    pub fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    pub fn edges(&self) -> &'static [(usize, usize); 12] {
        &CUBE_EDGES
    }

    /// Half-open containment: `origin <= p < origin + dimensions` on every axis.
    ///
    /// Matches the octant tie-break, so a point on a shared face belongs to
    /// the upper cube only.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.origin).all() && point.cmplt(self.max()).all()
    }

    /// Volume shared with `other` (0 when they only touch).
    pub fn intersection_volume(&self, other: &Cube) -> f32 {
        let overlap = (self.max().min(other.max()) - self.origin.max(other.origin)).max(Vec3::ZERO);
        overlap.x * overlap.y * overlap.z
    }
}

impl Positioned for Cube {
    fn position(&self) -> Vec3 {
        self.origin
    }
}

impl Drawable for Cube {
    fn draw(&self, cmd: &mut dyn CommandList) -> Result<()> {
        for &(a, b) in CUBE_EDGES.iter() {
            cmd.draw_line(self.vertices[a], self.vertices[b])?;
        }
        Ok(())
    }
}

impl Updatable for Cube {
    // Static geometry
    fn update(&mut self, _dt: f32) {}
}

#[cfg(test)]
#[path = "cube_tests.rs"]
mod tests;
