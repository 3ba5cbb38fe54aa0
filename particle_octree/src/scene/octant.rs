/// Octant codes for the 8-way split of a cube.
///
/// Each axis contributes one bit: X = 4, Y = 2, Z = 1, so the octant index
/// is `4*x + 2*y + z`. A bit is set when the coordinate lies on the upper
/// side of the split plane.

use bitflags::bitflags;
use glam::Vec3;

bitflags! {
    /// One of the 8 sub-cubes of a node, as a set of "upper half" axis bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Octant: u8 {
        const Z = 0b001;
        const Y = 0b010;
        const X = 0b100;
    }
}

impl Octant {
    /// Number of octants in a split node.
    pub const COUNT: usize = 8;

    /// Every octant, in index order. Not to be confused with `all()`, the
    /// bitflags set with every axis bit on (octant 7).
    pub const ALL: [Octant; 8] = [
        Octant::from_bits_retain(0),
        Octant::from_bits_retain(1),
        Octant::from_bits_retain(2),
        Octant::from_bits_retain(3),
        Octant::from_bits_retain(4),
        Octant::from_bits_retain(5),
        Octant::from_bits_retain(6),
        Octant::from_bits_retain(7),
    ];

    /// Octant of `position` relative to the split point `mid`.
    ///
    /// Coordinates equal to `mid` go to the upper side. Total over all
    /// inputs: a NaN coordinate compares false and takes the lower side.
    pub fn locate(mid: Vec3, position: Vec3) -> Self {
        let mut octant = Octant::empty();
        octant.set(Octant::X, position.x >= mid.x);
        octant.set(Octant::Y, position.y >= mid.y);
        octant.set(Octant::Z, position.z >= mid.z);
        octant
    }

    /// Octant for an index in `0..8`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Octant::from_bits_truncate(index as u8))
        } else {
            None
        }
    }

    /// Index in `0..8` (`4*x + 2*y + z`).
    pub fn index(self) -> usize {
        self.bits() as usize
    }

    /// 0.0 or 1.0 per axis.
    pub fn offset(self) -> Vec3 {
        Vec3::new(
            if self.contains(Octant::X) { 1.0 } else { 0.0 },
            if self.contains(Octant::Y) { 1.0 } else { 0.0 },
            if self.contains(Octant::Z) { 1.0 } else { 0.0 },
        )
    }

    /// Iterator over [`Octant::ALL`].
    pub fn each() -> impl Iterator<Item = Octant> {
        Self::ALL.into_iter()
    }
}

#[cfg(test)]
#[path = "octant_tests.rs"]
mod tests;
