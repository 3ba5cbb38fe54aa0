/// Octree: a lazily subdivided spatial index over point-positioned objects.
///
/// Every node is a cube. A node is in one of three states:
/// - empty leaf: no octants, no occupant
/// - occupied leaf: no octants, exactly one occupant
/// - internal: 8 octants, no occupant of its own
///
/// A leaf splits only when a second object lands in it. Octants are never
/// merged back, so removal leaves the tree shape untouched.
///
/// Objects are routed by [`Octant::locate`] against the node's midpoint and
/// are not bounds-checked: a position outside the root still lands in the
/// boundary octant picked by the comparisons. Repeated splitting is capped by
/// `max_depth`; `add` fails with `Error::DepthExceeded` instead of recursing
/// without bound when two objects cannot be separated.

use glam::Vec3;
use crate::error::{Error, InsertError, Result};
use crate::render::CommandList;
use crate::{octree_bail, octree_debug, octree_trace};
use super::config::OctreeConfig;
use super::cube::Cube;
use super::octant::Octant;
use super::traits::{Drawable, Positioned};

const SOURCE: &str = "particle_octree::Octree";

/// Structural state of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    EmptyLeaf,
    OccupiedLeaf,
    Internal,
}

/// Shape summary of a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OctreeStats {
    /// Total node count, including the root
    pub nodes: usize,
    /// Nodes without octants
    pub leaves: usize,
    /// Leaves holding an occupant
    pub occupied_leaves: usize,
    /// Largest node depth in the subtree
    pub deepest: u32,
}

/// A node of the octree; the root and every octant share this type.
#[derive(Debug)]
pub struct Octree<O> {
    /// Region covered by this node
    bounds: Cube,
    /// Split point, `origin + dimensions / 2`
    mid: Vec3,
    /// Distance from the root
    depth: u32,
    /// Deepest level any node of this tree may reach
    max_depth: u32,
    /// Whether this node's own wireframe is drawn
    draw_enabled: bool,
    /// Children in octant index order (None = leaf)
    octants: Option<Box<[Octree<O>; 8]>>,
    /// Stored object (leaves only)
    occupant: Option<O>,
}

impl<O> Octree<O> {
    /// Create an empty root at depth 0 with the default configuration.
    ///
    /// # Errors
    ///
    /// `Error::InvalidGeometry` if an extent is not strictly positive or a
    /// component is not finite.
    pub fn new(origin: Vec3, dimensions: Vec3) -> Result<Self> {
        Self::with_config(origin, dimensions, 0, OctreeConfig::default())
    }

    /// Create an empty node at the given depth with the default configuration.
    pub fn with_depth(origin: Vec3, dimensions: Vec3, depth: u32) -> Result<Self> {
        Self::with_config(origin, dimensions, depth, OctreeConfig::default())
    }

    /// Create an empty node.
    ///
    /// # Arguments
    ///
    /// * `origin` - Minimum corner
    /// * `dimensions` - Extent per axis, strictly positive
    /// * `depth` - Depth of this node (0 for a root)
    /// * `config` - Depth limit and initial draw flag
    ///
    /// # Errors
    ///
    /// - `Error::InvalidGeometry` for non-positive or non-finite geometry
    /// - `Error::DepthExceeded` if `depth` is already past `config.max_depth`
    pub fn with_config(
        origin: Vec3,
        dimensions: Vec3,
        depth: u32,
        config: OctreeConfig,
    ) -> Result<Self> {
        let bounds = Cube::new(origin, dimensions)?;
        if dimensions.min_element() <= 0.0 {
            octree_bail!(
                SOURCE,
                Error::InvalidGeometry(format!(
                    "octree dimensions {} must be strictly positive",
                    dimensions
                ))
            );
        }
        if depth > config.max_depth {
            octree_bail!(SOURCE, Error::DepthExceeded { max_depth: config.max_depth });
        }

        octree_debug!(
            SOURCE,
            "Created octree at {} with dimensions {} (depth {}, max depth {})",
            origin, dimensions, depth, config.max_depth
        );

        Ok(Self::node(bounds, depth, config.max_depth, config.draw_enabled))
    }

    fn node(bounds: Cube, depth: u32, max_depth: u32, draw_enabled: bool) -> Self {
        Self {
            mid: bounds.center(),
            bounds,
            depth,
            max_depth,
            draw_enabled,
            octants: None,
            occupant: None,
        }
    }

    // ===== ACCESSORS =====

    pub fn bounds(&self) -> &Cube {
        &self.bounds
    }

    pub fn origin(&self) -> Vec3 {
        self.bounds.origin()
    }

    pub fn dimensions(&self) -> Vec3 {
        self.bounds.dimensions()
    }

    pub fn mid(&self) -> Vec3 {
        self.mid
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn is_draw_enabled(&self) -> bool {
        self.draw_enabled
    }

    pub fn state(&self) -> NodeState {
        match (&self.octants, &self.occupant) {
            (Some(_), _) => NodeState::Internal,
            (None, Some(_)) => NodeState::OccupiedLeaf,
            (None, None) => NodeState::EmptyLeaf,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.octants.is_none()
    }

    /// Object held directly by this node (always None for internal nodes).
    pub fn occupant(&self) -> Option<&O> {
        self.occupant.as_ref()
    }

    /// Children in octant index order, if this node has split.
    pub fn octants(&self) -> Option<&[Octree<O>; 8]> {
        self.octants.as_deref()
    }

    pub fn octant(&self, octant: Octant) -> Option<&Octree<O>> {
        self.octants.as_deref().map(|octants| &octants[octant.index()])
    }

    /// Octant of this node that `position` routes to.
    pub fn locate_octant(&self, position: Vec3) -> Octant {
        Octant::locate(self.mid, position)
    }

    /// Stored objects, depth-first in octant index order.
    pub fn occupants(&self) -> Occupants<'_, O> {
        Occupants { stack: vec![self] }
    }

    /// Number of stored objects in the subtree.
    pub fn len(&self) -> usize {
        self.occupants().count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants().next().is_none()
    }

    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        self.accumulate_stats(&mut stats);
        stats
    }

    fn accumulate_stats(&self, stats: &mut OctreeStats) {
        stats.nodes += 1;
        stats.deepest = stats.deepest.max(self.depth);
        match self.octants.as_deref() {
            Some(octants) => {
                for octant in octants.iter() {
                    octant.accumulate_stats(stats);
                }
            }
            None => {
                stats.leaves += 1;
                if self.occupant.is_some() {
                    stats.occupied_leaves += 1;
                }
            }
        }
    }

    // ===== DRAW FLAG =====

    /// Show or hide the wireframe of this node and every existing descendant.
    ///
    /// Octants created by later splits copy the flag of their parent at
    /// split time. Occupants are not affected.
    pub fn enable_draw(&mut self, enabled: bool) {
        self.draw_enabled = enabled;
        if let Some(octants) = self.octants.as_deref_mut() {
            for octant in octants.iter_mut() {
                octant.enable_draw(enabled);
            }
        }
    }
}

impl<O: Positioned> Octree<O> {
    /// Insert an object, splitting the leaf it lands in if that leaf is occupied.
    ///
    /// # Errors
    ///
    /// `Error::DepthExceeded` if the object and the occupant it collides with
    /// fall in the same octant at every level down to `max_depth` (e.g. equal
    /// positions). The tree is left unchanged and the object comes back in
    /// the `InsertError`.
    pub fn add(&mut self, object: O) -> std::result::Result<(), InsertError<O>> {
        let position = object.position();
        let octant = self.locate_octant(position);

        if let Some(octants) = self.octants.as_deref_mut() {
            return octants[octant.index()].add(object);
        }

        let Some(existing) = self.occupant.as_ref().map(|occupant| occupant.position()) else {
            if !self.bounds.contains_point(position) {
                octree_trace!(
                    SOURCE,
                    "Object at {} stored outside node bounds {}..{} (depth {})",
                    position, self.bounds.origin(), self.bounds.max(), self.depth
                );
            }
            self.occupant = Some(object);
            return Ok(());
        };

        if let Err(error) = self.check_separable(existing, position) {
            return Err(InsertError::new(error, object));
        }
        self.split();
        self.add(object)
    }

    /// Remove the stored object equal to `object`, found by its current position.
    ///
    /// Returns the removed object, or None if the leaf that position routes to
    /// does not hold it (never inserted, already removed, or moved since
    /// insertion). The tree shape is never compacted.
    ///
    /// "Equal" is whatever `O: PartialEq` says. `Particle` compares ids, so
    /// only that particle (or a clone of it) matches. A type with structural
    /// equality such as `Cube` matches any value-equal object stored at that
    /// position; give such types an id field when identity matters.
    pub fn remove(&mut self, object: &O) -> Option<O>
    where
        O: PartialEq,
    {
        let octant = self.locate_octant(object.position());

        if let Some(octants) = self.octants.as_deref_mut() {
            return octants[octant.index()].remove(object);
        }

        if self.occupant.as_ref() == Some(object) {
            return self.occupant.take();
        }

        octree_trace!(
            SOURCE,
            "No matching occupant for object at {} (depth {})",
            object.position(), self.depth
        );
        None
    }

    /// Look up the stored object equal to `object`, navigating like [`Octree::remove`].
    pub fn find(&self, object: &O) -> Option<&O>
    where
        O: PartialEq,
    {
        match self.octants.as_deref() {
            Some(octants) => octants[self.locate_octant(object.position()).index()].find(object),
            None => self.occupant.as_ref().filter(|occupant| *occupant == object),
        }
    }

    /// Turn this occupied leaf into an internal node.
    ///
    /// Creates the 8 octants (one level deeper, same draw flag) and moves the
    /// occupant into the octant its position routes to.
    fn split(&mut self) {
        let origin = self.bounds.origin();
        let half = self.bounds.dimensions() * 0.5;
        let depth = self.depth + 1;

        let octants: [Octree<O>; 8] = std::array::from_fn(|i| {
            let octant = Octant::ALL[i];
            Octree::node(
                Cube::from_parts(origin + half * octant.offset(), half),
                depth,
                self.max_depth,
                self.draw_enabled,
            )
        });
        let mut octants = Box::new(octants);

        // Fresh octants are empty leaves
        if let Some(occupant) = self.occupant.take() {
            let index = self.locate_octant(occupant.position()).index();
            octants[index].occupant = Some(occupant);
        }
        self.octants = Some(octants);

        octree_trace!(
            SOURCE,
            "Split node at {} (depth {}) into octants of {}",
            origin, self.depth, half
        );
    }

    /// Walk the splits that `a` and `b` would trigger from this node and
    /// fail if they still share an octant at `max_depth`.
    fn check_separable(&self, a: Vec3, b: Vec3) -> Result<()> {
        let mut origin = self.bounds.origin();
        let mut dimensions = self.bounds.dimensions();
        let mut depth = self.depth;

        loop {
            if depth >= self.max_depth {
                octree_debug!(
                    SOURCE,
                    "Objects at {} and {} share a cell at depth {}",
                    a, b, depth
                );
                octree_bail!(SOURCE, Error::DepthExceeded { max_depth: self.max_depth });
            }

            let mid = origin + dimensions * 0.5;
            let octant = Octant::locate(mid, a);
            if octant != Octant::locate(mid, b) {
                return Ok(());
            }

            dimensions *= 0.5;
            origin += dimensions * octant.offset();
            depth += 1;
        }
    }
}

impl<O> Positioned for Octree<O> {
    fn position(&self) -> Vec3 {
        self.bounds.origin()
    }
}

impl<O: Drawable> Drawable for Octree<O> {
    /// Own wireframe (if enabled), then the octants in index order, or the
    /// occupant of a leaf.
    fn draw(&self, cmd: &mut dyn CommandList) -> Result<()> {
        if self.draw_enabled {
            self.bounds.draw(cmd)?;
        }

        if let Some(octants) = self.octants.as_deref() {
            for octant in octants.iter() {
                octant.draw(cmd)?;
            }
        } else if let Some(occupant) = &self.occupant {
            occupant.draw(cmd)?;
        }

        Ok(())
    }
}

// ===== OCCUPANT ITERATOR =====

/// Depth-first iterator over the objects stored in a subtree.
pub struct Occupants<'a, O> {
    stack: Vec<&'a Octree<O>>,
}

impl<'a, O> Iterator for Occupants<'a, O> {
    type Item = &'a O;

    fn next(&mut self) -> Option<&'a O> {
        while let Some(node) = self.stack.pop() {
            match node.octants.as_deref() {
                // Reversed so octant 0 is popped first
                Some(octants) => self.stack.extend(octants.iter().rev()),
                None => {
                    if let Some(occupant) = node.occupant.as_ref() {
                        return Some(occupant);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
