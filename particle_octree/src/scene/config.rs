/// Octree configuration.

/// Default maximum depth: one level per bit of f32 mantissa precision.
///
/// Below that, the split point of a unit cube can no longer separate
/// neighbouring floats.
pub const DEFAULT_MAX_DEPTH: u32 = 24;

/// Settings shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctreeConfig {
    /// Deepest level a node may reach (root = 0)
    pub max_depth: u32,
    /// Initial wireframe visibility of the root; children copy the parent's flag
    pub draw_enabled: bool,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            draw_enabled: false,
        }
    }
}

impl OctreeConfig {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_draw_enabled(mut self, draw_enabled: bool) -> Self {
        self.draw_enabled = draw_enabled;
        self
    }
}
