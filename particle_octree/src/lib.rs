/*!
# Particle Octree

Spatial index and draw traversal for a scene of static point particles.

The crate is renderer-agnostic: everything that draws records primitives into a
caller-supplied [`CommandList`](crate::render::CommandList). The caller owns the
render loop, the graphics context and the frame clearing; the octree only needs
a position and a draw capability from each object it stores.

## Architecture

- **Octree**: cube-shaped node that splits lazily into 8 octants
- **Cube**: axis-aligned bounding volume drawn as a 12-edge wireframe
- **Particle**: static point object stored in the tree
- **CommandList**: sink for line and point primitives
- **Logger**: pluggable logging backend used by the `octree_*!` macros
*/

// Internal modules
mod error;
pub mod log;
pub mod render;
pub mod scene;

// Main namespace module
pub mod octree3d {
    // Error types
    pub use crate::error::{Error, InsertError, Result};

    // Logging facade and types (macros are exported at the crate root)
    pub use crate::log::Log;
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Draw command sub-module
    pub mod render {
        pub use crate::render::*;
    }

    // Scene sub-module: geometry, stored objects and the octree
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
