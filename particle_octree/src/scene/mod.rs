//! Scene module
//!
//! Provides the capability traits shared by everything placed in a scene,
//! the bounding-cube geometry, the particle object and the octree spatial
//! index that organises them.

mod traits;
mod octant;
mod cube;
mod particle;
mod config;
mod octree;

pub use traits::{Positioned, Drawable, Updatable, GameObject};
pub use octant::Octant;
pub use cube::{Cube, CUBE_EDGES};
pub use particle::{Particle, ParticleId, PARTICLE_SIZE};
pub use config::{OctreeConfig, DEFAULT_MAX_DEPTH};
pub use octree::{Octree, NodeState, OctreeStats, Occupants};
