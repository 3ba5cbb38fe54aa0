/// Capability traits for scene objects.
///
/// Drawing and spatial position are independent capabilities: the octree
/// needs both from what it stores, and implements both itself so callers
/// can treat tree nodes and occupants uniformly.

use glam::Vec3;
use crate::error::Result;
use crate::render::CommandList;

/// Object with a position in world space.
pub trait Positioned {
    fn position(&self) -> Vec3;
}

/// Object that can record itself into a command list.
pub trait Drawable {
    /// Record this object's primitives.
    fn draw(&self, cmd: &mut dyn CommandList) -> Result<()>;
}

/// Object advanced once per frame.
pub trait Updatable {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);
}

/// Full scene object: positioned, drawable and updatable.
pub trait GameObject: Positioned + Drawable + Updatable {}

impl<T: Positioned + Drawable + Updatable> GameObject for T {}
