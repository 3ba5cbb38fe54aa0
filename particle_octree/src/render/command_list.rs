/// Command list trait for recording draw primitives
///
/// Defines the interface between drawable objects and the backend that
/// renders them. Implementations are free to draw immediately or to batch.

use glam::Vec3;
use crate::error::Result;

/// A single recorded primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Line segment between two points
    Line { from: Vec3, to: Vec3 },
    /// Round point sprite
    Point { position: Vec3, size: f32 },
}

/// Sink for line and point primitives
///
/// A returned error aborts the traversal that issued the command.
pub trait CommandList {
    /// Record a line segment
    ///
    /// # Arguments
    ///
    /// * `from` - First end point (world space)
    /// * `to` - Second end point (world space)
    fn draw_line(&mut self, from: Vec3, to: Vec3) -> Result<()>;

    /// Record a point
    ///
    /// # Arguments
    ///
    /// * `position` - Point position (world space)
    /// * `size` - Point diameter in pixels
    fn draw_point(&mut self, position: Vec3, size: f32) -> Result<()>;

    /// Record a [`DrawCommand`] by dispatching to the matching primitive
    fn record(&mut self, command: DrawCommand) -> Result<()> {
        match command {
            DrawCommand::Line { from, to } => self.draw_line(from, to),
            DrawCommand::Point { position, size } => self.draw_point(position, size),
        }
    }
}
