/// In-memory command list
///
/// Records every primitive in issue order and keeps the vertex data in
/// contiguous buffers so a frame can be uploaded in one copy.

use glam::{Vec3, Vec4};
use crate::error::Result;
use super::command_list::{CommandList, DrawCommand};

/// Command list that records primitives instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingCommandList {
    /// Commands in issue order
    commands: Vec<DrawCommand>,
    /// Line end points, two per line
    line_vertices: Vec<Vec3>,
    /// Points packed as (x, y, z, size)
    points: Vec<Vec4>,
}

impl RecordingCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn line_count(&self) -> usize {
        self.line_vertices.len() / 2
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn line_vertices(&self) -> &[Vec3] {
        &self.line_vertices
    }

    pub fn points(&self) -> &[Vec4] {
        &self.points
    }

    /// Line vertex buffer as raw bytes (12 bytes per vertex)
    pub fn line_vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_vertices)
    }

    /// Point buffer as raw bytes (16 bytes per point)
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.points)
    }

    /// Drop all recorded data, keeping the allocations for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
        self.line_vertices.clear();
        self.points.clear();
    }
}

impl CommandList for RecordingCommandList {
    fn draw_line(&mut self, from: Vec3, to: Vec3) -> Result<()> {
        self.commands.push(DrawCommand::Line { from, to });
        self.line_vertices.push(from);
        self.line_vertices.push(to);
        Ok(())
    }

    fn draw_point(&mut self, position: Vec3, size: f32) -> Result<()> {
        self.commands.push(DrawCommand::Point { position, size });
        self.points.push(position.extend(size));
        Ok(())
    }
}

#[cfg(test)]
#[path = "recording_command_list_tests.rs"]
mod tests;
