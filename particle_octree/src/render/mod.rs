//! Draw command module
//!
//! Everything drawable in the crate records primitives into a [`CommandList`].
//! The caller decides what a command list does with them (immediate-mode GL,
//! a GPU vertex buffer, or an in-memory recording for tests).

mod command_list;
mod recording_command_list;

pub use command_list::{CommandList, DrawCommand};
pub use recording_command_list::RecordingCommandList;
