//! Error types for the particle octree
//!
//! This module defines the error type shared by geometry construction,
//! octree insertion and draw command recording.

use std::fmt;

/// Result type for particle octree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Particle octree errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Degenerate or non-finite geometry (origin, dimensions)
    InvalidGeometry(String),

    /// A node would have to split beyond the configured maximum depth
    DepthExceeded {
        /// Deepest level a node may reach
        max_depth: u32,
    },

    /// Draw backend failed to record a primitive
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            Error::DepthExceeded { max_depth } => {
                write!(f, "Maximum octree depth exceeded (max depth {})", max_depth)
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Rejected insertion: the error plus the object, handed back to the caller
///
/// Mirrors `std::sync::mpsc::SendError`: a failed `Octree::add` never drops
/// the object it was given.
pub struct InsertError<O> {
    /// Why the object was rejected
    pub error: Error,

    /// The object passed to `add`
    pub object: O,
}

impl<O> InsertError<O> {
    pub fn new(error: Error, object: O) -> Self {
        Self { error, object }
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Take the rejected object back
    pub fn into_object(self) -> O {
        self.object
    }

    pub fn into_parts(self) -> (Error, O) {
        (self.error, self.object)
    }
}

// Manual impls so O needs no Debug/Display of its own
impl<O> fmt::Debug for InsertError<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<O> fmt::Display for InsertError<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insertion rejected: {}", self.error)
    }
}

impl<O> std::error::Error for InsertError<O> {}

impl<O> From<InsertError<O>> for Error {
    fn from(err: InsertError<O>) -> Self {
        err.error
    }
}

// ===== ERROR MACROS =====

/// Log an error at ERROR severity and evaluate to it
///
/// # Example
///
/// ```no_run
/// # use particle_octree::octree3d::{Error, Result};
/// # fn check(ok: bool) -> Result<()> {
/// let error = particle_octree::octree_err!(
///     "particle_octree::Cube",
///     Error::InvalidGeometry("negative extent".to_string())
/// );
/// # Err(error)
/// # }
/// ```
#[macro_export]
macro_rules! octree_err {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::octree_error!($source, "{}", error);
        error
    }};
}

/// Log an error at ERROR severity and return it from the current function
#[macro_export]
macro_rules! octree_bail {
    ($source:expr, $error:expr) => {
        return Err($crate::octree_err!($source, $error))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
