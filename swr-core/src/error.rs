//! Error types for scene construction and surface management.
use std::collections::TryReserveError;
use thiserror::Error;

/// Container growth could not be performed.
///
/// Raised by the append operations on [`crate::Mesh`] and [`crate::Polygon`].
/// The container is left exactly as it was before the call.
#[derive(Debug, Error)]
#[error("geometry allocation failed: {0}")]
pub struct AllocationError(#[from] TryReserveError);

/// The frame buffer's backing storage could not be (re)created.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface creation failed: {0}")]
    Creation(#[from] TryReserveError),
}
