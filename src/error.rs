use thiserror::Error;

/// Construction-time failures. Once the components exist, the frame loop
/// itself is infallible: bad per-event coordinates are absorbed where they
/// land, never propagated.
#[derive(Debug, Error)]
pub enum Error {
    #[error("dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("zoom factor must be positive, got {0}")]
    InvalidZoomFactor(f32),

    /// The batch mesh addresses its vertex buffer with `u16` indices, so a
    /// grid may hold at most `u16::MAX + 1` corner vertices.
    #[error("{width}x{height} cells need {vertices} vertices, too many for one indexed mesh")]
    MeshTooLarge {
        width: usize,
        height: usize,
        vertices: usize,
    },
}
