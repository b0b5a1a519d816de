//! Error types for the treemap rendering core.

use thiserror::Error;

/// Failures the rendering core surfaces to the host.
///
/// Per the core's error-handling design, almost everything that can go wrong
/// (degenerate rectangles, zero-sized items, hit-test misses) is handled by a
/// narrow, silent rule rather than a `Result` — see the `driver` and
/// `hittest` modules. The one case that is a genuine fatal failure is running
/// out of memory for the off-screen pixel buffer.
#[derive(Error, Debug)]
pub enum TreemapError {
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    BufferAllocation { width: u32, height: u32 },
}

/// Result type alias for treemap core operations.
pub type Result<T> = std::result::Result<T, TreemapError>;
