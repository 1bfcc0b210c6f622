//! Error types for gridrelax.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`SmoothError`].
pub type Result<T> = std::result::Result<T, SmoothError>;

/// Errors that can occur during grid construction or smoothing.
#[derive(Error, Debug)]
pub enum SmoothError {
    /// A stencil computation required a direction it could not normalize.
    ///
    /// Raised when a branch computation would have to normalize a zero-length
    /// (or non-finite) segment. Fully coincident stencils are handled without
    /// error; this variant is the firewall that keeps NaN out of the grid.
    #[error("degenerate stencil: {context}")]
    DegenerateStencil {
        /// Which computation hit the degenerate direction.
        context: &'static str,
    },

    /// The surface projector could not resolve a point.
    #[error("projection failed: {reason}")]
    Projection {
        /// Why the projector gave up (missing surface, numerical failure, ...).
        reason: String,
    },

    /// A grid's extents and node list disagree.
    #[error("grid extents require {expected} node ids, got {actual}")]
    NodeCountMismatch {
        /// Node count implied by the extents.
        expected: usize,
        /// Node count actually supplied.
        actual: usize,
    },

    /// A sweep over one grid of a batch failed.
    ///
    /// Wraps the underlying failure with the index of the grid within the
    /// batch and the sweep number that was being computed. Nothing from the
    /// failing sweep was committed; earlier sweeps and sibling grids keep
    /// their results.
    #[error("grid {grid}, sweep {sweep}: {source}")]
    SweepFailed {
        /// Index of the failing grid within the batch.
        grid: usize,
        /// Sweep number (0-based) that was being computed when the failure hit.
        sweep: usize,
        /// The underlying failure.
        #[source]
        source: Box<SmoothError>,
    },
}

impl SmoothError {
    /// Wrap an error with batch context: which grid, which sweep.
    pub(crate) fn in_sweep(self, grid: usize, sweep: usize) -> Self {
        SmoothError::SweepFailed {
            grid,
            sweep,
            source: Box::new(self),
        }
    }
}
