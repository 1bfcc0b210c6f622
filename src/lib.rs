//! # gridrelax
//!
//! Structured-grid mesh relaxation for block-structured meshing pipelines.
//!
//! gridrelax repositions the interior nodes of structured surface patches
//! and hexahedral blocks to even out node spacing, while every boundary
//! node stays exactly where the surrounding curve network or block faces
//! put it. Two methods are provided:
//!
//! - **Laplacian smoothing**: each node moves to the mean of its four axis
//!   neighbors, then snaps back onto the patch's target surface.
//! - **Line-sweeping (Yao) smoothing**: each node moves to the average of
//!   equal-arc-length midpoints taken along each grid direction, in a 2-D
//!   surface-constrained form and a 3-D volumetric form.
//!
//! Both run fixed-count Jacobi sweeps: new positions are computed from a
//! pre-sweep snapshot and committed together, so results never depend on
//! traversal order and parallel execution is numerically identical to
//! sequential.
//!
//! ## Quick Start
//!
//! ```
//! use gridrelax::prelude::*;
//! use nalgebra::Point3;
//!
//! // Node positions live in a store; grids only hold node ids.
//! let mut store: NodeStore = NodeStore::new();
//! let patch = StructuredPatch::from_fn(5, 5, |i, j| {
//!     store.push(Point3::new(i as f64, j as f64, 0.0))
//! });
//!
//! // Drag an interior node out of place, then relax.
//! store.set_position(patch.node_at(2, 2), Point3::new(1.3, 2.8, 0.0));
//!
//! let options = SmoothOptions::default().with_iterations(25);
//! yao_smooth(&mut store, &[patch], &IdentityProjector, &options).unwrap();
//! ```
//!
//! ## Plugging in a geometry kernel
//!
//! Surface-constrained smoothing needs a way to snap free-floating points
//! back onto the target surface. Implement [`SurfaceProjector`] for your
//! kernel handle, or pass a closure:
//!
//! ```
//! use gridrelax::prelude::*;
//! use nalgebra::Point3;
//!
//! # let mut store: NodeStore = NodeStore::new();
//! # let patch = StructuredPatch::from_fn(4, 4, |i, j| {
//! #     store.push(Point3::new(i as f64, j as f64, 0.0))
//! # });
//! // A cylinder of radius 2 around the z axis.
//! let cylinder = |p: &Point3<f64>| -> gridrelax::Result<Point3<f64>> {
//!     let r = (p.x * p.x + p.y * p.y).sqrt();
//!     if r == 0.0 {
//!         return Err(SmoothError::Projection {
//!             reason: "point on the cylinder axis".to_string(),
//!         });
//!     }
//!     Ok(Point3::new(2.0 * p.x / r, 2.0 * p.y / r, p.z))
//! };
//!
//! let options = SmoothOptions::default();
//! laplacian_smooth(&mut store, &[patch], &cylinder, &options).unwrap();
//! ```
//!
//! ## External mesh storage
//!
//! [`NodeStore`] is a plain Vec-backed arena; mesh systems with their own
//! node storage implement [`MeshStore`] (and [`PatchGrid`]/[`BlockGrid`]
//! for their grids) and the smoothers operate on them directly, by node id,
//! without copying the mesh.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod grid;
pub mod project;

pub use error::{Result, SmoothError};

/// Prelude module for convenient imports.
///
/// ```
/// use gridrelax::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        branch_midpoint, face_midpoint, laplacian_smooth, laplacian_smooth_with_observer,
        yao_smooth, yao_smooth_volume, yao_smooth_volume_with_observer, yao_smooth_with_observer,
        SmoothOptions, SweepObserver,
    };
    pub use crate::error::{Result, SmoothError};
    pub use crate::grid::{
        BlockGrid, GridIndex, MeshStore, NodeId, NodeStore, PatchGrid, StructuredBlock,
        StructuredPatch,
    };
    pub use crate::project::{IdentityProjector, PlaneProjector, SurfaceProjector};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_patch_and_block_end_to_end() {
        let mut store: NodeStore = NodeStore::new();
        let patch = StructuredPatch::from_fn(5, 4, |i, j| {
            store.push(Point3::new(i as f64, j as f64, 0.0))
        });
        let block = StructuredBlock::from_fn(4, 4, 4, |i, j, k| {
            store.push(Point3::new(i as f64, j as f64, 10.0 + k as f64))
        });

        store.set_position(patch.node_at(2, 1), Point3::new(1.6, 1.4, 0.0));
        store.set_position(block.node_at(1, 2, 2), Point3::new(1.4, 1.7, 12.3));

        let options = SmoothOptions::default().with_iterations(3);
        yao_smooth(&mut store, &[patch], &IdentityProjector, &options).unwrap();
        yao_smooth_volume(&mut store, &[block], &options).unwrap();

        for p in store.positions() {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
    }
}
