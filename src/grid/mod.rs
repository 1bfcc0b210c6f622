//! Structured-grid data model.
//!
//! This module provides the types a smoothing pass operates on: type-safe
//! node ids, position storage, and indexed access over 2-D patches and 3-D
//! blocks.
//!
//! # Overview
//!
//! Node identities and grid topology are owned by the surrounding
//! mesh-management system; a smoothing pass only mutates existing node
//! positions in place. The split mirrors that ownership:
//!
//! - [`NodeId`] - Identifies a node; generic over the index width
//!   ([`GridIndex`] trait, `u16`/`u32`/`u64`)
//! - [`MeshStore`] - Read/write access to node positions by id
//! - [`PatchGrid`] / [`BlockGrid`] - Indexed node lookup over a structured
//!   patch or block
//! - [`NodeStore`], [`StructuredPatch`], [`StructuredBlock`] - Ready-made
//!   implementations for standalone use
//!
//! # Construction
//!
//! ```
//! use gridrelax::grid::{NodeStore, StructuredPatch, PatchGrid, MeshStore};
//! use nalgebra::Point3;
//!
//! let mut store: NodeStore = NodeStore::new();
//! let patch = StructuredPatch::from_fn(4, 3, |i, j| {
//!     store.push(Point3::new(i as f64, j as f64, 0.0))
//! });
//!
//! assert_eq!(patch.extent(), (4, 3));
//! assert_eq!(store.position(patch.node_at(2, 1)).x, 2.0);
//! ```

mod index;
mod store;
mod structured;

pub use index::{GridIndex, NodeId};
pub use store::{MeshStore, NodeStore};
pub use structured::{BlockGrid, PatchGrid, StructuredBlock, StructuredPatch};
