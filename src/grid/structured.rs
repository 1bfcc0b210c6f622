//! Structured patches and blocks.
//!
//! A structured grid addresses its nodes by 2 or 3 integer indices with
//! implicit adjacency: the neighbors of `(i, j)` are `(i ± 1, j)` and
//! `(i, j ± 1)`, no connectivity table required. The [`PatchGrid`] and
//! [`BlockGrid`] traits are the narrow interface smoothers consume; mesh
//! systems with their own storage implement them directly, while
//! [`StructuredPatch`] and [`StructuredBlock`] are ready-made row-major
//! implementations.
//!
//! # Boundary convention
//!
//! Nodes with any index at an extreme (`0` or `extent - 1`) form the grid
//! boundary. Smoothers read boundary nodes as stencil inputs but never write
//! them: on a patch they encode the fixed curve network bounding the patch,
//! on a block the six fixed bounding faces.

use crate::error::{Result, SmoothError};

use super::index::{GridIndex, NodeId};

/// Indexed node access over a 2-D structured patch.
pub trait PatchGrid<I: GridIndex = u32> {
    /// Grid extents `(nb_i, nb_j)`.
    fn extent(&self) -> (usize, usize);

    /// Id of the node at `(i, j)`, `0 <= i < nb_i`, `0 <= j < nb_j`.
    fn node_at(&self, i: usize, j: usize) -> NodeId<I>;
}

/// Indexed node access over a 3-D structured block.
pub trait BlockGrid<I: GridIndex = u32> {
    /// Grid extents `(nb_i, nb_j, nb_k)`.
    fn extent(&self) -> (usize, usize, usize);

    /// Id of the node at `(i, j, k)`.
    fn node_at(&self, i: usize, j: usize, k: usize) -> NodeId<I>;
}

/// A rectangular grid of node ids, stored row-major (`i` varies fastest).
#[derive(Debug, Clone)]
pub struct StructuredPatch<I: GridIndex = u32> {
    nb_i: usize,
    nb_j: usize,
    nodes: Vec<NodeId<I>>,
}

impl<I: GridIndex> StructuredPatch<I> {
    /// Create a patch from extents and a row-major node list.
    ///
    /// Fails with [`SmoothError::NodeCountMismatch`] if `nodes.len()` does
    /// not equal `nb_i * nb_j`.
    pub fn new(nb_i: usize, nb_j: usize, nodes: Vec<NodeId<I>>) -> Result<Self> {
        let expected = nb_i * nb_j;
        if nodes.len() != expected {
            return Err(SmoothError::NodeCountMismatch {
                expected,
                actual: nodes.len(),
            });
        }
        Ok(Self { nb_i, nb_j, nodes })
    }

    /// Build a patch by evaluating `f(i, j)` for every grid position.
    ///
    /// `f` is called in row-major order: `j` outer, `i` inner.
    pub fn from_fn<F>(nb_i: usize, nb_j: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> NodeId<I>,
    {
        let mut nodes = Vec::with_capacity(nb_i * nb_j);
        for j in 0..nb_j {
            for i in 0..nb_i {
                nodes.push(f(i, j));
            }
        }
        Self { nb_i, nb_j, nodes }
    }
}

impl<I: GridIndex> PatchGrid<I> for StructuredPatch<I> {
    #[inline]
    fn extent(&self) -> (usize, usize) {
        (self.nb_i, self.nb_j)
    }

    #[inline]
    fn node_at(&self, i: usize, j: usize) -> NodeId<I> {
        debug_assert!(i < self.nb_i && j < self.nb_j, "({}, {}) out of extent", i, j);
        self.nodes[j * self.nb_i + i]
    }
}

/// A hexahedral grid of node ids, stored row-major (`i` fastest, `k` slowest).
#[derive(Debug, Clone)]
pub struct StructuredBlock<I: GridIndex = u32> {
    nb_i: usize,
    nb_j: usize,
    nb_k: usize,
    nodes: Vec<NodeId<I>>,
}

impl<I: GridIndex> StructuredBlock<I> {
    /// Create a block from extents and a row-major node list.
    ///
    /// Fails with [`SmoothError::NodeCountMismatch`] if `nodes.len()` does
    /// not equal `nb_i * nb_j * nb_k`.
    pub fn new(nb_i: usize, nb_j: usize, nb_k: usize, nodes: Vec<NodeId<I>>) -> Result<Self> {
        let expected = nb_i * nb_j * nb_k;
        if nodes.len() != expected {
            return Err(SmoothError::NodeCountMismatch {
                expected,
                actual: nodes.len(),
            });
        }
        Ok(Self {
            nb_i,
            nb_j,
            nb_k,
            nodes,
        })
    }

    /// Build a block by evaluating `f(i, j, k)` for every grid position.
    ///
    /// `f` is called in row-major order: `k` outer, then `j`, then `i`.
    pub fn from_fn<F>(nb_i: usize, nb_j: usize, nb_k: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> NodeId<I>,
    {
        let mut nodes = Vec::with_capacity(nb_i * nb_j * nb_k);
        for k in 0..nb_k {
            for j in 0..nb_j {
                for i in 0..nb_i {
                    nodes.push(f(i, j, k));
                }
            }
        }
        Self {
            nb_i,
            nb_j,
            nb_k,
            nodes,
        }
    }
}

impl<I: GridIndex> BlockGrid<I> for StructuredBlock<I> {
    #[inline]
    fn extent(&self) -> (usize, usize, usize) {
        (self.nb_i, self.nb_j, self.nb_k)
    }

    #[inline]
    fn node_at(&self, i: usize, j: usize, k: usize) -> NodeId<I> {
        debug_assert!(
            i < self.nb_i && j < self.nb_j && k < self.nb_k,
            "({}, {}, {}) out of extent",
            i,
            j,
            k
        );
        self.nodes[(k * self.nb_j + j) * self.nb_i + i]
    }
}
