//! Index types for grid nodes.
//!
//! This module provides a type-safe index wrapper for mesh nodes. The index
//! is generic over the underlying integer type to support grids of different
//! sizes (u16 for small grids, u32 for typical grids, u64 for massive grids).

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for types that can be used as node indices.
///
/// This trait is implemented for `u16`, `u32`, and `u64`, allowing users to
/// choose the appropriate index size for their mesh.
pub trait GridIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static
{
    /// The maximum valid index value.
    const MAX: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Debug builds panic if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;
}

impl GridIndex for u16 {
    const MAX: Self = u16::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u16", v);
        v as u16
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl GridIndex for u32 {
    const MAX: Self = u32::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= Self::MAX as usize, "index {} too large for u32", v);
        v as u32
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl GridIndex for u64 {
    const MAX: Self = u64::MAX;

    #[inline]
    fn from_usize(v: usize) -> Self {
        v as u64
    }

    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A type-safe node index.
///
/// Identifies a node in a [`MeshStore`](crate::grid::MeshStore). Smoothers
/// only ever hold node ids, never references into the store.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId<I: GridIndex = u32>(I);

impl<I: GridIndex> NodeId<I> {
    /// Create a new index from a raw value.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(I::from_usize(index))
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> usize {
        self.0.to_usize()
    }

    /// Get the raw value of the underlying type.
    #[inline]
    pub fn raw(self) -> I {
        self.0
    }
}

impl<I: GridIndex> Debug for NodeId<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({})", self.index())
    }
}

impl<I: GridIndex> From<usize> for NodeId<I> {
    fn from(v: usize) -> Self {
        Self::new(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_roundtrip() {
        let n: NodeId = NodeId::new(42);
        assert_eq!(n.index(), 42);
        assert_eq!(n.raw(), 42u32);
    }

    #[test]
    fn test_node_id_small_index() {
        let n: NodeId<u16> = NodeId::new(7);
        assert_eq!(n.index(), 7);
        assert_eq!(format!("{:?}", n), "N(7)");
    }

    #[test]
    fn test_node_id_ordering() {
        let a: NodeId = NodeId::new(1);
        let b: NodeId = NodeId::new(2);
        assert!(a < b);
        assert_eq!(a, NodeId::from(1));
    }
}
