//! Structured-grid relaxation smoothers.
//!
//! This module provides the relaxation passes that reposition the interior
//! nodes of structured patches and blocks:
//!
//! - [`laplacian_smooth`]: 4-neighbor averaging on surface patches
//! - [`yao_smooth`]: line-sweeping (equal-space) smoothing on surface patches
//! - [`yao_smooth_volume`]: line-sweeping smoothing inside hexahedral blocks
//!
//! All three use Jacobi sweeps: every interior node's new position is
//! computed from a snapshot of the pre-sweep positions, and the whole sweep
//! is committed at once. The result is independent of traversal order, which
//! makes runs reproducible and lets the per-node computation fan out across
//! threads without changing the numbers.
//!
//! Boundary nodes (any grid index at an extreme) are read as stencil inputs
//! but never written; on a patch they encode the fixed bounding curves, on a
//! block the six fixed faces.
//!
//! # Example
//!
//! ```
//! use gridrelax::algo::{laplacian_smooth, SmoothOptions};
//! use gridrelax::grid::{MeshStore, NodeStore, PatchGrid, StructuredPatch};
//! use gridrelax::project::IdentityProjector;
//! use nalgebra::Point3;
//!
//! // A flat 4x4 patch with one interior node pulled out of place.
//! let mut store: NodeStore = NodeStore::new();
//! let patch = StructuredPatch::from_fn(4, 4, |i, j| {
//!     store.push(Point3::new(i as f64, j as f64, 0.0))
//! });
//! store.set_position(patch.node_at(1, 1), Point3::new(0.3, 0.4, 0.0));
//!
//! let options = SmoothOptions::default().with_iterations(20);
//! laplacian_smooth(&mut store, &[patch], &IdentityProjector, &options).unwrap();
//! ```

use nalgebra::Point3;
use rayon::prelude::*;

use crate::error::Result;
use crate::grid::{BlockGrid, GridIndex, MeshStore, NodeId, PatchGrid};
use crate::project::SurfaceProjector;

use super::midpoint::{branch_midpoint, face_midpoint};
use super::SweepObserver;

/// Options for smoothing passes.
#[derive(Debug, Clone)]
pub struct SmoothOptions {
    /// Number of sweeps over each grid. The iteration count is the sole
    /// stopping criterion; there is no convergence test.
    pub iterations: usize,

    /// Whether to fan the per-sweep node computation out with rayon
    /// (default: true). Sequential and parallel runs produce bit-identical
    /// results.
    pub parallel: bool,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            iterations: 10,
            parallel: true,
        }
    }
}

impl SmoothOptions {
    /// Set the number of sweeps.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Performs Laplacian smoothing on surface patches.
///
/// Each interior node moves to the arithmetic mean of its four axis
/// neighbors' pre-sweep positions, projected back onto the target surface.
///
/// # Arguments
///
/// * `store` - Position storage shared by all patches in the batch
/// * `patches` - The patches to smooth, processed one after the other
/// * `projector` - Snaps candidate positions onto the target surface
/// * `options` - Sweep count and execution mode
///
/// # Errors
///
/// A projection failure abandons the failing patch with nothing from the
/// in-flight sweep committed; the remaining patches are still processed and
/// the first failure is returned as [`SmoothError::SweepFailed`].
///
/// Patches with no interior nodes (either extent below 3) are skipped.
pub fn laplacian_smooth<I, S, G, P>(
    store: &mut S,
    patches: &[G],
    projector: &P,
    options: &SmoothOptions,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: PatchGrid<I> + Sync,
    P: SurfaceProjector + Sync,
{
    smooth_patches_internal(
        store,
        patches,
        projector,
        options,
        None,
        laplacian_candidate::<I, S, G>,
    )
}

/// Laplacian smoothing with per-sweep observation.
///
/// See [`laplacian_smooth`]; `observer` is notified after every committed
/// sweep.
pub fn laplacian_smooth_with_observer<I, S, G, P>(
    store: &mut S,
    patches: &[G],
    projector: &P,
    options: &SmoothOptions,
    observer: &SweepObserver,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: PatchGrid<I> + Sync,
    P: SurfaceProjector + Sync,
{
    smooth_patches_internal(
        store,
        patches,
        projector,
        options,
        Some(observer),
        laplacian_candidate::<I, S, G>,
    )
}

/// Performs line-sweeping (Yao) smoothing on surface patches.
///
/// Each interior node gathers its 3x3 neighborhood and computes an
/// equal-arc-length midpoint along each grid direction: the three columns of
/// the stencil reduce to branch midpoints and those to a single column-wise
/// point, likewise for the three rows. The node moves to the mean of the
/// two, projected back onto the target surface.
///
/// Averaging the two directional midpoints instead of intersecting two
/// literal mid-lines keeps the method well defined on curved surfaces, where
/// the mid-lines need not intersect; on a flat surface it reduces to the
/// planar line-sweeping method.
///
/// Batch, error, and no-op semantics are those of [`laplacian_smooth`].
pub fn yao_smooth<I, S, G, P>(
    store: &mut S,
    patches: &[G],
    projector: &P,
    options: &SmoothOptions,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: PatchGrid<I> + Sync,
    P: SurfaceProjector + Sync,
{
    smooth_patches_internal(store, patches, projector, options, None, yao_candidate::<I, S, G>)
}

/// Line-sweeping smoothing with per-sweep observation.
///
/// See [`yao_smooth`]; `observer` is notified after every committed sweep.
pub fn yao_smooth_with_observer<I, S, G, P>(
    store: &mut S,
    patches: &[G],
    projector: &P,
    options: &SmoothOptions,
    observer: &SweepObserver,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: PatchGrid<I> + Sync,
    P: SurfaceProjector + Sync,
{
    smooth_patches_internal(
        store,
        patches,
        projector,
        options,
        Some(observer),
        yao_candidate::<I, S, G>,
    )
}

/// Performs line-sweeping (Yao) smoothing inside hexahedral blocks.
///
/// The 3-D generalization of [`yao_smooth`]: per interior node, the full
/// 27-point stencil is read, and for each of the three axes the three 3x3
/// stencil slices orthogonal to that axis reduce to face midpoints, then to
/// a single branch midpoint per axis. The node moves to the mean of the
/// three axis midpoints.
///
/// Interior volumetric nodes are not constrained by any surface, so there is
/// no projection; the fixed bounding faces alone encode the domain shape.
/// Blocks with no interior nodes (any extent below 3) are skipped. Batch and
/// error semantics are those of [`laplacian_smooth`].
pub fn yao_smooth_volume<I, S, G>(store: &mut S, blocks: &[G], options: &SmoothOptions) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: BlockGrid<I> + Sync,
{
    smooth_blocks_internal(store, blocks, options, None)
}

/// Volumetric line-sweeping smoothing with per-sweep observation.
///
/// See [`yao_smooth_volume`]; `observer` is notified after every committed
/// sweep.
pub fn yao_smooth_volume_with_observer<I, S, G>(
    store: &mut S,
    blocks: &[G],
    options: &SmoothOptions,
    observer: &SweepObserver,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: BlockGrid<I> + Sync,
{
    smooth_blocks_internal(store, blocks, options, Some(observer))
}

fn smooth_patches_internal<I, S, G, P>(
    store: &mut S,
    patches: &[G],
    projector: &P,
    options: &SmoothOptions,
    observer: Option<&SweepObserver>,
    candidate: fn(&S, &G, usize, usize) -> Result<Point3<f64>>,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: PatchGrid<I> + Sync,
    P: SurfaceProjector + Sync,
{
    let mut first_failure = None;
    for (grid, patch) in patches.iter().enumerate() {
        let outcome = smooth_one_patch(store, patch, projector, options, observer, grid, candidate);
        if let Err(e) = outcome {
            first_failure.get_or_insert(e);
        }
    }
    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn smooth_one_patch<I, S, G, P>(
    store: &mut S,
    patch: &G,
    projector: &P,
    options: &SmoothOptions,
    observer: Option<&SweepObserver>,
    grid: usize,
    candidate: fn(&S, &G, usize, usize) -> Result<Point3<f64>>,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: PatchGrid<I> + Sync,
    P: SurfaceProjector + Sync,
{
    let (nb_i, nb_j) = patch.extent();
    if options.iterations == 0 || nb_i < 3 || nb_j < 3 {
        return Ok(());
    }

    let span_i = nb_i - 2;
    let interior = span_i * (nb_j - 2);

    for sweep in 0..options.iterations {
        let compute = |idx: usize| -> Result<(NodeId<I>, Point3<f64>)> {
            let i = 1 + idx % span_i;
            let j = 1 + idx / span_i;
            let moved = candidate(store, patch, i, j)?;
            let snapped = projector.project(&moved)?;
            Ok((patch.node_at(i, j), snapped))
        };

        let updates: Result<Vec<_>> = if options.parallel {
            (0..interior).into_par_iter().map(compute).collect()
        } else {
            (0..interior).map(compute).collect()
        };
        let updates = updates.map_err(|e| e.in_sweep(grid, sweep))?;

        for (node, position) in updates {
            store.set_position(node, position);
        }

        if let Some(observer) = observer {
            observer.notify(grid, sweep + 1, options.iterations);
        }
    }

    Ok(())
}

fn smooth_blocks_internal<I, S, G>(
    store: &mut S,
    blocks: &[G],
    options: &SmoothOptions,
    observer: Option<&SweepObserver>,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: BlockGrid<I> + Sync,
{
    let mut first_failure = None;
    for (grid, block) in blocks.iter().enumerate() {
        let outcome = smooth_one_block(store, block, options, observer, grid);
        if let Err(e) = outcome {
            first_failure.get_or_insert(e);
        }
    }
    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn smooth_one_block<I, S, G>(
    store: &mut S,
    block: &G,
    options: &SmoothOptions,
    observer: Option<&SweepObserver>,
    grid: usize,
) -> Result<()>
where
    I: GridIndex,
    S: MeshStore<I> + Sync,
    G: BlockGrid<I> + Sync,
{
    let (nb_i, nb_j, nb_k) = block.extent();
    if options.iterations == 0 || nb_i < 3 || nb_j < 3 || nb_k < 3 {
        return Ok(());
    }

    let span_i = nb_i - 2;
    let span_j = nb_j - 2;
    let interior = span_i * span_j * (nb_k - 2);

    for sweep in 0..options.iterations {
        let compute = |idx: usize| -> Result<(NodeId<I>, Point3<f64>)> {
            let i = 1 + idx % span_i;
            let j = 1 + (idx / span_i) % span_j;
            let k = 1 + idx / (span_i * span_j);
            let moved = yao_volume_candidate(store, block, i, j, k)?;
            Ok((block.node_at(i, j, k), moved))
        };

        let updates: Result<Vec<_>> = if options.parallel {
            (0..interior).into_par_iter().map(compute).collect()
        } else {
            (0..interior).map(compute).collect()
        };
        let updates = updates.map_err(|e| e.in_sweep(grid, sweep))?;

        for (node, position) in updates {
            store.set_position(node, position);
        }

        if let Some(observer) = observer {
            observer.notify(grid, sweep + 1, options.iterations);
        }
    }

    Ok(())
}

/// Mean of the four axis neighbors of `(i, j)`.
fn laplacian_candidate<I, S, G>(store: &S, patch: &G, i: usize, j: usize) -> Result<Point3<f64>>
where
    I: GridIndex,
    S: MeshStore<I>,
    G: PatchGrid<I>,
{
    let west = store.position(patch.node_at(i - 1, j));
    let east = store.position(patch.node_at(i + 1, j));
    let south = store.position(patch.node_at(i, j - 1));
    let north = store.position(patch.node_at(i, j + 1));

    Ok(Point3::from(
        (west.coords + east.coords + south.coords + north.coords) * 0.25,
    ))
}

/// Equal-space candidate for `(i, j)` from its 3x3 neighborhood.
fn yao_candidate<I, S, G>(store: &S, patch: &G, i: usize, j: usize) -> Result<Point3<f64>>
where
    I: GridIndex,
    S: MeshStore<I>,
    G: PatchGrid<I>,
{
    let pos = |i: usize, j: usize| store.position(patch.node_at(i, j));

    let column = |ci: usize| branch_midpoint(pos(ci, j - 1), pos(ci, j), pos(ci, j + 1));
    let row = |rj: usize| branch_midpoint(pos(i - 1, rj), pos(i, rj), pos(i + 1, rj));

    let i_mid = branch_midpoint(column(i - 1)?, column(i)?, column(i + 1)?)?;
    let j_mid = branch_midpoint(row(j - 1)?, row(j)?, row(j + 1)?)?;

    Ok(Point3::from((i_mid.coords + j_mid.coords) * 0.5))
}

/// Equal-space candidate for `(i, j, k)` from its 27-point neighborhood.
fn yao_volume_candidate<I, S, G>(
    store: &S,
    block: &G,
    i: usize,
    j: usize,
    k: usize,
) -> Result<Point3<f64>>
where
    I: GridIndex,
    S: MeshStore<I>,
    G: BlockGrid<I>,
{
    let pos = |i: usize, j: usize, k: usize| store.position(block.node_at(i, j, k));

    let face_i = |ci: usize| {
        face_midpoint(&[
            pos(ci, j - 1, k - 1),
            pos(ci, j, k - 1),
            pos(ci, j + 1, k - 1),
            pos(ci, j - 1, k),
            pos(ci, j, k),
            pos(ci, j + 1, k),
            pos(ci, j - 1, k + 1),
            pos(ci, j, k + 1),
            pos(ci, j + 1, k + 1),
        ])
    };
    let face_j = |cj: usize| {
        face_midpoint(&[
            pos(i - 1, cj, k - 1),
            pos(i, cj, k - 1),
            pos(i + 1, cj, k - 1),
            pos(i - 1, cj, k),
            pos(i, cj, k),
            pos(i + 1, cj, k),
            pos(i - 1, cj, k + 1),
            pos(i, cj, k + 1),
            pos(i + 1, cj, k + 1),
        ])
    };
    let face_k = |ck: usize| {
        face_midpoint(&[
            pos(i - 1, j - 1, ck),
            pos(i, j - 1, ck),
            pos(i + 1, j - 1, ck),
            pos(i - 1, j, ck),
            pos(i, j, ck),
            pos(i + 1, j, ck),
            pos(i - 1, j + 1, ck),
            pos(i, j + 1, ck),
            pos(i + 1, j + 1, ck),
        ])
    };

    let i_mid = branch_midpoint(face_i(i - 1)?, face_i(i)?, face_i(i + 1)?)?;
    let j_mid = branch_midpoint(face_j(j - 1)?, face_j(j)?, face_j(j + 1)?)?;
    let k_mid = branch_midpoint(face_k(k - 1)?, face_k(k)?, face_k(k + 1)?)?;

    Ok(Point3::from(
        (i_mid.coords + j_mid.coords + k_mid.coords) / 3.0,
    ))
}
