//! Relax a rippled surface patch and a sheared block, watching the
//! per-sweep progress through an observer.
//!
//! Run with `cargo run --example relax_grid`.

use gridrelax::prelude::*;
use nalgebra::Point3;

fn max_interior_offset(
    store: &NodeStore,
    ideal: &[Point3<f64>],
    patch: &StructuredPatch,
) -> f64 {
    let (nb_i, nb_j) = patch.extent();
    let mut max = 0.0f64;
    for j in 1..nb_j - 1 {
        for i in 1..nb_i - 1 {
            let node = patch.node_at(i, j);
            let d = (store.position(node) - ideal[node.index()]).norm();
            max = max.max(d);
        }
    }
    max
}

fn main() -> gridrelax::Result<()> {
    let n = 21;

    // A flat patch with a rippled interior; `ideal` keeps the unrippled
    // lattice for comparison.
    let mut store: NodeStore = NodeStore::new();
    let mut ideal = Vec::new();
    let patch = StructuredPatch::from_fn(n, n, |i, j| {
        let x = i as f64;
        let y = j as f64;
        ideal.push(Point3::new(x, y, 0.0));
        let interior = i > 0 && i < n - 1 && j > 0 && j < n - 1;
        let bump = if interior {
            0.35 * (x * 1.1).sin() * (y * 0.7).cos()
        } else {
            0.0
        };
        store.push(Point3::new(x + bump, y - bump, 0.0))
    });

    println!(
        "patch {}x{}: max offset from uniform lattice before smoothing = {:.4}",
        n,
        n,
        max_interior_offset(&store, &ideal, &patch)
    );

    let observer = SweepObserver::new(|grid, sweep, total| {
        if sweep % 5 == 0 || sweep == total {
            println!("  grid {}: sweep {}/{}", grid, sweep, total);
        }
    });

    let options = SmoothOptions::default().with_iterations(25);
    yao_smooth_with_observer(
        &mut store,
        std::slice::from_ref(&patch),
        &IdentityProjector,
        &options,
        &observer,
    )?;

    println!(
        "patch {}x{}: max offset from uniform lattice after smoothing  = {:.4}",
        n,
        n,
        max_interior_offset(&store, &ideal, &patch)
    );

    // A block with its interior sheared sideways.
    let m = 9;
    let mut store: NodeStore = NodeStore::new();
    let block = StructuredBlock::from_fn(m, m, m, |i, j, k| {
        let interior =
            i > 0 && i < m - 1 && j > 0 && j < m - 1 && k > 0 && k < m - 1;
        let shear = if interior { 0.3 * k as f64 / m as f64 } else { 0.0 };
        store.push(Point3::new(i as f64 + shear, j as f64, k as f64))
    });

    yao_smooth_volume_with_observer(
        &mut store,
        std::slice::from_ref(&block),
        &options,
        &observer,
    )?;
    println!("block {0}x{0}x{0}: relaxed", m);

    Ok(())
}
