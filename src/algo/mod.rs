//! Relaxation algorithms.
//!
//! This module contains the smoothing passes and the geometric primitives
//! they are built from:
//!
//! - **Midpoint solvers**: equal-arc-length midpoints of branches (3-point
//!   polylines) and 3x3 face stencils
//! - **Smoothing**: Laplacian and line-sweeping (Yao) relaxation over
//!   structured patches and blocks
//! - **Observation**: per-sweep callbacks for diagnostics

pub mod midpoint;
pub mod observer;
pub mod smooth;

pub use midpoint::{branch_midpoint, face_midpoint};
pub use observer::SweepObserver;
pub use smooth::{
    laplacian_smooth, laplacian_smooth_with_observer, yao_smooth, yao_smooth_volume,
    yao_smooth_volume_with_observer, yao_smooth_with_observer, SmoothOptions,
};
