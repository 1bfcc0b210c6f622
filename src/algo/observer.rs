//! Sweep observation for smoothing passes.
//!
//! A smoothing pass is a sequence of committed sweeps per grid. Callers that
//! want to watch the relaxation converge (or dump mesh snapshots for visual
//! inspection) register a [`SweepObserver`]; it is invoked by the driving
//! loop strictly *between* committed sweeps, never inside the per-node
//! computation, so observation cannot affect numeric results.
//!
//! # Example
//!
//! ```ignore
//! let observer = SweepObserver::new(|grid, sweep, total| {
//!     println!("grid {}: sweep {}/{}", grid, sweep, total);
//! });
//! yao_smooth_with_observer(&mut store, &patches, &projector, &options, &observer)?;
//! ```

/// A callback that receives a notification after every committed sweep.
///
/// The callback receives:
/// - `grid`: index of the grid within the batch
/// - `sweep`: the sweep that was just committed (1-based)
/// - `total`: total number of sweeps requested
pub struct SweepObserver {
    callback: Box<dyn Fn(usize, usize, usize) + Send + Sync>,
}

impl SweepObserver {
    /// Create a new observer with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, usize) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Notify the observer that a sweep was committed.
    #[inline]
    pub fn notify(&self, grid: usize, sweep: usize, total: usize) {
        (self.callback)(grid, sweep, total);
    }

    /// Create a no-op observer that discards all notifications.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for SweepObserver {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for SweepObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepObserver").finish_non_exhaustive()
    }
}
