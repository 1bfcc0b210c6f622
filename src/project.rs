//! Point-to-surface projection.
//!
//! Surface-constrained smoothers compute a free-floating candidate position
//! for each node and snap it back onto the patch's target surface. The snap
//! is a single-method capability: anything that maps a point to its closest
//! point on a surface can serve, including a plain closure over an external
//! geometry kernel.
//!
//! # Example
//!
//! ```
//! use gridrelax::project::{PlaneProjector, SurfaceProjector};
//! use nalgebra::{Point3, Vector3};
//!
//! let plane = PlaneProjector::new(Point3::origin(), Vector3::z()).unwrap();
//! let p = plane.project(&Point3::new(1.0, 2.0, 5.0)).unwrap();
//! assert_eq!(p, Point3::new(1.0, 2.0, 0.0));
//! ```

use nalgebra::{Point3, Unit, Vector3};

use crate::error::{Result, SmoothError};

/// Snaps a free-floating point onto a fixed target surface.
pub trait SurfaceProjector {
    /// Closest point on the target surface to `point`.
    ///
    /// Fails with [`SmoothError::Projection`] when no solution exists
    /// (missing or invalid surface, numerical failure in the kernel).
    fn project(&self, point: &Point3<f64>) -> Result<Point3<f64>>;
}

impl<F> SurfaceProjector for F
where
    F: Fn(&Point3<f64>) -> Result<Point3<f64>>,
{
    fn project(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        self(point)
    }
}

/// The identity projection.
///
/// Used when the patch lies in the surface it is classified against already
/// (planar cases) and as the baseline in tests: smoothing with this projector
/// is pure, unconstrained relaxation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjector;

impl SurfaceProjector for IdentityProjector {
    #[inline]
    fn project(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        Ok(*point)
    }
}

/// Orthogonal projection onto a plane.
#[derive(Debug, Clone)]
pub struct PlaneProjector {
    origin: Point3<f64>,
    normal: Unit<Vector3<f64>>,
}

impl PlaneProjector {
    /// Create a projector onto the plane through `origin` with the given
    /// `normal`.
    ///
    /// Fails with [`SmoothError::Projection`] if `normal` has (near) zero
    /// length, since the plane would be undefined.
    pub fn new(origin: Point3<f64>, normal: Vector3<f64>) -> Result<Self> {
        let normal = Unit::try_new(normal, 1e-12).ok_or_else(|| SmoothError::Projection {
            reason: "plane normal has zero length".to_string(),
        })?;
        Ok(Self { origin, normal })
    }
}

impl SurfaceProjector for PlaneProjector {
    fn project(&self, point: &Point3<f64>) -> Result<Point3<f64>> {
        let offset = (point - self.origin).dot(&self.normal);
        Ok(point - offset * self.normal.into_inner())
    }
}
