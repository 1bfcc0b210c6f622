//! Equal-arc-length midpoint solvers.
//!
//! These are the building blocks of the line-sweeping (Yao) smoothers: a
//! *branch* is a 3-point polyline `p0 -> p1 -> p2`, and its midpoint is the
//! point lying on the polyline at exactly half the total arc length from
//! `p0`. Repositioning a node to the midpoints of the branches through its
//! neighbors equalizes spacing along each grid direction.

use nalgebra::Point3;

use crate::error::{Result, SmoothError};

/// Equal-arc-length midpoint of the polyline `p0 -> p1 -> p2`.
///
/// With `d1 = |p1 - p0|`, `d2 = |p2 - p1|` and `d = d1 + d2`: the result
/// lies on the first segment at distance `d/2` from `p0` when `d/2 <= d1`,
/// otherwise on the second segment at distance `d/2 - d1` from `p1`.
///
/// Three coincident points are a degenerate but valid polyline of length
/// zero; the result is `p1`. A zero-length segment selected for
/// interpolation fails with [`SmoothError::DegenerateStencil`] rather than
/// normalize a null direction.
///
/// # Example
///
/// ```
/// use gridrelax::algo::branch_midpoint;
/// use nalgebra::Point3;
///
/// let p = branch_midpoint(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(3.0, 0.0, 0.0),
/// )
/// .unwrap();
/// assert_eq!(p, Point3::new(1.5, 0.0, 0.0));
/// ```
pub fn branch_midpoint(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Result<Point3<f64>> {
    let d1 = (p1 - p0).norm();
    let d2 = (p2 - p1).norm();
    let d = d1 + d2;

    if d == 0.0 {
        return Ok(p1);
    }

    let half = 0.5 * d;
    if half <= d1 {
        if d1 == 0.0 {
            return Err(SmoothError::DegenerateStencil {
                context: "branch midpoint on a zero-length first segment",
            });
        }
        Ok(p0 + (half / d1) * (p1 - p0))
    } else {
        if d2 == 0.0 {
            return Err(SmoothError::DegenerateStencil {
                context: "branch midpoint on a zero-length second segment",
            });
        }
        Ok(p1 + ((half - d1) / d2) * (p2 - p1))
    }
}

/// Equal-space midpoint of a 3x3 point stencil.
///
/// `points` is laid out row-major, three rows of three. The three columns
/// and three rows are each reduced to a branch midpoint, those midpoints are
/// reduced by a further branch each, and the result is the arithmetic mean
/// of the column-wise and row-wise reductions.
pub fn face_midpoint(points: &[Point3<f64>; 9]) -> Result<Point3<f64>> {
    let [p0, p1, p2, p3, p4, p5, p6, p7, p8] = *points;

    let v1 = branch_midpoint(p0, p3, p6)?;
    let v2 = branch_midpoint(p1, p4, p7)?;
    let v3 = branch_midpoint(p2, p5, p8)?;

    let h1 = branch_midpoint(p0, p1, p2)?;
    let h2 = branch_midpoint(p3, p4, p5)?;
    let h3 = branch_midpoint(p6, p7, p8)?;

    let pv = branch_midpoint(v1, v2, v3)?;
    let ph = branch_midpoint(h1, h2, h3)?;

    Ok(Point3::from((pv.coords + ph.coords) * 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_midpoint_on_second_segment() {
        let p = branch_midpoint(pt(0.0, 0.0, 0.0), pt(1.0, 0.0, 0.0), pt(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, pt(1.5, 0.0, 0.0));
    }

    #[test]
    fn test_midpoint_on_first_segment() {
        let p = branch_midpoint(pt(0.0, 0.0, 0.0), pt(4.0, 0.0, 0.0), pt(5.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, pt(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_midpoint_bent_branch() {
        // d1 = 3 along y, d2 = 4 along z, half length 3.5 lands past the knee
        let p = branch_midpoint(pt(0.0, 0.0, 0.0), pt(0.0, 3.0, 0.0), pt(0.0, 3.0, 4.0)).unwrap();
        assert!((p - pt(0.0, 3.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_all_points_coincident_returns_middle() {
        let p = pt(2.0, -1.0, 7.0);
        assert_eq!(branch_midpoint(p, p, p).unwrap(), p);
    }

    #[test]
    fn test_coincident_leading_pair() {
        // d1 = 0 so the full half length lies on the second segment
        let p = branch_midpoint(pt(1.0, 1.0, 1.0), pt(1.0, 1.0, 1.0), pt(3.0, 1.0, 1.0)).unwrap();
        assert_eq!(p, pt(2.0, 1.0, 1.0));
    }

    #[test]
    fn test_symmetric_branch_returns_middle_point() {
        let p = branch_midpoint(pt(-1.0, 0.0, 0.0), pt(0.0, 0.0, 0.0), pt(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(p, pt(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_face_midpoint_uniform_grid_is_center() {
        let mut points = [Point3::origin(); 9];
        for (idx, p) in points.iter_mut().enumerate() {
            let i = idx % 3;
            let j = idx / 3;
            *p = pt(i as f64, j as f64, 0.0);
        }
        let m = face_midpoint(&points).unwrap();
        assert!((m - pt(1.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_face_midpoint_translation_invariant() {
        let mut points = [Point3::origin(); 9];
        for (idx, p) in points.iter_mut().enumerate() {
            let i = idx % 3;
            let j = idx / 3;
            *p = pt(i as f64 * 1.5, (j * j) as f64, (i + j) as f64 * 0.25);
        }
        let m0 = face_midpoint(&points).unwrap();

        let shift = nalgebra::Vector3::new(10.0, -4.0, 2.0);
        let shifted: Vec<_> = points.iter().map(|p| p + shift).collect();
        let shifted: [Point3<f64>; 9] = shifted.try_into().unwrap();
        let m1 = face_midpoint(&shifted).unwrap();

        assert!((m1 - (m0 + shift)).norm() < 1e-12);
    }

    #[test]
    fn test_face_midpoint_coincident_stencil() {
        let p = pt(3.0, 3.0, 3.0);
        assert_eq!(face_midpoint(&[p; 9]).unwrap(), p);
    }
}
