//! Smooth curves through every point of a polyline.
//!
//! The fitting is loosely based on the finite differences method for cubic hermite splines
//! with a few changes:
//! - All segments are solved in bezier form.
//! - The first and last segments are quadratic, leaving the end tangents unconstrained.
//! - Internal control points are scaled by their segment's length, which avoids kinks and
//!   self intersections on short segments.

use crate::bezier::{convert, cubic, quadratic};
use log::warn;
use nalgebra::{RealField, Vector3};

/// Number of samples taken between two consecutive input points
pub const SPLINE_SUBDIVISIONS: usize = 16;

/// Fits a spline through `points` using [`SPLINE_SUBDIVISIONS`] samples per segment.
///
/// See [`fit_with`].
pub fn fit<T: RealField>(points: &[Vector3<T>]) -> Vec<Vector3<T>> {
    fit_with(points, SPLINE_SUBDIVISIONS)
}

/// Fits a spline through `points` and samples each segment `subdivisions` times.
///
/// The result starts with each input point followed by the samples leading up to the next one,
/// and ends with the last input point. For `n >= 3` input points it contains
/// `subdivisions * (n - 1) + 1` points.
///
/// With two points or less there is nothing to smooth and the points are returned as is.
/// A `subdivisions` of `0` is treated as `1`.
pub fn fit_with<T: RealField>(points: &[Vector3<T>], subdivisions: usize) -> Vec<Vector3<T>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let subdivisions = subdivisions.max(1);
    let n = points.len();
    let two = T::one() + T::one();
    let three = two.clone() + T::one();
    let step = T::one() / convert::usize_to_generic::<T>(subdivisions);

    let tangents = tangents(points);
    let mut curve = Vec::with_capacity(subdivisions * (n - 1) + 1);

    // Start with a quadratic segment
    {
        let (p0, p1) = (&points[0], &points[1]);
        let length = (p0 - p1).norm();
        let c = p1 - &tangents[0] * (length / two.clone());

        sample_segment(&mut curve, subdivisions, &step, |s| quadratic(s, p0, p1, &c));
    }

    // Internal segments are cubic
    for i in 2..n - 1 {
        let (p0, p1) = (&points[i - 1], &points[i]);
        let length = (p0 - p1).norm();
        let c0 = p0 + &tangents[i - 2] * (length.clone() / three.clone());
        let c1 = p1 - &tangents[i - 1] * (length / three.clone());

        sample_segment(&mut curve, subdivisions, &step, |s| cubic(s, p0, p1, &c0, &c1));
    }

    // End with another quadratic segment
    {
        let (p0, p1) = (&points[n - 2], &points[n - 1]);
        let length = (p0 - p1).norm();
        let c = p0 + &tangents[tangents.len() - 1] * (length / two);

        sample_segment(&mut curve, subdivisions, &step, |s| quadratic(s, p0, p1, &c));
    }

    curve.push(points[n - 1].clone());
    curve
}

/// Estimates the direction at every internal point from its two neighbours.
///
/// The difference between the neighbours is divided by the summed length of the two adjacent
/// segments, so the result is *not* normalized. `tangents[k]` belongs to `points[k + 1]`.
fn tangents<T: RealField>(points: &[Vector3<T>]) -> Vec<Vector3<T>> {
    points
        .windows(3)
        .enumerate()
        .map(|(i, window)| {
            let (prev, point, next) = (&window[0], &window[1], &window[2]);
            let l0 = (point - prev).norm();
            let l1 = (point - next).norm();

            let tangent = (next - prev) / (l0 + l1);
            if !tangent.iter().all(|x| x.is_finite()) {
                warn!(
                    "Spline point {} coincides with its neighbours, its tangent isn't finite",
                    i + 1
                );
            }
            tangent
        })
        .collect()
}

/// Pushes `subdivisions` samples of `segment` taken at `t = 0, step, 2 * step, ...`
fn sample_segment<T: RealField>(
    curve: &mut Vec<Vector3<T>>,
    subdivisions: usize,
    step: &T,
    segment: impl Fn(T) -> Vector3<T>,
) {
    let mut i_as_t = T::zero();
    for _ in 0..subdivisions {
        curve.push(segment(i_as_t.clone() * step.clone()));
        i_as_t += T::one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(coords: &[(f64, f64, f64)]) -> Vec<Vector3<f64>> {
        coords.iter().map(|&(x, y, z)| Vector3::new(x, y, z)).collect()
    }

    #[test]
    fn too_few_points() {
        let empty: Vec<Vector3<f64>> = Vec::new();
        assert_eq!(fit(&empty), empty);

        let one = points(&[(1.0, 2.0, 3.0)]);
        assert_eq!(fit(&one), one);

        let two = points(&[(0.0, 0.0, 0.0), (5.0, 5.0, 0.0)]);
        assert_eq!(fit(&two), two);
    }

    #[test]
    fn output_length() {
        let input = points(&[
            (0.0, 0.0, 0.0),
            (3.0, 4.0, 0.0),
            (6.0, 0.0, 1.0),
            (9.0, 4.0, 2.0),
            (12.0, 0.0, 1.0),
            (15.0, 4.0, 0.0),
        ]);
        for n in 3..=input.len() {
            let s = SPLINE_SUBDIVISIONS;
            assert_eq!(fit(&input[..n]).len(), 2 * s + s * (n - 3) + 1);
        }
        assert_eq!(fit_with(&input, 4).len(), 4 * 5 + 1);
        assert_eq!(fit_with(&input, 0).len(), 6);
    }

    #[test]
    fn passes_through_input() {
        let input = points(&[
            (0.0, 0.0, 0.0),
            (3.0, 4.0, 0.0),
            (6.0, 0.0, 1.0),
            (9.0, 4.0, 2.0),
            (12.0, 0.0, 1.0),
        ]);
        let curve = fit(&input);
        for (k, point) in input.iter().enumerate() {
            assert_relative_eq!(curve[k * SPLINE_SUBDIVISIONS], *point, epsilon = 1e-12);
        }
        assert_eq!(curve.last(), input.last());
    }

    #[test]
    fn tangent_estimate() {
        let input = points(&[(0.0, 0.0, 0.0), (3.0, 4.0, 0.0), (6.0, 0.0, 0.0), (6.0, 0.0, 2.0)]);
        let tangents = tangents(&input);
        assert_eq!(tangents.len(), 2);
        assert_relative_eq!(tangents[0], Vector3::new(0.6, 0.0, 0.0));
        // neighbours (3, 4, 0) and (6, 0, 2) with segment lengths 5 and 2
        assert_relative_eq!(tangents[1], Vector3::new(3.0 / 7.0, -4.0 / 7.0, 2.0 / 7.0));
    }

    #[test]
    fn straight_line_stays_straight() {
        let input = points(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0), (3.0, 0.0, 0.0)]);
        let curve = fit(&input);
        for (i, point) in curve.iter().enumerate() {
            let expected = i as f64 / SPLINE_SUBDIVISIONS as f64;
            assert_relative_eq!(*point, Vector3::new(expected, 0.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn reversing_input_reverses_curve() {
        let input = points(&[
            (0.0, 0.0, 0.0),
            (2.0, 5.0, 1.0),
            (7.0, 1.0, -1.0),
            (8.0, 8.0, 0.0),
            (4.0, 9.0, 3.0),
        ]);
        let reversed: Vec<_> = input.iter().rev().cloned().collect();

        let forward = fit(&input);
        let backward = fit(&reversed);
        assert_eq!(forward.len(), backward.len());
        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn quadratic_control_points() {
        let input = points(&[(0.0, 0.0, 0.0), (3.0, 4.0, 0.0), (6.0, 0.0, 0.0)]);
        let curve = fit(&input);
        let half = SPLINE_SUBDIVISIONS / 2;

        // tangent at the middle point is (0.6, 0, 0) and both segments are 5 long
        let first = Vector3::new(1.5, 4.0, 0.0);
        assert_relative_eq!(
            curve[half],
            quadratic(0.5, &input[0], &input[1], &first),
            epsilon = 1e-12
        );
        assert_relative_eq!(curve[half], Vector3::new(1.5, 3.0, 0.0), epsilon = 1e-12);

        let last = Vector3::new(4.5, 4.0, 0.0);
        let index = SPLINE_SUBDIVISIONS + half;
        assert_relative_eq!(
            curve[index],
            quadratic(0.5, &input[1], &input[2], &last),
            epsilon = 1e-12
        );
        assert_relative_eq!(curve[index], Vector3::new(4.5, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn cubic_control_points() {
        let input = points(&[(0.0, 0.0, 0.0), (3.0, 4.0, 0.0), (6.0, 0.0, 0.0), (9.0, 4.0, 0.0)]);
        let curve = fit(&input);

        // both internal tangents are (0.6, 0, 0), a third of the length 5 moves by (1, 0, 0)
        let c0 = Vector3::new(4.0, 4.0, 0.0);
        let c1 = Vector3::new(5.0, 0.0, 0.0);
        let index = SPLINE_SUBDIVISIONS + SPLINE_SUBDIVISIONS / 2;
        assert_relative_eq!(
            curve[index],
            cubic(0.5, &input[1], &input[2], &c0, &c1),
            epsilon = 1e-12
        );
        assert_relative_eq!(curve[index], Vector3::new(4.5, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn deterministic() {
        let input = points(&[(0.0, 0.0, 0.0), (1.0, 2.0, 0.0), (4.0, 1.0, 0.0)]);
        assert_eq!(fit(&input), fit(&input));
    }
}
