//! Bezier curves of arbitrary degree over 3D control points.
//!
//! [`BezierCurve`] evaluates any degree with de castlejau's algorithm.
//! The free functions [`quadratic`] and [`cubic`] evaluate the bernstein form directly
//! and are used where the spline fitter already knows the curve's shape.

use nalgebra::{RealField, Vector3};
use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

/// Storage for a curve's control points.
///
/// Cubic curves and lower stay on the stack.
pub type ControlPoints<T> = SmallVec<[Vector3<T>; 4]>;

/// Bezier curve defined by an ordered list of control points
///
/// The curve starts at the first and ends at the last control point.
/// The points in between only pull the curve towards them.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve<T: RealField>(pub ControlPoints<T>);

impl<T: RealField> Deref for BezierCurve<T> {
    type Target = ControlPoints<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<T: RealField> DerefMut for BezierCurve<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: RealField> BezierCurve<T> {
    /// Returns a curve's degree which is one lower then its number of control points
    pub fn degree(&self) -> usize {
        self.len() - 1
    }

    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de castlejau's algorithm and works for any degree.
    /// Curves up to cubic ones are reduced without touching the heap.
    ///
    /// **Panics if the curve has no control points!**
    pub fn castlejau_eval(&self, t: T) -> Vector3<T> {
        let inv_t = T::one() - t.clone();
        match &self[..] {
            [] => panic!("A bezier curve needs at least one control point"),
            [a1] => a1.clone(),
            [a2, b2] => a2 * inv_t + b2 * t,
            [a3, b3, c3] => {
                let a2 = a3 * inv_t.clone() + b3 * t.clone();
                let b2 = b3 * inv_t.clone() + c3 * t.clone();
                a2 * inv_t + b2 * t
            }
            [a4, b4, c4, d4] => {
                let a3 = a4 * inv_t.clone() + b4 * t.clone();
                let b3 = b4 * inv_t.clone() + c4 * t.clone();
                let c3 = c4 * inv_t.clone() + d4 * t.clone();
                let a2 = &a3 * inv_t.clone() + &b3 * t.clone();
                let b2 = &b3 * inv_t.clone() + &c3 * t.clone();
                a2 * inv_t + b2 * t
            }
            _ => {
                let mut input = self.0.clone();
                let mut output = ControlPoints::with_capacity(input.len());
                while input.len() > 1 {
                    BezierCurve::castlejau_step(&input, &mut output, t.clone());
                    std::mem::swap(&mut input, &mut output);
                }
                input[0].clone()
            }
        }
    }

    /// Performs a single step of de castlejau's algorithm
    ///
    /// i.e. combines `n` points into `n - 1` points by computing `(1 - t) * A + t * B` on
    /// consecutive points `A` and `B`
    fn castlejau_step(input: &ControlPoints<T>, output: &mut ControlPoints<T>, t: T) {
        output.clear();
        let t_inv = T::one() - t.clone();
        for (p, q) in input.iter().zip(input.iter().skip(1)) {
            output.push(p * t_inv.clone() + q * t.clone());
        }
    }

    /// Samples the curve at `samples` equal steps of `t` in `[0, 1)` and appends the last control
    /// point.
    ///
    /// The result always contains `samples + 1` points, starting and ending exactly on the
    /// curve's end points. A `samples` of `0` is treated as `1`.
    ///
    /// **Panics if the curve has no control points!**
    pub fn sample(&self, samples: usize) -> Vec<Vector3<T>> {
        let samples = samples.max(1);
        let step = T::one() / convert::usize_to_generic::<T>(samples);

        let mut points = Vec::with_capacity(samples + 1);
        let mut i_as_t = T::zero();
        for _ in 0..samples {
            points.push(self.castlejau_eval(i_as_t.clone() * step.clone()));
            i_as_t += T::one();
        }
        points.push(self[self.len() - 1].clone());
        points
    }
}

impl<T: RealField> From<Vec<Vector3<T>>> for BezierCurve<T> {
    fn from(points: Vec<Vector3<T>>) -> Self {
        BezierCurve(SmallVec::from_vec(points))
    }
}

impl<T: RealField> FromIterator<Vector3<T>> for BezierCurve<T> {
    fn from_iter<I: IntoIterator<Item = Vector3<T>>>(iter: I) -> Self {
        BezierCurve(iter.into_iter().collect())
    }
}

/// Evaluates the quadratic curve from `p0` to `p1` with control point `c` at `s`.
///
/// Same result as [`BezierCurve::castlejau_eval`] on `[p0, c, p1]`.
pub fn quadratic<T: RealField>(s: T, p0: &Vector3<T>, p1: &Vector3<T>, c: &Vector3<T>) -> Vector3<T> {
    let two = T::one() + T::one();
    let inv_s = T::one() - s.clone();

    let coeff_p0 = inv_s.clone() * inv_s.clone();
    let coeff_c = two * s.clone() * inv_s;
    let coeff_p1 = s.clone() * s;

    p0 * coeff_p0 + c * coeff_c + p1 * coeff_p1
}

/// Evaluates the cubic curve from `p0` to `p1` with control points `c0` and `c1` at `s`.
///
/// Same result as [`BezierCurve::castlejau_eval`] on `[p0, c0, c1, p1]`.
pub fn cubic<T: RealField>(
    s: T,
    p0: &Vector3<T>,
    p1: &Vector3<T>,
    c0: &Vector3<T>,
    c1: &Vector3<T>,
) -> Vector3<T> {
    let three = T::one() + T::one() + T::one();
    let inv_s = T::one() - s.clone();

    let coeff_p0 = inv_s.clone() * inv_s.clone() * inv_s.clone();
    let coeff_c0 = three.clone() * s.clone() * inv_s.clone() * inv_s.clone();
    let coeff_c1 = three * s.clone() * s.clone() * inv_s;
    let coeff_p1 = s.clone() * s.clone() * s;

    p0 * coeff_p0 + c0 * coeff_c0 + c1 * coeff_c1 + p1 * coeff_p1
}

pub(crate) mod convert {
    use num::Num;

    /// Helper function used when a formula treats a count as a scalar
    pub(crate) fn usize_to_generic<T: Num>(n: usize) -> T {
        let mut k = T::zero();
        for _ in 0..n {
            k = k + T::one();
        }
        k
    }
}
