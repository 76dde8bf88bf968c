//! Polylines and the curves drawn through their points.

use crate::arc_length;
use crate::bezier::BezierCurve;
use crate::error::PolylineError;
use crate::spline::{self, SPLINE_SUBDIVISIONS};
use log::debug;
use nalgebra::Vector3;
use std::fmt::{self, Display, Formatter};

/// Number of steps a whole bezier curve is sampled at
pub const BEZIER_SAMPLES: usize = 32;

/// How the points of a [`Polyline`] are connected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveType {
    /// Straight lines between consecutive points
    Linear,

    /// A single bezier curve using all points as control points
    Bezier,

    /// A smooth curve through every point
    Spline,
}

/// RGBA color with channels between `0` and `1`
///
/// It isn't interpreted here, only passed along to whoever draws the polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha channel
    pub a: f64,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a color from its channels
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Number of samples taken when turning control points into a curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampling {
    /// Steps along a [`CurveType::Bezier`] curve, the last control point is added on top
    pub bezier_samples: usize,

    /// Steps between two consecutive points of a [`CurveType::Spline`] curve
    pub spline_subdivisions: usize,
}

impl Default for Sampling {
    fn default() -> Self {
        Sampling {
            bezier_samples: BEZIER_SAMPLES,
            spline_subdivisions: SPLINE_SUBDIVISIONS,
        }
    }
}

/// Ordered points together with the curve drawn through them
///
/// The curve is computed once on construction and never changes afterwards.
/// Two polylines are equal if their points, curve type, color and width are.
#[derive(Clone, Debug)]
pub struct Polyline {
    points: Vec<Vector3<f64>>,
    curve_type: CurveType,
    /// `None` for linear curves which are just `points`
    curve: Option<Vec<Vector3<f64>>>,
    color: Color,
    width: u32,
    sampling: Sampling,
}

impl Polyline {
    /// Builds a polyline using the default [`Sampling`].
    ///
    /// # Errors
    /// [`PolylineError::Empty`] if `points` is empty.
    pub fn new(
        points: Vec<Vector3<f64>>,
        curve_type: CurveType,
        color: Color,
        width: u32,
    ) -> Result<Self, PolylineError> {
        Polyline::with_sampling(points, curve_type, color, width, Sampling::default())
    }

    /// Builds a polyline sampling its curve as given by `sampling`.
    ///
    /// # Errors
    /// [`PolylineError::Empty`] if `points` is empty.
    pub fn with_sampling(
        points: Vec<Vector3<f64>>,
        curve_type: CurveType,
        color: Color,
        width: u32,
        sampling: Sampling,
    ) -> Result<Self, PolylineError> {
        if points.is_empty() {
            return Err(PolylineError::Empty);
        }

        let curve = match curve_type {
            CurveType::Linear => None,
            CurveType::Bezier => {
                let curve: BezierCurve<f64> = points.iter().cloned().collect();
                Some(curve.sample(sampling.bezier_samples))
            }
            CurveType::Spline => Some(spline::fit_with(&points, sampling.spline_subdivisions)),
        };

        let polyline = Polyline {
            points,
            curve_type,
            curve,
            color,
            width,
            sampling,
        };
        debug!(
            "Built {:?} polyline from {} points into {} curve points",
            polyline.curve_type,
            polyline.points.len(),
            polyline.curve_points().len()
        );
        Ok(polyline)
    }

    /// The control points
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// How the control points are connected
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// The points to draw, i.e. the sampled curve
    ///
    /// For [`CurveType::Linear`] these are the control points themselves.
    pub fn curve_points(&self) -> &[Vector3<f64>] {
        self.curve.as_deref().unwrap_or(&self.points)
    }

    /// Color to draw with
    pub fn color(&self) -> Color {
        self.color
    }

    /// Line width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sampling the curve was built with
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Length of the drawn curve
    pub fn length(&self) -> f64 {
        arc_length::total_length(self.curve_points())
    }

    /// Point at `fraction` of the drawn curve's length.
    ///
    /// See [`arc_length::position_at_fraction`].
    pub fn position_at_fraction(&self, fraction: f64) -> Result<Vector3<f64>, PolylineError> {
        arc_length::position_at_fraction(self.curve_points(), fraction)
    }

    /// Part of the drawn curve between the fractions `start` and `end` of its length.
    ///
    /// See [`arc_length::sub_polyline`].
    pub fn sub_polyline(&self, start: f64, end: f64) -> Result<Vec<Vector3<f64>>, PolylineError> {
        arc_length::sub_polyline(self.curve_points(), start, end)
    }
}

impl PartialEq for Polyline {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
            && self.curve_type == other.curve_type
            && self.color == other.color
            && self.width == other.width
    }
}

impl Display for Polyline {
    /// Lists the control points
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {}, {})", p.x, p.y, p.z)?;
        }
        f.write_str("]")
    }
}
