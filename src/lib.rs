#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod arc_length;
pub mod bezier;
pub mod error;
pub mod polyline;
pub mod spline;

pub use crate::bezier::BezierCurve;
pub use crate::error::PolylineError;
pub use crate::polyline::{Color, CurveType, Polyline, Sampling};
