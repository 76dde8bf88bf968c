//! Errors returned by polyline construction and arc-length queries.

use thiserror::Error;

/// Everything that can go wrong when building or querying a polyline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// A polyline needs at least one point.
    #[error("polyline must contain at least one point")]
    Empty,

    /// A fractional distance was NaN or outside `[0, 1]`.
    #[error("fraction must lie within [0, 1], got {fraction}")]
    FractionOutOfRange {
        /// The rejected fraction
        fraction: f64,
    },

    /// A sub-polyline's start fraction wasn't strictly before its end fraction.
    #[error("sub-polyline start {start} must be less than its end {end}")]
    InvalidRange {
        /// Requested start fraction
        start: f64,
        /// Requested end fraction
        end: f64,
    },

    /// The cumulative lengths couldn't be searched.
    ///
    /// Happens when a point has non-finite coordinates, which makes the lengths non-monotonic.
    #[error("unable to find position in polyline using binary search")]
    MalformedLengths,
}
