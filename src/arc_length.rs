//! Positions along a sequence of points, measured by the distance travelled along it.
//!
//! Every query builds a fresh table of cumulative lengths for the points it is given,
//! locates the requested distance in it by binary search and interpolates linearly within
//! the segment containing it.

use crate::error::PolylineError;
use log::trace;
use nalgebra::Vector3;

/// Computes the distance travelled along `points` up to each point.
///
/// The first entry is always `0`, the last one is the total length.
pub fn cumulative_lengths(points: &[Vector3<f64>]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut total = 0.0;
    let mut previous: Option<&Vector3<f64>> = None;
    for point in points {
        if let Some(previous) = previous {
            total += (point - previous).norm();
        }
        lengths.push(total);
        previous = Some(point);
    }
    lengths
}

/// Computes the total length of `points`, `0` if there are none.
pub fn total_length(points: &[Vector3<f64>]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Returns the point at `fraction` of the total length along `points`.
///
/// A single point is its own position for every fraction.
///
/// # Errors
/// - [`PolylineError::Empty`] if there are no points
/// - [`PolylineError::FractionOutOfRange`] if `fraction` isn't within `[0, 1]`
/// - [`PolylineError::MalformedLengths`] if a point isn't finite
pub fn position_at_fraction(
    points: &[Vector3<f64>],
    fraction: f64,
) -> Result<Vector3<f64>, PolylineError> {
    let fraction = check_fraction(fraction)?;
    let lengths = length_table(points)?;

    let distance = fraction * lengths[lengths.len() - 1];
    let location = locate(&lengths, distance)?;
    trace!("Position at distance {} is {:?}", distance, location);

    Ok(match location {
        Location::Exact(k) => points[k],
        Location::Between(index) => interpolate(points, &lengths, index, distance),
        Location::End => points[points.len() - 1],
    })
}

/// Cuts the part between `start` and `end` (as fractions of the total length) out of `points`.
///
/// The result starts and ends with the points at `start` and `end`, and contains every
/// original point in between. Cutting from `0` to `1` returns the original points.
///
/// # Errors
/// - [`PolylineError::Empty`] if there are no points
/// - [`PolylineError::FractionOutOfRange`] if a fraction isn't within `[0, 1]`
/// - [`PolylineError::InvalidRange`] unless `start < end`
/// - [`PolylineError::MalformedLengths`] if a point isn't finite
pub fn sub_polyline(
    points: &[Vector3<f64>],
    start: f64,
    end: f64,
) -> Result<Vec<Vector3<f64>>, PolylineError> {
    let start = check_fraction(start)?;
    let end = check_fraction(end)?;
    if start >= end {
        return Err(PolylineError::InvalidRange { start, end });
    }
    let lengths = length_table(points)?;
    let total = lengths[lengths.len() - 1];

    let mut sub = Vec::new();

    // Locate and interpolate the first point
    let start_distance = start * total;
    let location = locate(&lengths, start_distance)?;
    trace!("Sub-polyline starts at distance {} {:?}", start_distance, location);
    let mut index = match location {
        Location::Exact(k) => {
            sub.push(points[k]);
            k + 1
        }
        Location::Between(index) => {
            sub.push(interpolate(points, &lengths, index, start_distance));
            index
        }
        Location::End => {
            sub.push(points[points.len() - 1]);
            lengths.len()
        }
    };

    // Copy every point before the end
    let end_distance = end * total;
    while index < lengths.len() && lengths[index] < end_distance {
        sub.push(points[index]);
        index += 1;
    }
    if index == lengths.len() {
        return Ok(sub);
    }

    // Interpolate the last point unless it was hit exactly
    if lengths[index] == end_distance {
        while index < lengths.len() && lengths[index] == end_distance {
            sub.push(points[index]);
            index += 1;
        }
    } else {
        sub.push(interpolate(points, &lengths, index, end_distance));
    }
    Ok(sub)
}

/// Where a distance lies in a table of cumulative lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// Exactly at the point with this index
    Exact(usize),

    /// Strictly between the points `index - 1` and `index`
    Between(usize),

    /// Beyond the last point
    End,
}

/// Binary searches `distance` in `lengths`.
///
/// Zero length segments repeat a length, an exact match is always the first point with it.
/// A distance before the first point can't be located, since the table always starts at `0`
/// this means the table is broken.
fn locate(lengths: &[f64], distance: f64) -> Result<Location, PolylineError> {
    let index = lengths.partition_point(|length| *length < distance);
    if index == lengths.len() {
        Ok(Location::End)
    } else if lengths[index] == distance {
        Ok(Location::Exact(index))
    } else if index == 0 {
        Err(PolylineError::MalformedLengths)
    } else {
        Ok(Location::Between(index))
    }
}

/// Interpolates the point at `distance` between `points[index - 1]` and `points[index]`.
fn interpolate(
    points: &[Vector3<f64>],
    lengths: &[f64],
    index: usize,
    distance: f64,
) -> Vector3<f64> {
    let fraction =
        (distance - lengths[index - 1]) / (lengths[index] - lengths[index - 1]);
    points[index - 1].lerp(&points[index], fraction)
}

fn check_fraction(fraction: f64) -> Result<f64, PolylineError> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(PolylineError::FractionOutOfRange { fraction })
    }
}

/// Cumulative lengths of a non empty, finite sequence
fn length_table(points: &[Vector3<f64>]) -> Result<Vec<f64>, PolylineError> {
    if points.is_empty() {
        return Err(PolylineError::Empty);
    }
    let lengths = cumulative_lengths(points);
    if !lengths[lengths.len() - 1].is_finite() {
        return Err(PolylineError::MalformedLengths);
    }
    Ok(lengths)
}
