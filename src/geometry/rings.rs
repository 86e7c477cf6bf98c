use geo::{Coord, LineString, Polygon};
use thiserror::Error;

use crate::config::sim::MIN_RING_POINTS;
use crate::domain::GeoPoint;

#[derive(Debug, Error, PartialEq)]
pub enum RingError {
    #[error("need at least 3 distinct points to close a ring, got {got}")]
    TooFewPoints { got: usize },
    #[error("path contains non-finite coordinates")]
    NonFinite,
}

/// A loop that ends within this many degrees of its start snaps onto it
/// instead of growing a sliver edge.
const CLOSE_EPSILON: f64 = 1e-9;

/// Close a traced path into a polygon ring.
///
/// The first point is repeated as the last when the endpoints differ, so
/// the resulting exterior always starts and ends at the same coordinate.
/// Paths with fewer than 3 distinct points cannot enclose any area and
/// are rejected.
pub fn ring_from_path(points: &[GeoPoint]) -> Result<Polygon<f64>, RingError> {
    if points.iter().any(|p| !p.is_finite()) {
        return Err(RingError::NonFinite);
    }

    let distinct = distinct_count(points);
    if distinct < MIN_RING_POINTS {
        return Err(RingError::TooFewPoints { got: distinct });
    }

    let mut coords: Vec<Coord<f64>> = points.iter().map(|&p| p.into()).collect();
    let first = coords[0];
    let last_idx = coords.len() - 1;
    if (coords[last_idx].x - first.x).abs() <= CLOSE_EPSILON
        && (coords[last_idx].y - first.y).abs() <= CLOSE_EPSILON
    {
        coords[last_idx] = first;
    } else {
        coords.push(first);
    }

    Ok(Polygon::new(LineString::from(coords), vec![]))
}

fn distinct_count(points: &[GeoPoint]) -> usize {
    let mut seen: Vec<GeoPoint> = Vec::with_capacity(points.len());
    for &p in points {
        if !seen.contains(&p) {
            seen.push(p);
        }
    }
    seen.len()
}
