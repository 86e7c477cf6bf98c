use geo::{Centroid, Coord, LineString, MultiPolygon, Polygon};

use super::GeoPoint;
use crate::config::sim::{RIVAL_SCORE, RIVAL_SCORE_CEDED};
use crate::geometry::rotate::rotate_about;

/// Base corners of the rival zone as (lat, lon) pairs (SW, SE, NE, NW).
/// A rectangle around the mock start position.
pub const RIVAL_BASE_RING: [(f64, f64); 4] = [
    (37.5035, 127.0479),
    (37.5035, 127.0499),
    (37.5055, 127.0499),
    (37.5055, 127.0479),
];

/// The opposing territory: a fixed ring rotated about a pivot point.
///
/// The zone keeps its full footprint for the whole session; `remaining`
/// shrinks only when territory is ceded at the end of a run, and `reset`
/// restores the intact zone when the next run starts.
#[derive(Debug, Clone)]
pub struct RivalZone {
    full: Polygon<f64>,
    remaining: MultiPolygon<f64>,
    score: u32,
}

impl RivalZone {
    /// Build the zone from the base ring, rotated `rotation_deg` degrees
    /// counter-clockwise about `pivot`.
    pub fn new(pivot: GeoPoint, rotation_deg: f64) -> Self {
        let mut coords: Vec<Coord<f64>> = RIVAL_BASE_RING
            .iter()
            .map(|&(lat, lon)| GeoPoint::new(lat, lon).into())
            .collect();
        // Close the ring (first coordinate repeated as last)
        coords.push(coords[0]);

        let base = Polygon::new(LineString::from(coords), vec![]);
        let full = rotate_about(&base, rotation_deg, pivot);

        Self {
            remaining: MultiPolygon(vec![full.clone()]),
            full,
            score: RIVAL_SCORE,
        }
    }

    /// Restore the intact zone and score.
    pub fn reset(&mut self) {
        self.remaining = MultiPolygon(vec![self.full.clone()]);
        self.score = RIVAL_SCORE;
    }

    /// The full rotated ring, regardless of ceded territory.
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.full
    }

    /// What is left of the zone after any ceded territory.
    pub fn remaining(&self) -> &MultiPolygon<f64> {
        &self.remaining
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_ceded(&self) -> bool {
        self.score == RIVAL_SCORE_CEDED
    }

    /// Record the outcome of a run: the zone shrinks to `remaining` and
    /// the score drops.
    pub fn cede(&mut self, remaining: MultiPolygon<f64>) {
        self.remaining = remaining;
        self.score = RIVAL_SCORE_CEDED;
    }

    /// Centroid of the full zone, where the score marker sits.
    pub fn centroid(&self) -> Option<GeoPoint> {
        self.full.centroid().map(Into::into)
    }
}
