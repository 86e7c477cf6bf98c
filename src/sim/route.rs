use crate::config::sim::{STEP_DEGREES, STEPS_PER_SIDE};
use crate::domain::GeoPoint;

/// The simulated position source: a rectangular practice loop around the
/// start point, walked one fixed-size step per tick.
///
/// The un-rotated loop heads east, south, west, then north for
/// `steps_per_side` ticks each; every movement vector is then rotated by
/// the configured angle, so the traced rectangle sits tilted on the map.
/// The iterator is finite and the run auto-stops when it runs dry.
#[derive(Debug, Clone)]
pub struct LoopRoute {
    position: GeoPoint,
    step: u32,
    steps_per_side: u32,
    step_deg: f64,
    cos_theta: f64,
    sin_theta: f64,
}

impl LoopRoute {
    /// Standard demo loop: 15 steps per side, 0.0001 degrees per step.
    pub fn new(start: GeoPoint, rotation_deg: f64) -> Self {
        Self::with_geometry(start, rotation_deg, STEPS_PER_SIDE, STEP_DEGREES)
    }

    pub fn with_geometry(
        start: GeoPoint,
        rotation_deg: f64,
        steps_per_side: u32,
        step_deg: f64,
    ) -> Self {
        let theta = rotation_deg.to_radians();
        Self {
            position: start,
            step: 0,
            steps_per_side,
            step_deg,
            cos_theta: theta.cos(),
            sin_theta: theta.sin(),
        }
    }

    pub fn total_steps(&self) -> u32 {
        self.steps_per_side * 4
    }
}

impl Iterator for LoopRoute {
    type Item = GeoPoint;

    fn next(&mut self) -> Option<GeoPoint> {
        let m = self.step_deg;
        // (dlon, dlat) per side of the un-rotated rectangle
        let (dx, dy) = match self.step / self.steps_per_side {
            0 => (m, 0.0),
            1 => (0.0, -m),
            2 => (-m, 0.0),
            3 => (0.0, m),
            _ => return None,
        };

        let rotated_dx = dx * self.cos_theta - dy * self.sin_theta;
        let rotated_dy = dx * self.sin_theta + dy * self.cos_theta;

        self.position.lon += rotated_dx;
        self.position.lat += rotated_dy;
        self.step += 1;

        Some(self.position)
    }
}
