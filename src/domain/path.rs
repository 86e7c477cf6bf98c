use super::GeoPoint;

/// The traced run path: an append-only sequence of positions.
///
/// Cleared and re-seeded with the start position when a run starts;
/// closing it into a ring is the job of `geometry::rings`.
#[derive(Debug, Clone, Default)]
pub struct RunPath {
    points: Vec<GeoPoint>,
}

impl RunPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any previous trace and seed the path with the start position.
    pub fn reset(&mut self, start: GeoPoint) {
        self.points.clear();
        self.points.push(start);
    }

    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_seeds_start() {
        let mut path = RunPath::new();
        path.push(GeoPoint::new(1.0, 1.0));
        path.push(GeoPoint::new(2.0, 2.0));

        let start = GeoPoint::new(37.5045, 127.0489);
        path.reset(start);

        assert_eq!(path.len(), 1);
        assert_eq!(path.last(), Some(start));
    }

    #[test]
    fn test_append_order() {
        let mut path = RunPath::new();
        path.reset(GeoPoint::new(0.0, 0.0));
        path.push(GeoPoint::new(0.0, 0.1));
        path.push(GeoPoint::new(0.1, 0.1));

        let lons: Vec<f64> = path.points().iter().map(|p| p.lon).collect();
        assert_eq!(lons, vec![0.0, 0.1, 0.1]);
    }
}
