use geo::{Point, Polygon, Rotate};

use crate::domain::GeoPoint;

/// Rotate a polygon about a pivot point.
///
/// Degrees, counter-clockwise positive, on the lon/lat plane.
pub fn rotate_about(polygon: &Polygon<f64>, degrees: f64, pivot: GeoPoint) -> Polygon<f64> {
    polygon.rotate_around_point(degrees, Point::new(pivot.lon, pivot.lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, coord};

    fn unit_square() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                coord! { x: -1.0, y: -1.0 },
                coord! { x: 1.0, y: -1.0 },
                coord! { x: 1.0, y: 1.0 },
                coord! { x: -1.0, y: 1.0 },
                coord! { x: -1.0, y: -1.0 },
            ]),
            vec![],
        )
    }

    #[test]
    fn test_rotation_maps_known_vertex() {
        // 90 degrees counter-clockwise about the origin: (1, -1) -> (1, 1)
        let rotated = rotate_about(&unit_square(), 90.0, GeoPoint::new(0.0, 0.0));
        let vertex = rotated.exterior().0[1];
        assert!((vertex.x - 1.0).abs() < 1e-9);
        assert!((vertex.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pivot_vertex_stays_put() {
        // Rotating about one of the square's own corners keeps that corner fixed
        let rotated = rotate_about(&unit_square(), 33.0, GeoPoint::new(-1.0, -1.0));
        let corner = rotated.exterior().0[0];
        assert!((corner.x - -1.0).abs() < 1e-9);
        assert!((corner.y - -1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let rotated = rotate_about(&unit_square(), 0.0, GeoPoint::new(5.0, 5.0));
        for (a, b) in rotated.exterior().0.iter().zip(unit_square().exterior().0.iter()) {
            assert!((a.x - b.x).abs() < 1e-12);
            assert!((a.y - b.y).abs() < 1e-12);
        }
    }
}
