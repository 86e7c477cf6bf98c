use geo::{Area, BooleanOps, Centroid, GeodesicArea, MultiPolygon, Polygon};
use std::panic::{AssertUnwindSafe, catch_unwind};
use thiserror::Error;

use crate::domain::GeoPoint;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("territory polygon encloses no area")]
    Degenerate,
    #[error("boolean operation failed on the given rings")]
    Operation,
}

/// Outcome of resolving a user territory against the rival zone:
/// the captured overlap and what remains of the rival, both possibly
/// multi-part, with geodesic areas in m².
#[derive(Debug, Clone)]
pub struct ClaimResolution {
    pub captured: MultiPolygon<f64>,
    pub remaining: MultiPolygon<f64>,
    pub captured_area_m2: f64,
    pub remaining_area_m2: f64,
}

impl ClaimResolution {
    pub fn has_captured(&self) -> bool {
        !self.captured.0.is_empty()
    }

    pub fn is_full_capture(&self) -> bool {
        self.remaining.0.is_empty()
    }

    /// Centroid of the captured region, if anything was captured.
    pub fn captured_centroid(&self) -> Option<GeoPoint> {
        self.captured.centroid().map(Into::into)
    }
}

/// Split the rival zone against a closed user ring.
///
/// `captured` is the overlap of the two polygons and `remaining` is the
/// rival zone minus the user ring. Both operations are delegated to the
/// geometry library; a failure there is caught and surfaced so the caller
/// can fall back to rendering the raw ring.
pub fn resolve_claim(
    rival: &Polygon<f64>,
    user: &Polygon<f64>,
) -> Result<ClaimResolution, ResolveError> {
    // A collinear ring sails through closing but encloses nothing; the
    // clipping sweep cannot order its edges.
    if user.unsigned_area() <= f64::EPSILON {
        return Err(ResolveError::Degenerate);
    }

    let (captured, remaining) =
        catch_unwind(AssertUnwindSafe(|| {
            (rival.intersection(user), rival.difference(user))
        }))
        .map_err(|_| ResolveError::Operation)?;

    let captured_area_m2 = captured.geodesic_area_unsigned();
    let remaining_area_m2 = remaining.geodesic_area_unsigned();

    Ok(ClaimResolution {
        captured,
        remaining,
        captured_area_m2,
        remaining_area_m2,
    })
}

/// Geodesic area of a polygon in m².
pub fn area_m2(polygon: &Polygon<f64>) -> f64 {
    polygon.geodesic_area_unsigned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, coord};

    fn square(min_x: f64, min_y: f64, size: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                coord! { x: min_x, y: min_y },
                coord! { x: min_x + size, y: min_y },
                coord! { x: min_x + size, y: min_y + size },
                coord! { x: min_x, y: min_y + size },
                coord! { x: min_x, y: min_y },
            ]),
            vec![],
        )
    }

    #[test]
    fn test_overlap_splits_rival() {
        // Two 0.002 degree squares near the equator, offset by half a side
        let rival = square(0.0, 0.0, 0.002);
        let user = square(0.001, 0.001, 0.002);

        let res = resolve_claim(&rival, &user).unwrap();
        assert!(res.has_captured());
        assert!(!res.is_full_capture());

        // Captured + remaining add back up to the rival zone
        let rival_area = area_m2(&rival);
        let sum = res.captured_area_m2 + res.remaining_area_m2;
        assert!((sum - rival_area).abs() / rival_area < 1e-6);

        // A quarter of the rival square is captured
        assert!((res.captured_area_m2 / rival_area - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_disjoint_captures_nothing() {
        let rival = square(0.0, 0.0, 0.001);
        let user = square(0.01, 0.01, 0.001);

        let res = resolve_claim(&rival, &user).unwrap();
        assert!(!res.has_captured());
        assert_eq!(res.captured_area_m2, 0.0);
        assert!((res.remaining_area_m2 - area_m2(&rival)).abs() < 1.0);
    }

    #[test]
    fn test_containment_leaves_no_remainder() {
        let rival = square(0.001, 0.001, 0.001);
        let user = square(0.0, 0.0, 0.004);

        let res = resolve_claim(&rival, &user).unwrap();
        assert!(res.is_full_capture());
        assert!(res.remaining_area_m2.abs() < 1e-6);
    }

    #[test]
    fn test_split_remainder_is_multi_part() {
        // A thin user strip across the middle of the rival square cuts the
        // remainder into two parts
        let rival = square(0.0, 0.0, 0.003);
        let strip = Polygon::new(
            LineString::from(vec![
                coord! { x: -0.001, y: 0.001 },
                coord! { x: 0.004, y: 0.001 },
                coord! { x: 0.004, y: 0.002 },
                coord! { x: -0.001, y: 0.002 },
                coord! { x: -0.001, y: 0.001 },
            ]),
            vec![],
        );

        let res = resolve_claim(&rival, &strip).unwrap();
        assert_eq!(res.remaining.0.len(), 2);
    }

    #[test]
    fn test_collinear_ring_is_degenerate() {
        let flat = Polygon::new(
            LineString::from(vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 0.001, y: 0.0 },
                coord! { x: 0.002, y: 0.0 },
                coord! { x: 0.0, y: 0.0 },
            ]),
            vec![],
        );
        let rival = square(0.0, 0.0, 0.002);

        assert!(matches!(
            resolve_claim(&rival, &flat),
            Err(ResolveError::Degenerate)
        ));
    }

    #[test]
    fn test_centroid_of_captured_region() {
        let rival = square(0.0, 0.0, 0.002);
        let user = square(0.001, 0.001, 0.002);

        let res = resolve_claim(&rival, &user).unwrap();
        let c = res.captured_centroid().unwrap();
        // Overlap is the square (0.001..0.002, 0.001..0.002)
        assert!((c.lon - 0.0015).abs() < 1e-9);
        assert!((c.lat - 0.0015).abs() < 1e-9);
    }
}
