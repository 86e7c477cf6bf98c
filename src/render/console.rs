use geo::{GeodesicArea, MultiPolygon, Rect};

use super::{Layer, MapView, Marker, PathStyle, RegionStyle};
use crate::domain::GeoPoint;

/// A `MapView` that narrates rendering to the terminal.
///
/// Messages always print; the drawing primitives only print in verbose
/// mode so the tick loop stays quiet behind the progress bar.
#[derive(Debug, Default)]
pub struct ConsoleView {
    verbose: bool,
}

impl ConsoleView {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl MapView for ConsoleView {
    fn draw_region(&mut self, layer: Layer, region: &MultiPolygon<f64>, style: &RegionStyle) {
        if self.verbose {
            println!(
                "  [map] {:?}: {} part(s), {:.0} m², {} fill {}",
                layer,
                region.0.len(),
                region.geodesic_area_unsigned(),
                style.stroke,
                style.fill_opacity,
            );
        }
    }

    fn draw_path(&mut self, points: &[GeoPoint], style: &PathStyle) {
        if self.verbose {
            println!("  [map] path: {} point(s), {}", points.len(), style.stroke);
        }
    }

    fn clear_layer(&mut self, layer: Layer) {
        if self.verbose {
            println!("  [map] clear {:?}", layer);
        }
    }

    fn place_marker(&mut self, marker: Marker, at: GeoPoint, label: Option<&str>) {
        if self.verbose {
            match label {
                Some(text) => println!(
                    "  [map] {:?} \"{}\" at ({:.5}, {:.5})",
                    marker, text, at.lat, at.lon
                ),
                None => println!("  [map] {:?} at ({:.5}, {:.5})", marker, at.lat, at.lon),
            }
        }
    }

    fn remove_marker(&mut self, marker: Marker) {
        if self.verbose {
            println!("  [map] remove {:?}", marker);
        }
    }

    fn pan_to(&mut self, at: GeoPoint) {
        if self.verbose {
            println!("  [map] pan to ({:.5}, {:.5})", at.lat, at.lon);
        }
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        if self.verbose {
            println!(
                "  [map] fit ({:.5}, {:.5}) .. ({:.5}, {:.5})",
                bounds.min().y,
                bounds.min().x,
                bounds.max().y,
                bounds.max().x,
            );
        }
    }

    fn show_message(&mut self, text: &str) {
        println!("! {}", text);
    }
}
