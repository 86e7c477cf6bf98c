pub mod console;
pub mod recorder;
pub mod style;

pub use console::ConsoleView;
pub use recorder::{RecordingView, RenderOp};
pub use style::{PathStyle, RegionStyle};

use geo::{MultiPolygon, Rect};

use crate::domain::GeoPoint;

/// Map layers the session draws into. One region or path per layer;
/// drawing a layer again replaces its previous content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    RivalZone,
    RemainingRival,
    Captured,
    Territory,
    Path,
}

/// Point markers the session places on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    CurrentPosition,
    RivalScore,
    UserScore,
}

/// The rendering collaborator. The core never touches a real map; it
/// drives these primitives and an implementation decides what they mean
/// (console lines here, tile-map layers in a real client).
pub trait MapView {
    fn draw_region(&mut self, layer: Layer, region: &MultiPolygon<f64>, style: &RegionStyle);
    fn draw_path(&mut self, points: &[GeoPoint], style: &PathStyle);
    fn clear_layer(&mut self, layer: Layer);
    fn place_marker(&mut self, marker: Marker, at: GeoPoint, label: Option<&str>);
    fn remove_marker(&mut self, marker: Marker);
    fn pan_to(&mut self, at: GeoPoint);
    fn fit_bounds(&mut self, bounds: Rect<f64>);
    fn show_message(&mut self, text: &str);
}
