use geo::{MultiPolygon, Rect};

use super::{Layer, MapView, Marker, PathStyle, RegionStyle};
use crate::domain::GeoPoint;

/// One recorded rendering primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    Region {
        layer: Layer,
        parts: usize,
        style: RegionStyle,
    },
    Path {
        points: usize,
        style: PathStyle,
    },
    ClearLayer(Layer),
    Marker {
        marker: Marker,
        at: GeoPoint,
        label: Option<String>,
    },
    RemoveMarker(Marker),
    PanTo(GeoPoint),
    FitBounds(Rect<f64>),
    Message(String),
}

/// A `MapView` that records every primitive, for asserting on session
/// behavior in tests.
#[derive(Debug, Default)]
pub struct RecordingView {
    ops: Vec<RenderOp>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[RenderOp] {
        &self.ops
    }

    pub fn messages(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Message(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The last region drawn on `layer`, if it was not cleared afterwards.
    pub fn region_on(&self, layer: Layer) -> Option<&RenderOp> {
        let mut current = None;
        for op in &self.ops {
            match op {
                RenderOp::Region { layer: l, .. } if *l == layer => current = Some(op),
                RenderOp::ClearLayer(l) if *l == layer => current = None,
                _ => {}
            }
        }
        current
    }

    /// Where `marker` currently sits, with its label.
    pub fn marker(&self, marker: Marker) -> Option<(GeoPoint, Option<&str>)> {
        let mut current = None;
        for op in &self.ops {
            match op {
                RenderOp::Marker {
                    marker: m,
                    at,
                    label,
                } if *m == marker => current = Some((*at, label.as_deref())),
                RenderOp::RemoveMarker(m) if *m == marker => current = None,
                _ => {}
            }
        }
        current
    }
}

impl MapView for RecordingView {
    fn draw_region(&mut self, layer: Layer, region: &MultiPolygon<f64>, style: &RegionStyle) {
        self.ops.push(RenderOp::Region {
            layer,
            parts: region.0.len(),
            style: style.clone(),
        });
    }

    fn draw_path(&mut self, points: &[GeoPoint], style: &PathStyle) {
        self.ops.push(RenderOp::Path {
            points: points.len(),
            style: style.clone(),
        });
    }

    fn clear_layer(&mut self, layer: Layer) {
        self.ops.push(RenderOp::ClearLayer(layer));
    }

    fn place_marker(&mut self, marker: Marker, at: GeoPoint, label: Option<&str>) {
        self.ops.push(RenderOp::Marker {
            marker,
            at,
            label: label.map(str::to_string),
        });
    }

    fn remove_marker(&mut self, marker: Marker) {
        self.ops.push(RenderOp::RemoveMarker(marker));
    }

    fn pan_to(&mut self, at: GeoPoint) {
        self.ops.push(RenderOp::PanTo(at));
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>) {
        self.ops.push(RenderOp::FitBounds(bounds));
    }

    fn show_message(&mut self, text: &str) {
        self.ops.push(RenderOp::Message(text.to_string()));
    }
}
