use anyhow::{Context, Result};
use geo::{Coord, LineString, MultiPolygon};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::domain::GeoPoint;
use crate::render::{PathStyle, RegionStyle};
use crate::sim::RunOutcome;

/// Write a finished run as a GeoJSON `FeatureCollection`.
///
/// Each region becomes one feature with simplestyle properties
/// (`stroke`, `fill`, `fill-opacity`) mirroring the map layer styles,
/// so the file drops straight into any GeoJSON viewer.
pub fn write_run_geojson(path: &Path, outcome: &RunOutcome, traced: &[GeoPoint]) -> Result<()> {
    let collection = run_feature_collection(outcome, traced);

    let file = File::create(path)
        .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &GeoJson::FeatureCollection(collection))
        .context("Failed to serialize GeoJSON")?;

    Ok(())
}

pub fn run_feature_collection(outcome: &RunOutcome, traced: &[GeoPoint]) -> FeatureCollection {
    let mut features = Vec::new();

    match outcome {
        RunOutcome::Claimed {
            resolution,
            territory,
        } => {
            features.push(region_feature(
                "territory",
                &MultiPolygon(vec![territory.clone()]),
                &RegionStyle::territory(),
                None,
            ));
            if resolution.has_captured() {
                features.push(region_feature(
                    "captured",
                    &resolution.captured,
                    &RegionStyle::captured(),
                    Some(resolution.captured_area_m2),
                ));
            }
            if !resolution.remaining.0.is_empty() {
                features.push(region_feature(
                    "remaining-rival",
                    &resolution.remaining,
                    &RegionStyle::rival(),
                    Some(resolution.remaining_area_m2),
                ));
            }
        }
        RunOutcome::Fallback { territory, .. } => {
            features.push(region_feature(
                "territory",
                &MultiPolygon(vec![territory.clone()]),
                &RegionStyle::territory(),
                None,
            ));
        }
        RunOutcome::TooShort { .. } => {}
    }

    if !traced.is_empty() {
        features.push(path_feature(traced, &PathStyle::run()));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn region_feature(
    layer: &str,
    region: &MultiPolygon<f64>,
    style: &RegionStyle,
    area_m2: Option<f64>,
) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("layer".to_string(), JsonValue::from(layer));
    properties.insert("stroke".to_string(), JsonValue::from(style.stroke));
    properties.insert("fill".to_string(), JsonValue::from(style.fill));
    properties.insert(
        "fill-opacity".to_string(),
        JsonValue::from(style.fill_opacity),
    );
    if let Some(area) = area_m2 {
        properties.insert("area_m2".to_string(), JsonValue::from(area));
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(region))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn path_feature(points: &[GeoPoint], style: &PathStyle) -> Feature {
    let line: LineString<f64> = points.iter().map(|&p| Coord::from(p)).collect();

    let mut properties = JsonObject::new();
    properties.insert("layer".to_string(), JsonValue::from("path"));
    properties.insert("stroke".to_string(), JsonValue::from(style.stroke));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geojson::Value::from(&line))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
