//! GeoJSON codec for single polygons.
//!
//! Accepts a `Feature` with `Polygon` geometry, a bare `Polygon` geometry, or a
//! `FeatureCollection` (first polygon feature wins). Only the exterior ring is
//! read; holes are ignored. Positions may carry a third (altitude) component,
//! which is dropped. Longitudes are wrapped into `[-180, 180)`; latitudes
//! outside `[-90, 90]` are rejected.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::MirrorError;
use crate::sphere::{Point, Ring};

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Document {
    Feature(Feature),
    FeatureCollection { features: Vec<Feature> },
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    #[serde(other)]
    Unsupported,
}

/// Decode the exterior ring of the first polygon in `json`.
pub fn ring_from_geojson(json: &str) -> Result<Ring, MirrorError> {
    let doc: Document =
        serde_json::from_str(json).map_err(|e| MirrorError::geojson(e.to_string()))?;
    let coordinates = match doc {
        Document::Polygon { coordinates } => coordinates,
        Document::Feature(f) => polygon_coords(f)?,
        Document::FeatureCollection { features } => features
            .into_iter()
            .find_map(|f| polygon_coords(f).ok())
            .ok_or_else(|| MirrorError::geojson("no polygon feature in collection"))?,
    };
    let exterior = coordinates
        .into_iter()
        .next()
        .ok_or_else(|| MirrorError::geojson("polygon has no rings"))?;
    let points = exterior
        .iter()
        .enumerate()
        .map(|(i, pos)| match pos.as_slice() {
            [lon, lat, ..] => Ok(Point::new(*lon, *lat)),
            _ => Err(MirrorError::geojson(format!(
                "position {i} has fewer than 2 components"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ring::close(points)
}

fn polygon_coords(f: Feature) -> Result<Vec<Vec<Vec<f64>>>, MirrorError> {
    match f.geometry {
        Some(Geometry::Polygon { coordinates }) => Ok(coordinates),
        Some(Geometry::Unsupported) => Err(MirrorError::geojson("geometry is not a Polygon")),
        None => Err(MirrorError::geojson("feature has no geometry")),
    }
}

/// Encode `ring` as a `Feature<Polygon>` with the given properties.
pub fn ring_to_feature(ring: &Ring, properties: Value) -> Value {
    let coords: Vec<[f64; 2]> = ring.points().iter().map(|p| [p.lon, p.lat]).collect();
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [coords],
        }
    })
}
