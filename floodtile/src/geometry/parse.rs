//! GeoJSON ingestion
//!
//! Parses a Feature Provider's raw GeoJSON bytes into the feature model.
//! Individual records that cannot be represented (unknown geometry kinds,
//! malformed coordinates) are skipped and counted rather than failing the
//! whole collection.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use super::types::{AttrValue, Coord, Feature, FeatureSet, Geometry, Polygon};
use crate::coord::Crs;

/// Errors that make an entire source document unusable.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON in source data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a FeatureCollection, found '{found}'")]
    NotACollection { found: String },
    #[error("FeatureCollection carries no features array")]
    MissingFeatures,
}

/// Outcome of one ingest: the parsed set plus how many source records
/// were dropped as unsupported or malformed.
#[derive(Debug)]
pub struct IngestReport {
    pub feature_set: FeatureSet,
    pub skipped: usize,
}

/// Parses raw GeoJSON bytes into a [`FeatureSet`] in geographic coordinates.
///
/// # Errors
///
/// Fails only when the document as a whole is unusable: not valid JSON, not
/// a FeatureCollection, or missing its features array. Per-record problems
/// are counted in the report instead.
pub fn ingest_geojson(raw: &[u8], source_id: &str) -> Result<IngestReport, ParseError> {
    let root: Value = serde_json::from_slice(raw)?;

    let kind = root.get("type").and_then(Value::as_str).unwrap_or("<missing>");
    if kind != "FeatureCollection" {
        return Err(ParseError::NotACollection {
            found: kind.to_string(),
        });
    }

    let records = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingFeatures)?;

    let mut features = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match parse_feature(record) {
            Some(feature) => features.push(feature),
            None => skipped += 1,
        }
    }

    Ok(IngestReport {
        feature_set: FeatureSet::new(source_id, Crs::Geographic, features),
        skipped,
    })
}

fn parse_feature(record: &Value) -> Option<Feature> {
    let geometry = parse_geometry(record.get("geometry")?)?;
    let attributes = parse_properties(record.get("properties"));
    Some(Feature::new(geometry, attributes))
}

fn parse_geometry(raw: &Value) -> Option<Geometry> {
    let kind = raw.get("type")?.as_str()?;
    let coordinates = raw.get("coordinates")?;

    match kind {
        "Point" => Some(Geometry::Point(parse_position(coordinates)?)),
        "MultiPoint" => Some(Geometry::MultiPoint(parse_line(coordinates)?)),
        "LineString" => Some(Geometry::LineString(parse_line(coordinates)?)),
        "MultiLineString" => Some(Geometry::MultiLineString(parse_lines(coordinates)?)),
        "Polygon" => Some(Geometry::Polygon(parse_polygon(coordinates)?)),
        "MultiPolygon" => {
            let polygons = coordinates
                .as_array()?
                .iter()
                .map(parse_polygon)
                .collect::<Option<Vec<_>>>()?;
            Some(Geometry::MultiPolygon(polygons))
        }
        // GeometryCollection and anything unrecognized
        _ => None,
    }
}

fn parse_polygon(raw: &Value) -> Option<Polygon> {
    let mut rings = raw.as_array()?.iter().map(parse_line);
    let exterior = rings.next()??;
    let interiors = rings.collect::<Option<Vec<_>>>()?;
    Some(Polygon::new(exterior, interiors))
}

fn parse_lines(raw: &Value) -> Option<Vec<Vec<Coord>>> {
    raw.as_array()?.iter().map(parse_line).collect()
}

fn parse_line(raw: &Value) -> Option<Vec<Coord>> {
    raw.as_array()?.iter().map(parse_position).collect()
}

/// A GeoJSON position: `[lon, lat, ...]` with extra ordinates ignored.
fn parse_position(raw: &Value) -> Option<Coord> {
    let parts = raw.as_array()?;
    if parts.len() < 2 {
        return None;
    }
    Some(Coord::new(parts[0].as_f64()?, parts[1].as_f64()?))
}

fn parse_properties(raw: Option<&Value>) -> HashMap<String, AttrValue> {
    let Some(Value::Object(map)) = raw else {
        return HashMap::new();
    };

    let mut attributes = HashMap::with_capacity(map.len());
    for (key, value) in map {
        let attr = match value {
            Value::String(s) => AttrValue::Text(s.clone()),
            Value::Number(n) => match n.as_f64() {
                Some(f) => AttrValue::Number(f),
                None => continue,
            },
            Value::Bool(b) => AttrValue::Bool(*b),
            Value::Null => continue,
            // Nested structure survives as its JSON text
            other => AttrValue::Text(other.to_string()),
        };
        attributes.insert(key.clone(), attr);
    }
    attributes
}
