//! JSON text encoding for GeoJSON values.
//!
//! Output goes through `serde_json` with [`GeoJsonFormatter`], which prints
//! integral coordinates without a trailing `.0`. Positions are checked for
//! NaN and infinities first, since `serde_json` would silently write those
//! as `null`. Members are written in a fixed order: `type` first, then
//! `properties` before `geometry` for features.

use std::io;

use geojson::{GeoJson, Geometry, JsonObject, JsonValue, Value};
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use crate::error::{Result, SerializationError};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

const COLLECTION_MEMBERS: &[&str] = &["type", "features"];
const FEATURE_MEMBERS: &[&str] = &["type", "properties", "geometry"];
const GEOMETRY_MEMBERS: &[&str] = &["type", "coordinates", "geometries"];

/// Compact formatter that writes integral floats as integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoJsonFormatter;

impl Formatter for GeoJsonFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        // -0.0 keeps its sign
        if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER && !is_negative_zero(value) {
            self.write_i64(writer, value as i64)
        } else {
            CompactFormatter.write_f64(writer, value)
        }
    }
}

/// Encode a GeoJSON object as compact JSON text.
pub fn encode(geojson: &GeoJson) -> Result<String> {
    check_finite(geojson)?;
    let value = member_order(serde_json::to_value(geojson)?);
    Ok(to_compact_string(&value)?)
}

fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

/// Rewrite GeoJSON objects so their members follow the fixed order.
/// Property maps are left as built.
fn member_order(value: JsonValue) -> JsonValue {
    let JsonValue::Object(object) = value else {
        return value;
    };

    let kind = object.get("type").and_then(JsonValue::as_str).map(str::to_owned);
    let mut object = match kind.as_deref() {
        Some("FeatureCollection") => reorder(object, COLLECTION_MEMBERS),
        Some("Feature") => reorder(object, FEATURE_MEMBERS),
        Some(_) => reorder(object, GEOMETRY_MEMBERS),
        None => return JsonValue::Object(object),
    };

    if let Some(geometry) = object.get_mut("geometry") {
        *geometry = member_order(std::mem::take(geometry));
    }
    for key in ["features", "geometries"] {
        if let Some(JsonValue::Array(items)) = object.get_mut(key) {
            for item in items.iter_mut() {
                *item = member_order(std::mem::take(item));
            }
        }
    }
    JsonValue::Object(object)
}

fn reorder(object: JsonObject, leading: &[&str]) -> JsonObject {
    let mut ordered = JsonObject::new();
    for key in leading {
        if let Some(value) = object.get(*key) {
            ordered.insert(key.to_string(), value.clone());
        }
    }
    for (key, value) in object {
        if !leading.contains(&key.as_str()) {
            ordered.insert(key, value);
        }
    }
    ordered
}

/// Serialize any value with [`GeoJsonFormatter`].
pub fn to_compact_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, GeoJsonFormatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Re-indent arbitrary JSON text with four spaces per level.
pub fn reformat_pretty(input: &str) -> serde_json::Result<String> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn check_finite(geojson: &GeoJson) -> std::result::Result<(), SerializationError> {
    let found = match geojson {
        GeoJson::Geometry(geom) => non_finite_in(geom).map(|value| (0, value)),
        GeoJson::Feature(feature) => feature
            .geometry
            .as_ref()
            .and_then(non_finite_in)
            .map(|value| (0, value)),
        GeoJson::FeatureCollection(fc) => fc.features.iter().enumerate().find_map(|(i, f)| {
            f.geometry.as_ref().and_then(non_finite_in).map(|value| (i, value))
        }),
    };

    match found {
        Some((feature, value)) => Err(SerializationError::NonFiniteCoordinate { feature, value }),
        None => Ok(()),
    }
}

fn non_finite_in(geom: &Geometry) -> Option<f64> {
    match &geom.value {
        Value::Point(pos) => non_finite_position(pos),
        Value::MultiPoint(line) | Value::LineString(line) => {
            line.iter().find_map(|pos| non_finite_position(pos))
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines
            .iter()
            .flatten()
            .find_map(|pos| non_finite_position(pos)),
        Value::MultiPolygon(polygons) => polygons
            .iter()
            .flatten()
            .flatten()
            .find_map(|pos| non_finite_position(pos)),
        Value::GeometryCollection(geoms) => geoms.iter().find_map(non_finite_in),
    }
}

fn non_finite_position(pos: &[f64]) -> Option<f64> {
    pos.iter().copied().find(|c| !c.is_finite())
}
