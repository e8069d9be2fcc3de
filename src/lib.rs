pub mod encoder;
pub mod error;
pub mod feature;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod options;
pub mod sample;
pub mod track;
pub mod waypoint;
pub mod world;

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use crate::error::{Error, Result, SerializationError};
pub use crate::feature::{ToFeature, WorldFeature};
pub use crate::options::ConvertOptions;
pub use crate::track::{Track, TrackSegment};
pub use crate::waypoint::Waypoint;
pub use crate::world::World;

/// Convert a world description to GeoJSON, returned as a JS object.
#[wasm_bindgen(js_name = worldToGeoJson)]
pub fn world_to_geojson(
    world: JsValue,
    options: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let world = parse_world(world)?;
    let fc = world.to_feature_collection_with(&opts);
    // plain JS objects, not `Map`s
    fc.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a world description to GeoJSON, returned as a compact JSON string.
#[wasm_bindgen(js_name = worldToGeoJsonString)]
pub fn world_to_geojson_string(
    world: JsValue,
    options: JsValue,
) -> std::result::Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let world = parse_world(world)?;
    Ok(world.to_json_with(&opts)?)
}

fn parse_world(world: JsValue) -> std::result::Result<World, JsValue> {
    let description: serde_json::Value =
        serde_wasm_bindgen::from_value(world).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(World::from_description(description)?)
}

fn parse_options(options: JsValue) -> std::result::Result<ConvertOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(ConvertOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
