use geojson::{FeatureCollection, GeoJson, JsonObject, JsonValue};
use serde::Deserialize;

use crate::encoder;
use crate::error::{Error, Result};
use crate::feature::{ToFeature, WorldFeature};
use crate::options::ConvertOptions;

/// A named, ordered collection of waypoints and tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    name: String,
    features: Vec<WorldFeature>,
}

#[derive(Deserialize)]
struct WorldDescription {
    name: String,
    #[serde(default)]
    features: Vec<JsonValue>,
}

impl World {
    pub fn new(name: impl Into<String>, features: Vec<WorldFeature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Build a world from its JSON description:
    /// `{"name": ..., "features": [{"kind": "waypoint" | "track", ...}]}`.
    pub fn from_description(description: JsonValue) -> Result<Self> {
        let WorldDescription { name, features } =
            serde_json::from_value(description).map_err(Error::InvalidDescription)?;
        let features = features
            .into_iter()
            .map(WorldFeature::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, features))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn features(&self) -> &[WorldFeature] {
        &self.features
    }

    pub fn add_feature(&mut self, feature: impl Into<WorldFeature>) {
        self.features.push(feature.into());
    }

    /// Append a feature given as a JSON description. Nothing is added on error.
    pub fn add_feature_value(&mut self, value: JsonValue) -> Result<()> {
        let feature = WorldFeature::try_from(value)?;
        self.features.push(feature);
        Ok(())
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        self.to_feature_collection_with(&ConvertOptions::default())
    }

    pub fn to_feature_collection_with(&self, opts: &ConvertOptions) -> FeatureCollection {
        let features = self
            .features
            .iter()
            .map(|f| f.to_feature_with(opts))
            .collect();

        let foreign_members = opts.include_world_name.then(|| {
            let mut members = JsonObject::new();
            members.insert("name".to_string(), JsonValue::String(self.name.clone()));
            members
        });

        FeatureCollection {
            bbox: None,
            features,
            foreign_members,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_json_with(&ConvertOptions::default())
    }

    pub fn to_json_with(&self, opts: &ConvertOptions) -> Result<String> {
        encoder::encode(&GeoJson::FeatureCollection(
            self.to_feature_collection_with(opts),
        ))
    }
}
