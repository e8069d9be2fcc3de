use geojson::{Feature, GeoJson, Geometry, JsonObject, JsonValue};

use crate::encoder;
use crate::error::{Error, Result};
use crate::options::ConvertOptions;
use crate::track::Track;
use crate::waypoint::Waypoint;

/// Anything that can be rendered as a single GeoJSON Feature.
pub trait ToFeature {
    fn properties(&self) -> JsonObject;

    fn geometry(&self, opts: &ConvertOptions) -> Geometry;

    fn to_feature(&self) -> Feature {
        self.to_feature_with(&ConvertOptions::default())
    }

    fn to_feature_with(&self, opts: &ConvertOptions) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(self.geometry(opts)),
            id: None,
            properties: Some(self.properties()),
            foreign_members: None,
        }
    }

    /// Compact JSON text of this feature alone.
    fn to_json(&self) -> Result<String> {
        encoder::encode(&GeoJson::Feature(self.to_feature()))
    }
}

/// The feature kinds a world can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldFeature {
    Waypoint(Waypoint),
    Track(Track),
}

impl WorldFeature {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Waypoint(_) => "waypoint",
            Self::Track(_) => "track",
        }
    }
}

impl ToFeature for WorldFeature {
    fn properties(&self) -> JsonObject {
        match self {
            Self::Waypoint(wp) => wp.properties(),
            Self::Track(trk) => trk.properties(),
        }
    }

    fn geometry(&self, opts: &ConvertOptions) -> Geometry {
        match self {
            Self::Waypoint(wp) => wp.geometry(opts),
            Self::Track(trk) => trk.geometry(opts),
        }
    }
}

impl From<Waypoint> for WorldFeature {
    fn from(wp: Waypoint) -> Self {
        Self::Waypoint(wp)
    }
}

impl From<Track> for WorldFeature {
    fn from(trk: Track) -> Self {
        Self::Track(trk)
    }
}

/// Build a feature from its description, dispatching on the `kind` member.
impl TryFrom<JsonValue> for WorldFeature {
    type Error = Error;

    fn try_from(value: JsonValue) -> Result<Self> {
        let kind = match value.get("kind") {
            Some(JsonValue::String(kind)) => kind.clone(),
            Some(other) => return Err(Error::InvalidFeatureKind { kind: other.to_string() }),
            None => {
                return Err(Error::InvalidFeatureKind {
                    kind: String::from("<missing>"),
                });
            }
        };

        match kind.as_str() {
            "waypoint" => serde_json::from_value::<Waypoint>(value)
                .map(Self::Waypoint)
                .map_err(Error::InvalidDescription),
            "track" => serde_json::from_value::<Track>(value)
                .map(Self::Track)
                .map_err(Error::InvalidDescription),
            _ => Err(Error::InvalidFeatureKind { kind }),
        }
    }
}

/// Collect the present entries of `entries`, keeping their order.
pub(crate) fn build_properties(entries: &[(&str, Option<&str>)]) -> JsonObject {
    let mut props = JsonObject::new();
    for (key, value) in entries {
        if let Some(v) = value {
            props.insert(key.to_string(), JsonValue::String(v.to_string()));
        }
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_properties_skips_absent() {
        let props = build_properties(&[("title", None), ("icon", Some("dot"))]);
        assert_eq!(JsonValue::Object(props), json!({"icon": "dot"}));
        assert!(build_properties(&[("title", None)]).is_empty());
    }

    #[test]
    fn test_dispatch_matches_variant() {
        let wp = Waypoint::new(-121.5, 45.6).with_title("store");
        let feature: WorldFeature = wp.clone().into();
        assert_eq!(feature.kind(), "waypoint");
        assert_eq!(feature.to_feature(), wp.to_feature());

        let trk = Track::default().with_title("empty");
        let feature: WorldFeature = trk.clone().into();
        assert_eq!(feature.kind(), "track");
        assert_eq!(feature.to_feature(), trk.to_feature());
    }

    #[test]
    fn test_try_from_waypoint_description() {
        let feature = WorldFeature::try_from(json!({
            "kind": "waypoint", "lon": -121.5, "lat": 45.5, "ele": 30, "icon": "flag"
        }))
        .unwrap();
        assert_eq!(
            feature,
            WorldFeature::Waypoint(
                Waypoint::new(-121.5, 45.5)
                    .with_elevation(30.0)
                    .with_icon("flag")
            )
        );
    }

    #[test]
    fn test_try_from_unknown_kind() {
        let err = WorldFeature::try_from(json!({"kind": "polygon"})).unwrap_err();
        assert!(matches!(err, Error::InvalidFeatureKind { ref kind } if kind == "polygon"));
    }

    #[test]
    fn test_try_from_missing_kind() {
        let err = WorldFeature::try_from(json!({"lon": 0, "lat": 0})).unwrap_err();
        assert!(matches!(err, Error::InvalidFeatureKind { .. }));

        let err = WorldFeature::try_from(json!({"kind": 7})).unwrap_err();
        assert!(matches!(err, Error::InvalidFeatureKind { ref kind } if kind == "7"));
    }

    #[test]
    fn test_try_from_malformed_waypoint() {
        let err = WorldFeature::try_from(json!({"kind": "waypoint", "lat": 1.0})).unwrap_err();
        assert!(matches!(err, Error::InvalidDescription(_)));
    }
}
