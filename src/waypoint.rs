use geojson::{Geometry, JsonObject, Position, Value};
use serde::Deserialize;

use crate::feature::{ToFeature, build_properties};
use crate::options::ConvertOptions;

/// A single point with optional elevation, title, and icon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Waypoint {
    #[serde(rename = "lon")]
    longitude: f64,
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "ele")]
    elevation: Option<f64>,
    title: Option<String>,
    icon: Option<String>,
}

impl Waypoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation: None,
            title: None,
            icon: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// `[lon, lat]`, or `[lon, lat, ele]` when an elevation is set.
    pub fn coordinates(&self) -> Position {
        self.position(true)
    }

    pub(crate) fn position(&self, include_elevation: bool) -> Position {
        match (include_elevation, self.elevation) {
            (true, Some(ele)) => vec![self.longitude, self.latitude, ele],
            _ => vec![self.longitude, self.latitude],
        }
    }
}

impl ToFeature for Waypoint {
    fn properties(&self) -> JsonObject {
        build_properties(&[("title", self.title()), ("icon", self.icon())])
    }

    fn geometry(&self, opts: &ConvertOptions) -> Geometry {
        Geometry::new(Value::Point(self.position(opts.include_elevation)))
    }
}
