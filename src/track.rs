use geojson::{Geometry, JsonObject, LineStringType, Value};
use serde::Deserialize;

use crate::feature::{ToFeature, build_properties};
use crate::options::ConvertOptions;
use crate::waypoint::Waypoint;

/// An ordered run of points forming one continuous line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TrackSegment {
    points: Vec<Waypoint>,
}

impl TrackSegment {
    pub fn new(points: Vec<Waypoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn coordinates(&self) -> LineStringType {
        self.line(true)
    }

    fn line(&self, include_elevation: bool) -> LineStringType {
        self.points
            .iter()
            .map(|pt| pt.position(include_elevation))
            .collect()
    }
}

impl FromIterator<Waypoint> for TrackSegment {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A titled multi-part line, serialized as a MultiLineString.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Track {
    segments: Vec<TrackSegment>,
    title: Option<String>,
}

impl Track {
    pub fn new(segments: Vec<TrackSegment>) -> Self {
        Self {
            segments,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn coordinates(&self) -> Vec<LineStringType> {
        self.lines(true)
    }

    fn lines(&self, include_elevation: bool) -> Vec<LineStringType> {
        self.segments
            .iter()
            .map(|seg| seg.line(include_elevation))
            .collect()
    }
}

impl ToFeature for Track {
    fn properties(&self) -> JsonObject {
        build_properties(&[("title", self.title())])
    }

    fn geometry(&self, opts: &ConvertOptions) -> Geometry {
        Geometry::new(Value::MultiLineString(self.lines(opts.include_elevation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn segment(points: &[(f64, f64)]) -> TrackSegment {
        points
            .iter()
            .map(|&(lon, lat)| Waypoint::new(lon, lat))
            .collect()
    }

    #[test]
    fn test_segment_preserves_point_order() {
        let seg = segment(&[(-122.0, 45.0), (-122.0, 46.0), (-121.0, 46.0)]);
        assert_eq!(
            seg.coordinates(),
            vec![vec![-122.0, 45.0], vec![-122.0, 46.0], vec![-121.0, 46.0]]
        );
    }

    #[test]
    fn test_empty_segment() {
        assert!(TrackSegment::new(Vec::new()).coordinates().is_empty());
    }

    #[test]
    fn test_segment_keeps_elevation() {
        let seg = TrackSegment::new(vec![
            Waypoint::new(1.0, 2.0).with_elevation(3.0),
            Waypoint::new(4.0, 5.0),
        ]);
        assert_eq!(seg.coordinates(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]);
    }

    #[test]
    fn test_single_segment_track_feature() {
        let track = Track::new(vec![segment(&[
            (-122.0, 45.0),
            (-122.0, 46.0),
            (-121.0, 46.0),
        ])])
        .with_title("track 1");

        let feature = serde_json::to_value(track.to_feature()).unwrap();
        assert_eq!(
            feature,
            json!({
                "type": "Feature",
                "properties": {"title": "track 1"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[-122.0, 45.0], [-122.0, 46.0], [-121.0, 46.0]]]
                }
            })
        );
    }

    #[test]
    fn test_two_segment_track() {
        let track = Track::new(vec![
            segment(&[(-122.0, 45.0), (-122.0, 46.0), (-121.0, 46.0)]),
            segment(&[(-121.0, 45.0), (-121.0, 46.0)]),
        ]);
        let coords = track.coordinates();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].len(), 3);
        assert_eq!(coords[1], vec![vec![-121.0, 45.0], vec![-121.0, 46.0]]);
    }

    #[test]
    fn test_untitled_track_has_empty_properties() {
        let track = Track::new(vec![segment(&[(0.0, 0.0), (1.0, 1.0)])]);
        assert!(track.properties().is_empty());
        assert_eq!(track.to_feature().properties, Some(JsonObject::new()));
    }

    #[test]
    fn test_track_without_segments() {
        let geom = Track::default().geometry(&ConvertOptions::default());
        assert_eq!(
            serde_json::to_value(&geom).unwrap(),
            json!({"type": "MultiLineString", "coordinates": []})
        );
    }

    #[test]
    fn test_deserialize_segments_as_point_arrays() {
        let track: Track = serde_json::from_value(json!({
            "title": "track 2",
            "segments": [[{"lon": -121, "lat": 45.5}, {"lon": -122, "lat": 45.5}]]
        }))
        .unwrap();
        assert_eq!(track.title(), Some("track 2"));
        assert_eq!(track.segments()[0].points().len(), 2);
        assert_eq!(track.segments()[0].points()[1].longitude(), -122.0);
    }
}
