use crate::track::{Track, TrackSegment};
use crate::waypoint::Waypoint;
use crate::world::World;

/// The demonstration world written by the `gis-geojson` binary:
/// two waypoints followed by two tracks.
pub fn sample_world() -> World {
    let home = Waypoint::new(-121.5, 45.5)
        .with_elevation(30.0)
        .with_title("home")
        .with_icon("flag");
    let store = Waypoint::new(-121.5, 45.6)
        .with_title("store")
        .with_icon("dot");

    let ts1 = TrackSegment::new(vec![
        Waypoint::new(-122.0, 45.0),
        Waypoint::new(-122.0, 46.0),
        Waypoint::new(-121.0, 46.0),
    ]);
    let ts2 = TrackSegment::new(vec![Waypoint::new(-121.0, 45.0), Waypoint::new(-121.0, 46.0)]);
    let ts3 = TrackSegment::new(vec![Waypoint::new(-121.0, 45.5), Waypoint::new(-122.0, 45.5)]);

    let track1 = Track::new(vec![ts1, ts2]).with_title("track 1");
    let track2 = Track::new(vec![ts3]).with_title("track 2");

    World::new(
        "My Data",
        vec![home.into(), store.into(), track1.into(), track2.into()],
    )
}
