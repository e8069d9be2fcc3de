use serde::Deserialize;

/// Options for serializing a world to GeoJSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Include elevation as the 3rd coordinate value when present (default: true)
    #[serde(default = "default_true")]
    pub include_elevation: bool,

    /// Emit the world name as a top-level "name" member (default: false)
    #[serde(default)]
    pub include_world_name: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include_elevation: true,
            include_world_name: false,
        }
    }
}

fn default_true() -> bool {
    true
}
