//! Map page configuration.
//!
//! The rendering layer reads these values instead of hard-coding them. None of
//! them affect validity or statistics.

use std::path::PathBuf;

use crate::Coordinate;

/// Configuration for the map view and its resources.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial view centre.
    /// Default: FCT/UNL campus (38.661, -9.2044)
    pub centre: Coordinate,

    /// Initial zoom level. Default: 12
    pub initial_zoom: u8,

    /// Zoom range allowed on tile layers. Default: 6..=19
    pub min_zoom: u8,
    pub max_zoom: u8,

    /// Tile size in pixels. Default: 512
    pub tile_size: u32,

    /// Base layer style ids, first one shown initially.
    pub base_layers: Vec<String>,

    /// Directory holding icons and the dataset. Default: "resources/"
    pub resources_dir: PathBuf,

    /// Dataset file name inside `resources_dir`. Default: "rgn.json"
    pub dataset_file: String,

    /// Marker icon edge in pixels. Default: 16
    pub icon_size: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            centre: Coordinate::new(38.661, -9.2044),
            initial_zoom: 12,
            min_zoom: 6,
            max_zoom: 19,
            tile_size: 512,
            base_layers: [
                "streets-v11",
                "outdoors-v11",
                "light-v10",
                "dark-v10",
                "satellite-v9",
                "satellite-streets-v11",
                "navigation-day-v1",
                "navigation-night-v1",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            resources_dir: PathBuf::from("resources/"),
            dataset_file: "rgn.json".to_string(),
            icon_size: 16,
        }
    }
}

impl MapConfig {
    /// Full path of the dataset file.
    pub fn dataset_path(&self) -> PathBuf {
        self.resources_dir.join(&self.dataset_file)
    }

    /// Path of the PNG for an icon key such as `"order2"`.
    pub fn icon_path(&self, icon_key: &str) -> PathBuf {
        self.resources_dir.join(format!("{icon_key}.png"))
    }

    /// Layer name shown in the layer switcher: the style id, capitalised.
    pub fn layer_display_name(style: &str) -> String {
        let mut chars = style.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Style shown when the map opens.
    pub fn default_layer(&self) -> Option<&str> {
        self.base_layers.first().map(String::as_str)
    }
}
