//! Map surface settings passed to the Leaflet bridge at startup.

use serde::{Deserialize, Serialize};

const LEAFLET_IMAGES: &str = "https://unpkg.com/leaflet@1.9.4/dist/images";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIconConfig {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
    pub icon_size: [i32; 2],
    pub icon_anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [i32; 2],
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        Self {
            icon_url: format!("{LEAFLET_IMAGES}/marker-icon.png"),
            icon_retina_url: format!("{LEAFLET_IMAGES}/marker-icon-2x.png"),
            shadow_url: format!("{LEAFLET_IMAGES}/marker-shadow.png"),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapViewConfig {
    pub title: String,
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// Leaflet recenters on the home world copy when the user pans past the edge.
    pub world_copy_jump: bool,
    pub tile_url: String,
    pub attribution: String,
    /// Tiles repeat east-west unless this is set.
    pub no_wrap: bool,
    pub marker_icon: MarkerIconConfig,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            title: "Hyatt Hotels Map (2025.02)".to_string(),
            center: [24.418626, 54.434638],
            zoom: 3,
            world_copy_jump: true,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a>".to_string(),
            no_wrap: false,
            marker_icon: MarkerIconConfig::default(),
        }
    }
}
