//! Per-marker payload handed to the map surface.

use serde::{Deserialize, Serialize};

use crate::hotel::HotelRecord;
use crate::placement::PlacedMarker;

pub const MISSING_CATEGORY: &str = "N/A";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPopup {
    pub hotel_name: String,
    pub brand: String,
    /// `Cat <award category>`, with the `N/A` fallback already applied.
    pub category_line: String,
    pub url: Option<String>,
}

impl MarkerPopup {
    pub fn from_hotel(hotel: &HotelRecord) -> Self {
        Self {
            hotel_name: hotel.name.clone(),
            brand: hotel.brand_label().unwrap_or_default().to_string(),
            category_line: format!("Cat {}", hotel.award_category_label().unwrap_or(MISSING_CATEGORY)),
            url: hotel.url.clone().filter(|u| !u.is_empty()),
        }
    }
}

/// Everything the map needs to draw one marker without looking the hotel up again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPayload {
    pub key: String,
    pub lat: f64,
    pub lng: f64,
    pub popup: MarkerPopup,
}

impl From<&PlacedMarker<'_>> for MarkerPayload {
    fn from(marker: &PlacedMarker<'_>) -> Self {
        Self {
            key: marker.key.to_string(),
            lat: marker.lat,
            lng: marker.lng,
            popup: MarkerPopup::from_hotel(marker.hotel),
        }
    }
}
