//! Leaflet map surface. Draws whatever markers it is given; no filtering or geometry here.

use dioxus::{logger::tracing, prelude::*};
use common::{map_view::MapViewConfig, marker_popup::MarkerPayload};

use crate::api::leaflet_api::{init_map, set_markers};

const MAP_CONTAINER_ID: &str = "x-hotel-map";


#[component]
pub fn HotelMap(config: ReadSignal<MapViewConfig>, markers: ReadSignal<Vec<MarkerPayload>>) -> Element {
    use_effect(move || {
        let config = config.read().clone();
        spawn(async move {
            if let Err(e) = init_map(MAP_CONTAINER_ID, &config).await {
                tracing::error!("Failed to initialise map: {e:#}");
            }
        });
    });

    use_effect(move || {
        let markers = markers.read().clone();
        spawn(async move {
            tracing::debug!("Sending {} markers to the map", markers.len());
            if let Err(e) = set_markers(&markers).await {
                tracing::error!("Failed to update map markers: {e:#}");
            }
        });
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "x-hotel-map",
        }
    }
}
