use dioxus::{logger::tracing, prelude::*};

use common::{
    filter_panel::{FilterAction, FilterPanelState},
    hotel_dataset::SharedHotelDataset,
    map_view::MapViewConfig,
    marker_popup::MarkerPayload,
};
use crate::{
    components::{
        error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay},
        filter_components::{filter_panel::FilterPanel, filter_popup::{FilterPopup, FilterPopupButton}},
        map_components::hotel_map::HotelMap,
    },
    data_definitions::{embedded_dataset::load_embedded_dataset, hotel_map_state::HotelMapContext},
};


/// Map page
#[component]
pub fn HotelMapPage() -> Element {
    let dataset = use_hook(|| load_embedded_dataset().map(SharedHotelDataset::from).map_err(|e| format!("{e:#}")));
    let config = MapViewConfig::default();
    let page_title = config.title.clone();

    let page_body = match dataset {
        Ok(dataset) => rsx! { HotelMapRootComponent { dataset, config } },
        Err(error_txt) => {
            tracing::error!("Failed to load hotel dataset: {error_txt}");
            rsx! { ComponentErrorDisplay { error_txt } }
        }
    };

    rsx! {
        Title { "{page_title}" }
        {page_body}
    }
}

#[component]
fn HotelMapRootComponent(dataset: SharedHotelDataset, config: MapViewConfig) -> Element {
    let initial_dataset = dataset.clone();
    let mut panel = use_signal(move || FilterPanelState::new(initial_dataset.facets()));

    let dispatch_dataset = dataset.clone();
    let dispatch = use_callback(move |action: FilterAction| {
        let next = panel.peek().apply(&action, dispatch_dataset.facets());
        panel.set(next);
    });

    // filtered hotels and their placements are rebuilt from scratch on every panel change
    let marker_dataset = dataset.clone();
    let markers = use_memo(move || {
        let state = panel.read();
        let markers = marker_dataset.placements(&state.filter).iter().map(MarkerPayload::from).collect::<Vec<_>>();
        tracing::debug!("Recomputed {} markers", markers.len());
        markers
    });
    let count_dataset = dataset.clone();
    let visible_count = use_memo(move || count_dataset.filtered_hotels(&panel.read().filter).len());
    let total_count = dataset.hotels().len();

    let context_dataset = dataset.clone();
    use_context_provider(move || HotelMapContext {
        dataset: context_dataset,
        panel: panel.into(),
        dispatch,
    });

    let mut is_filter_popup_open = use_signal(|| false);
    let set_filter_popup_open = Callback::new(move |open: bool| is_filter_popup_open.set(open));
    let title = config.title.clone();

    rsx! {
        div {
            id: "x-hotel-map-page",
            class: "x-container",

            div {
                id: "x-map-container",
                class: "x-map-container",
                h1 { class: "x-map-title", "{title}" }
                ComponentErrorBoundary {
                    HotelMap { config, markers }
                }
                div {
                    class: "x-visible-count",
                    "Showing {visible_count} of {total_count} hotels"
                }
                FilterPopupButton { is_open: is_filter_popup_open, set_open: set_filter_popup_open }
                if is_filter_popup_open() {
                    FilterPopup { set_open: set_filter_popup_open }
                }
            }

            div {
                id: "x-filter-side-panel",
                class: "x-filter-side-panel",
                ComponentErrorBoundary {
                    FilterPanel {}
                }
            }
        }
    }
}
