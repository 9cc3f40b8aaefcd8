//! Overlay version of the filter panel for narrow screens.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdFilterList};

use crate::components::filter_components::filter_panel::FilterPanel;


#[component]
pub fn FilterPopupButton(is_open: ReadSignal<bool>, set_open: Callback<bool>) -> Element {
    rsx! {
        button {
            class: "x-filter-popup-button",
            onclick: move |_| set_open(!is_open()),
            Icon { icon: MdFilterList, style: "width: 20px; height: 20px;" }
            if is_open() { "Close Filters" } else { "Open Filters" }
        }
    }
}

#[component]
pub fn FilterPopup(set_open: Callback<bool>) -> Element {
    rsx! {
        div {
            class: "x-filter-popup-overlay",
            onclick: move |_| set_open(false),
            div {
                class: "x-filter-popup",
                onclick: move |e| e.stop_propagation(),
                button {
                    class: "x-filter-close-button",
                    onclick: move |_| set_open(false),
                    "×"
                }
                FilterPanel {}
            }
        }
    }
}
