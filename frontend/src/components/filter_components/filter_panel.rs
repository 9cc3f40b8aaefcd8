//! Facet filter panel: one collapsible checkbox list per facet.

use dioxus::prelude::*;
use common::{facet_index::Facet, filter_panel::FilterAction};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::data_definitions::hotel_map_state::HotelMapContext;


#[component]
pub fn FilterPanel() -> Element {
    rsx! {
        div {
            class: "x-filter-panel",
            h2 { class: "x-filter-title", "Filters" }
            for facet in Facet::ALL {
                FacetSection { key: "{facet:?}", facet }
            }
        }
    }
}

#[component]
fn FacetSection(facet: Facet) -> Element {
    let context = use_context::<HotelMapContext>();
    let panel = context.panel;
    let dispatch = context.dispatch;
    let dataset = context.dataset.clone();

    let is_collapsed = use_memo(move || panel.read().collapse.is_collapsed(facet));
    let all_selected = use_memo(move || panel.read().is_all_selected(facet, dataset.facets()));
    let options = context.dataset.facets().options(facet).to_vec();
    let title = facet.display_name();
    let all_label = facet.all_label().to_string();

    rsx! {
        div {
            class: "x-filter-section",
            div {
                class: "x-filter-section-header",
                onclick: move |_| dispatch(FilterAction::ToggleCollapse { facet }),
                h3 { class: "x-filter-section-title", "{title}" }
                span {
                    class: if is_collapsed() { "x-filter-collapse-icon x-collapsed" } else { "x-filter-collapse-icon" },
                    if is_collapsed() { "▼" } else { "▲" }
                }
            }
            if !is_collapsed() {
                div {
                    FacetCheckbox {
                        checked: all_selected(),
                        label: all_label,
                        is_aggregate: true,
                        ontoggle: move |_| dispatch(FilterAction::ToggleAll { facet }),
                    }
                    for value in options {
                        FacetValueCheckbox { key: "{value}", facet, value: value.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetValueCheckbox(facet: Facet, value: ReadSignal<String>) -> Element {
    let context = use_context::<HotelMapContext>();
    let panel = context.panel;
    let dispatch = context.dispatch;
    let is_checked = use_memo(move || panel.read().filter.is_selected(facet, &value.read()));

    rsx! {
        FacetCheckbox {
            checked: is_checked(),
            label: value.read().clone(),
            is_aggregate: false,
            ontoggle: move |_| dispatch(FilterAction::ToggleValue { facet, value: value.read().clone() }),
        }
    }
}

#[component]
fn FacetCheckbox(checked: bool, label: String, is_aggregate: bool, ontoggle: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_e| ontoggle(()),

            // FACET CHECKBOX
            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            // FACET VALUE
            div {
                class: if is_aggregate { "x-facet-label x-all-checkbox" } else { "x-facet-label" },
                "{label}"
            }
        }
    }
}
