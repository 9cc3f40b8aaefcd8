//! Page-scoped state shared by the map and the filter panel.

use dioxus::prelude::*;
use common::{filter_panel::{FilterAction, FilterPanelState}, hotel_dataset::SharedHotelDataset};


/// Provided once per map page. The panel state is only ever replaced whole through `dispatch`.
#[derive(Clone)]
pub struct HotelMapContext {
    pub dataset: SharedHotelDataset,
    pub panel: ReadSignal<FilterPanelState>,
    pub dispatch: Callback<FilterAction>,
}
