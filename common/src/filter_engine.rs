//! Multi-select filter state and the conjunctive hotel filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::facet_index::{Facet, FacetSets, PerFacet};
use crate::hotel::HotelRecord;


/// Selected values per facet. Every mutation returns a fresh state so a caller can swap it in whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub selected: PerFacet<BTreeSet<String>>,
}

impl FilterState {
    /// Everything selected: nothing filtered out.
    pub fn select_all(facets: &FacetSets) -> Self {
        Self {
            selected: PerFacet::from_fn(|facet| facets.options(facet).iter().cloned().collect()),
        }
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        self.selected.get(facet)
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Values outside the facet's option list are accepted as-is.
    pub fn toggle_value(&self, facet: Facet, value: &str) -> Self {
        let mut next = self.clone();
        let entry = next.selected.get_mut(facet);
        if !entry.remove(value) {
            entry.insert(value.to_string());
        }
        next
    }

    /// Clears the facet when it is "all selected" by count, otherwise selects every option.
    pub fn toggle_all(&self, facet: Facet, all_options: &[String]) -> Self {
        let mut next = self.clone();
        let entry = next.selected.get_mut(facet);
        if self.is_all_selected(facet, all_options) {
            entry.clear();
        } else {
            entry.extend(all_options.iter().cloned());
        }
        next
    }

    /// Cardinality check only. N of N values selected counts as all, whichever N they are.
    pub fn is_all_selected(&self, facet: Facet, all_options: &[String]) -> bool {
        self.selected(facet).len() == all_options.len()
    }

    pub fn admits(&self, hotel: &HotelRecord) -> bool {
        Facet::ALL
            .into_iter()
            .all(|facet| self.is_selected(facet, facet.key_of(hotel)))
    }

    /// Hotels passing every facet, in dataset order.
    pub fn filtered_hotels<'a>(&self, hotels: &'a [HotelRecord]) -> Vec<&'a HotelRecord> {
        hotels.iter().filter(|hotel| self.admits(hotel)).collect()
    }
}

/// Expanded/collapsed flag per facet section. No effect on filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollapseState {
    pub collapsed: PerFacet<bool>,
}

impl CollapseState {
    pub fn is_collapsed(&self, facet: Facet) -> bool {
        *self.collapsed.get(facet)
    }

    pub fn toggle(&self, facet: Facet) -> Self {
        let mut next = *self;
        let flag = next.collapsed.get_mut(facet);
        *flag = !*flag;
        next
    }
}
