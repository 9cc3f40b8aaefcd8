//! Filter panel state and the actions the panel can dispatch.

use serde::{Deserialize, Serialize};

use crate::facet_index::{Facet, FacetSets};
use crate::filter_engine::{CollapseState, FilterState};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterAction {
    ToggleValue { facet: Facet, value: String },
    ToggleAll { facet: Facet },
    ToggleCollapse { facet: Facet },
}

/// Whole panel state. `apply` hands back a replacement, so readers never see a half-updated filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterPanelState {
    pub filter: FilterState,
    pub collapse: CollapseState,
}

impl FilterPanelState {
    pub fn new(facets: &FacetSets) -> Self {
        Self {
            filter: FilterState::select_all(facets),
            collapse: CollapseState::default(),
        }
    }

    pub fn apply(&self, action: &FilterAction, facets: &FacetSets) -> Self {
        tracing::debug!("filter action: {action:?}");
        match action {
            FilterAction::ToggleValue { facet, value } => Self {
                filter: self.filter.toggle_value(*facet, value),
                collapse: self.collapse,
            },
            FilterAction::ToggleAll { facet } => Self {
                filter: self.filter.toggle_all(*facet, facets.options(*facet)),
                collapse: self.collapse,
            },
            FilterAction::ToggleCollapse { facet } => Self {
                filter: self.filter.clone(),
                collapse: self.collapse.toggle(*facet),
            },
        }
    }

    /// State of the aggregate "All ..." checkbox.
    pub fn is_all_selected(&self, facet: Facet, facets: &FacetSets) -> bool {
        self.filter.is_all_selected(facet, facets.options(facet))
    }
}
