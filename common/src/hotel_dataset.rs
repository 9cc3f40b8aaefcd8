//! The loaded hotel collection together with its facet option lists.

use std::ops::Deref;
use std::rc::Rc;

use anyhow::Context;

use crate::facet_index::{Facet, FacetSets};
use crate::filter_engine::FilterState;
use crate::hotel::HotelRecord;
use crate::placement::{PlacedMarker, all_placements};


#[derive(Debug, Clone, PartialEq, Default)]
pub struct HotelDataset {
    hotels: Vec<HotelRecord>,
    facets: FacetSets,
}

impl HotelDataset {
    pub fn new(hotels: Vec<HotelRecord>) -> Self {
        let facets = FacetSets::build(&hotels);
        Self { hotels, facets }
    }

    /// Parses a JSON array of hotel records.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let hotels: Vec<HotelRecord> = serde_json::from_str(json).context("failed to parse hotel dataset")?;
        let dataset = Self::new(hotels);
        tracing::info!(
            "loaded {} hotels ({} brands, {} countries, {} regions)",
            dataset.hotels.len(),
            dataset.facets.options(Facet::Brand).len(),
            dataset.facets.options(Facet::Country).len(),
            dataset.facets.options(Facet::Region).len(),
        );
        Ok(dataset)
    }

    pub fn hotels(&self) -> &[HotelRecord] {
        &self.hotels
    }

    pub fn facets(&self) -> &FacetSets {
        &self.facets
    }

    pub fn initial_filter(&self) -> FilterState {
        FilterState::select_all(&self.facets)
    }

    pub fn filtered_hotels(&self, state: &FilterState) -> Vec<&HotelRecord> {
        state.filtered_hotels(&self.hotels)
    }

    /// Full recompute: filter, then place. Nothing is cached between calls.
    pub fn placements(&self, state: &FilterState) -> Vec<PlacedMarker<'_>> {
        all_placements(&self.filtered_hotels(state))
    }
}

/// Shared handle on a loaded dataset. Two handles are equal only when they point at the same
/// allocation.
#[derive(Debug, Clone)]
pub struct SharedHotelDataset(Rc<HotelDataset>);

impl SharedHotelDataset {
    pub fn new(dataset: HotelDataset) -> Self {
        Self(Rc::new(dataset))
    }
}

impl From<HotelDataset> for SharedHotelDataset {
    fn from(dataset: HotelDataset) -> Self {
        Self::new(dataset)
    }
}

impl Deref for SharedHotelDataset {
    type Target = HotelDataset;

    fn deref(&self) -> &HotelDataset {
        &self.0
    }
}

impl PartialEq for SharedHotelDataset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
