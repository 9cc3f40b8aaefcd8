//! Distinct, sorted option lists for the brand / country / region facets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::hotel::HotelRecord;

/// Labels starting with this prefix are placeholders and never offered as options.
pub const SENTINEL_PREFIX: &str = "UNKNOWN";


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    Brand,
    Country,
    Region,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Brand, Facet::Country, Facet::Region];

    /// Placeholder substituted when the hotel has no label for this facet.
    pub fn sentinel(self) -> &'static str {
        match self {
            Facet::Brand => "UNKNOWN_BRAND",
            Facet::Country => "UNKNOWN_COUNTRY",
            Facet::Region => "UNKNOWN_REGION",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Facet::Brand => "Brands",
            Facet::Country => "Countries",
            Facet::Region => "Regions",
        }
    }

    pub fn all_label(self) -> &'static str {
        match self {
            Facet::Brand => "All Brands",
            Facet::Country => "All Countries",
            Facet::Region => "All Regions",
        }
    }

    /// The hotel's label for this facet, or the sentinel when it is absent or empty.
    pub fn key_of(self, hotel: &HotelRecord) -> &str {
        let label = match self {
            Facet::Brand => hotel.brand_label(),
            Facet::Country => hotel.country_label(),
            Facet::Region => hotel.region_label(),
        };
        label.unwrap_or(self.sentinel())
    }
}

/// One value per facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerFacet<T> {
    pub brand: T,
    pub country: T,
    pub region: T,
}

impl<T> PerFacet<T> {
    pub fn from_fn(mut f: impl FnMut(Facet) -> T) -> Self {
        Self {
            brand: f(Facet::Brand),
            country: f(Facet::Country),
            region: f(Facet::Region),
        }
    }

    pub fn get(&self, facet: Facet) -> &T {
        match facet {
            Facet::Brand => &self.brand,
            Facet::Country => &self.country,
            Facet::Region => &self.region,
        }
    }

    pub fn get_mut(&mut self, facet: Facet) -> &mut T {
        match facet {
            Facet::Brand => &mut self.brand,
            Facet::Country => &mut self.country,
            Facet::Region => &mut self.region,
        }
    }
}

/// Selectable options per facet, computed once per dataset.
pub type FacetSets = PerFacet<Vec<String>>;

impl FacetSets {
    pub fn build(hotels: &[HotelRecord]) -> Self {
        let facets = PerFacet::from_fn(|facet| facet_options(hotels, facet));
        tracing::debug!(
            "built facets: {} brands, {} countries, {} regions",
            facets.brand.len(), facets.country.len(), facets.region.len()
        );
        facets
    }

    pub fn options(&self, facet: Facet) -> &[String] {
        self.get(facet)
    }
}

fn facet_options(hotels: &[HotelRecord], facet: Facet) -> Vec<String> {
    // BTreeSet dedupes and iterates in byte order, matching a case-sensitive ascending sort
    hotels
        .iter()
        .map(|hotel| facet.key_of(hotel))
        .filter(|key| !key.starts_with(SENTINEL_PREFIX))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
