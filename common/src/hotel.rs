//! Hotel records as they come out of the static dataset.

use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads as an empty string, which the label accessors treat as absent.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Label {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
}

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HotelLocation {
    pub country: Option<Label>,
    pub region: Option<Label>,
}

/// One hotel property. Read-only once loaded; its position in the dataset is its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub brand: Option<Label>,
    #[serde(default)]
    pub location: Option<HotelLocation>,
    #[serde(default)]
    pub award_category: Option<Label>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub url: Option<String>,
}

fn non_empty(label: Option<&Label>) -> Option<&str> {
    label.map(|l| l.label.as_str()).filter(|l| !l.is_empty())
}

impl HotelRecord {
    pub fn brand_label(&self) -> Option<&str> {
        non_empty(self.brand.as_ref())
    }

    pub fn country_label(&self) -> Option<&str> {
        non_empty(self.location.as_ref().and_then(|l| l.country.as_ref()))
    }

    pub fn region_label(&self) -> Option<&str> {
        non_empty(self.location.as_ref().and_then(|l| l.region.as_ref()))
    }

    pub fn award_category_label(&self) -> Option<&str> {
        non_empty(self.award_category.as_ref())
    }
}
