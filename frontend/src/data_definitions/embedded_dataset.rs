//! Hotel dataset compiled into the bundle.

use anyhow::Context;
use common::hotel_dataset::HotelDataset;

const HOTELS_JSON: &str = include_str!("../../data/hotels.json");

pub fn load_embedded_dataset() -> anyhow::Result<HotelDataset> {
    HotelDataset::from_json_str(HOTELS_JSON).context("embedded dataset data/hotels.json")
}
