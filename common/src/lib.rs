//! Hotel map core shared with the frontend: dataset model, facet filtering and marker placement.

extern crate serde;


pub mod hotel;
pub mod hotel_dataset;
pub mod facet_index;
pub mod filter_engine;
pub mod filter_panel;
pub mod placement;
pub mod marker_popup;
pub mod map_view;
