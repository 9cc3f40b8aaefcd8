pub mod embedded_dataset;
pub mod hotel_map_state;
