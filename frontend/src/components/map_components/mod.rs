pub mod hotel_map;
