pub mod hotel_map_page;
