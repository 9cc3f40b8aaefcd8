pub mod leaflet_api;
