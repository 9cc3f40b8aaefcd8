pub mod error_boundary;
pub mod filter_components;
pub mod map_components;
