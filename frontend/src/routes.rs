use dioxus::prelude::*;

use crate::pages::hotel_map_page::HotelMapPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    HotelMapPage {},
}
