//! Frontend application entry point.

use hotel_map::app::App;

fn main() {
    dioxus::launch(App);
}
