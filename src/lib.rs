pub mod app;
pub mod checkin;
pub mod components;
pub mod error;
pub mod models;
pub mod navigation;
pub mod seed;
pub mod state;
pub mod store;
pub mod utils;
pub mod view_model;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
