#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::config_store;
use stores::profiles::ProfileSource;

// Modules
mod components;
mod hooks;
mod routes;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let level = config_store::load_config().log_level();
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    log::info!("Starting ChatAndBuild client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Profile data source for every screen below the router
    use_context_provider(ProfileSource::bundled);

    use_effect(move || {
        config_store::init_config();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
