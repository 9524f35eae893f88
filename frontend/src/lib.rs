pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting asset portal frontend");

    // Runtime config (env.js globals, then ./config.json) resolves in the
    // background; API calls await it before building URLs.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
