pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Реестр маршрутов статичен: ошибка здесь означает ошибку конфигурации
    if let Err(e) = contracts::shared::navigation::validate_registry() {
        log::error!("route registry is invalid, console not mounted: {}", e);
        return;
    }

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
