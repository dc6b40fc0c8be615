mod components;
mod config;
mod context;
mod error;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 College Portal starting...");

    yew::Renderer::<App>::new().render();
}
