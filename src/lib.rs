use wasm_bindgen::prelude::*;

use crate::domain::logging::{init_logger, init_time_provider, LogComponent};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

/// Install logging and the panic hook, then mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    init_time_provider(Box::new(BrowserTimeProvider::new()));
    let console_logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    init_logger(Box::new(console_logger));

    log_info!(LogComponent::Presentation("Initialize"), "🚀 Mounting Brent dashboard");

    leptos::mount_to_body(app::App);
}
