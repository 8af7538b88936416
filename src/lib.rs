// ============================================================================
// SPACEX LAUNCHES - Yew + WASM
// ============================================================================
// - Components: render state, emit user events
// - Hooks: bind the viewmodel to a use_reducer store
// - ViewModels: session orchestration (fetch lifecycle, modal actions)
// - Services: HTTP only
// - State: snapshot + pure reducer
// - Models: records from the SpaceX API
// ============================================================================

pub mod components;
pub mod config;
pub mod dom;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use crate::config::CONFIG;

/// Installs the panic hook and, when enabled, the console logger
pub fn init_logging() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
}
