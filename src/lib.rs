//! Storefront Studio WASM Module
//!
//! Layout engine for the storefront design studio: slot registries, drag
//! reordering, visibility toggles and per-slot style records, exposed to the
//! browser through `wasm-bindgen`.

pub mod models;
pub mod registry;
pub mod engine;
pub mod presets;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use registry::{RegistryError, SlotRegistry};
pub use engine::{DropHint, LayoutEngine, LayoutError, LayoutSnapshot, RenderEntry, RenderPlan};
pub use presets::{PageKind, PresetError};
pub use config::{ConfigError, StudioConfig};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Trace).is_err() {
            studio_warn!("logger already initialized");
        }
    }

    // Records are filtered by the configured level, not the logger's
    log::set_max_level(log::LevelFilter::Info);

    log::info!("Storefront Studio WASM module initialized");
}
