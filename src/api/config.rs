//! WASM entry points for studio configuration

use super::helpers::{deserialize, to_js_error};
use crate::config::StudioConfig;
use crate::studio_info;
use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

// Module-wide configuration, shared by every studio on the page
lazy_static! {
    static ref CONFIG: Mutex<StudioConfig> = Mutex::new(StudioConfig::default());
}

/// Apply a `{ logLevel, storageNamespace }` object; missing keys keep defaults
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: StudioConfig = if config.is_undefined() || config.is_null() {
        StudioConfig::default()
    } else {
        deserialize(config, "Invalid studio config")?
    };
    config.apply().map_err(to_js_error)?;

    let mut current = CONFIG
        .lock()
        .map_err(|_| to_js_error("studio config lock poisoned"))?;
    *current = config;

    studio_info!("studio configured (namespace '{}')", current.storage_namespace);
    Ok(())
}

/// Storage key the host should persist a page's snapshot under
#[wasm_bindgen(js_name = storageKey)]
pub fn storage_key(store: &str, page: &str) -> Result<String, JsValue> {
    let config = CONFIG
        .lock()
        .map_err(|_| to_js_error("studio config lock poisoned"))?;
    Ok(config.storage_key(store, page))
}
