//! Shared helpers for the WASM API
//!
//! Console logging, serialization across the JS boundary and error
//! conversion. Everything that turns a Rust value or error into a `JsValue`
//! goes through here.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [studio] prefix
#[macro_export]
macro_rules! studio_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [studio] prefix
#[macro_export]
macro_rules! studio_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [studio] prefix
#[macro_export]
macro_rules! studio_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    if ::log::log_enabled!(::log::Level::Debug) {
        log(&format!("[studio] {}", msg));
    }
}

pub fn log_info(msg: &str) {
    if ::log::log_enabled!(::log::Level::Info) {
        info(&format!("[studio] {}", msg));
    }
}

pub fn log_warn(msg: &str) {
    warn(&format!("[studio] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[studio] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript, logging failures
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to a plain JavaScript object, logging failures
///
/// Maps become plain objects rather than `Map` instances so the host can
/// hand the result straight to `JSON.stringify`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a typed error into a JsValue, logging it first
pub fn to_js_error(err: impl Display) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}
