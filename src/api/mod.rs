//! Storefront Studio WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `studio`: the `DesignStudio` class wrapping one layout engine
//! - `config`: module-wide configuration and storage keys

pub mod helpers;
pub mod config;
pub mod studio;

pub use config::{configure, storage_key};
pub use studio::DesignStudio;
