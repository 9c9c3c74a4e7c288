//! Models module for the Storefront Studio
//!
//! Slot declarations and the style record used by the built-in pages.

pub mod slot;
pub mod style;

// Re-export commonly used types
pub use slot::*;
pub use style::*;
