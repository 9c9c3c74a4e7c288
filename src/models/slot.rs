//! Slot identifiers and slot declarations
//!
//! A slot is one independently controllable section of a page (product name,
//! price, call-to-action, ...). The style record carried by a slot is opaque
//! to everything in this crate except the presets.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a slot, unique within a page
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SlotId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SlotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SlotId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SlotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SlotId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SlotId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Declaration of a single slot with its defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot<S> {
    pub id: SlotId,
    pub default_visible: bool,
    pub default_style: S,
}

impl<S> Slot<S> {
    pub fn new(id: impl Into<SlotId>, default_visible: bool, default_style: S) -> Self {
        Self {
            id: id.into(),
            default_visible,
            default_style,
        }
    }

    /// A slot that starts out visible
    pub fn visible(id: impl Into<SlotId>, default_style: S) -> Self {
        Self::new(id, true, default_style)
    }

    /// A slot that starts out hidden
    pub fn hidden(id: impl Into<SlotId>, default_style: S) -> Self {
        Self::new(id, false, default_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_slot_id_borrows_as_str() {
        let mut map = HashMap::new();
        map.insert(SlotId::from("price"), 3);

        assert_eq!(map.get("price"), Some(&3));
        assert_eq!(map.get("rating"), None);
    }

    #[test]
    fn test_slot_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&SlotId::from("cta")).unwrap();
        assert_eq!(json, "\"cta\"");
    }

    #[test]
    fn test_slot_deserializes_camel_case() {
        let slot: Slot<serde_json::Value> = serde_json::from_str(
            r#"{"id":"price","defaultVisible":false,"defaultStyle":{"fontSize":14}}"#,
        )
        .unwrap();

        assert_eq!(slot.id, "price");
        assert!(!slot.default_visible);
        assert_eq!(slot.default_style["fontSize"], 14);
    }
}
