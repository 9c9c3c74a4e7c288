//! Layout snapshots for the host's persistence layer
//!
//! The engine never writes to storage itself. Hosts take a snapshot after a
//! mutation, serialize it wherever they like, and later hand it back to
//! [`LayoutEngine::restore`] together with the page's current registry.
//!
//! A stored snapshot may predate the registry it is restored against (slots
//! added or removed in a later release), so restoring reconciles instead of
//! trusting the stored data.

use super::LayoutEngine;
use crate::models::SlotId;
use crate::registry::SlotRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Persistable copy of a layout; the drag cursor is never included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot<S> {
    pub order: Vec<SlotId>,
    #[serde(default)]
    pub visibility: BTreeMap<SlotId, bool>,
    #[serde(default = "BTreeMap::new")]
    pub styles: BTreeMap<SlotId, S>,
}

impl<S: Clone> LayoutEngine<S> {
    pub fn snapshot(&self) -> LayoutSnapshot<S> {
        LayoutSnapshot {
            order: self.order.clone(),
            visibility: self
                .visibility
                .iter()
                .map(|(id, &visible)| (id.clone(), visible))
                .collect(),
            styles: self
                .styles
                .iter()
                .map(|(id, style)| (id.clone(), style.clone()))
                .collect(),
        }
    }

    /// Rebuild an engine from a stored snapshot
    ///
    /// - ids the registry no longer declares are dropped
    /// - repeated ids keep their first position
    /// - registry ids missing from the stored order are appended in
    ///   registration order
    /// - missing visibility or style entries fall back to registry defaults
    pub fn restore(registry: SlotRegistry<S>, snapshot: LayoutSnapshot<S>) -> Self {
        let LayoutSnapshot {
            order: stored_order,
            mut visibility,
            mut styles,
        } = snapshot;

        let mut seen = HashSet::with_capacity(registry.len());
        let mut order = Vec::with_capacity(registry.len());
        for id in stored_order {
            if !registry.contains(id.as_str()) {
                log::debug!("restore: dropping stale slot '{}'", id);
                continue;
            }
            if seen.insert(id.clone()) {
                order.push(id);
            } else {
                log::debug!("restore: ignoring repeated slot '{}'", id);
            }
        }
        for id in registry.ids() {
            if !seen.contains(&id) {
                log::debug!("restore: appending new slot '{}'", id);
                order.push(id);
            }
        }

        let mut restored_visibility = HashMap::with_capacity(registry.len());
        let mut restored_styles = HashMap::with_capacity(registry.len());
        for slot in registry.iter() {
            let visible = visibility
                .remove(&slot.id)
                .unwrap_or(slot.default_visible);
            let style = styles
                .remove(&slot.id)
                .unwrap_or_else(|| slot.default_style.clone());
            restored_visibility.insert(slot.id.clone(), visible);
            restored_styles.insert(slot.id.clone(), style);
        }

        log::debug!("layout restored with {} slots", order.len());

        Self {
            registry,
            order,
            visibility: restored_visibility,
            styles: restored_styles,
            drag_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;

    fn registry() -> SlotRegistry<String> {
        SlotRegistry::register(vec![
            Slot::visible("name", "n".to_string()),
            Slot::visible("price", "p".to_string()),
            Slot::hidden("cta", "c".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_snapshot_excludes_drag_cursor() {
        let mut engine = LayoutEngine::create(registry());
        engine.begin_drag("price");

        let json = serde_json::to_value(engine.snapshot()).unwrap();

        assert!(json.get("dragCursor").is_none());
        assert_eq!(json["order"], serde_json::json!(["name", "price", "cta"]));
        assert_eq!(json["visibility"], serde_json::json!({ "cta": false, "name": true, "price": true }));
    }

    #[test]
    fn test_restore_round_trips_edits() {
        let mut engine = LayoutEngine::create(registry());
        engine.begin_drag("cta");
        engine.drop("name");
        engine.set_visible("cta", true).unwrap();
        engine.patch_style("price", "sale".to_string()).unwrap();

        let restored = LayoutEngine::restore(registry(), engine.snapshot());

        assert_eq!(restored.order(), engine.order());
        assert_eq!(restored.visibility(), engine.visibility());
        assert_eq!(restored.styles(), engine.styles());
        assert_eq!(restored.drag_cursor(), None);
    }

    #[test]
    fn test_restore_reconciles_stale_snapshot() {
        let snapshot = LayoutSnapshot {
            order: vec![
                SlotId::from("price"),
                SlotId::from("gone"),
                SlotId::from("price"),
                SlotId::from("name"),
            ],
            visibility: BTreeMap::from([
                (SlotId::from("price"), false),
                (SlotId::from("gone"), true),
            ]),
            styles: BTreeMap::from([(SlotId::from("name"), "big".to_string())]),
        };

        let engine = LayoutEngine::restore(registry(), snapshot);

        assert_eq!(
            engine.order(),
            &[SlotId::from("price"), SlotId::from("name"), SlotId::from("cta")]
        );
        assert_eq!(engine.is_visible("price"), Some(false));
        assert_eq!(engine.is_visible("cta"), Some(false));
        assert_eq!(engine.is_visible("gone"), None);
        assert_eq!(engine.style("name").map(String::as_str), Some("big"));
        assert_eq!(engine.style("price").map(String::as_str), Some("p"));
        assert_eq!(engine.visibility().len(), 3);
        assert_eq!(engine.styles().len(), 3);
    }

    #[test]
    fn test_snapshot_without_maps_deserializes() {
        let snapshot: LayoutSnapshot<String> =
            serde_json::from_str(r#"{"order":["cta","name"]}"#).unwrap();
        let engine = LayoutEngine::restore(registry(), snapshot);

        assert_eq!(
            engine.order(),
            &[SlotId::from("cta"), SlotId::from("name"), SlotId::from("price")]
        );
        assert_eq!(engine.is_visible("cta"), Some(false));
    }
}
