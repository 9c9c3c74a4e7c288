//! Layout engine
//!
//! Owns the editable layout of one page-view: the slot order, the visibility
//! map, the style map and the transient drag cursor. Every mutation goes
//! through the methods here, which keep two invariants:
//!
//! - `order` is always a permutation of exactly the registry's ids
//! - `visibility` and `styles` always hold one entry per registry id
//!
//! Operations that reference an unknown id either fail before touching any
//! state (`set_visible`, `patch_style`, ...) or degrade to a no-op (the drag
//! protocol), since stale drag targets are expected under rapid gestures.

pub mod drag;
pub mod render_plan;
pub mod snapshot;

pub use drag::DropHint;
pub use render_plan::{RenderEntry, RenderPlan};
pub use snapshot::LayoutSnapshot;

use crate::models::SlotId;
use crate::registry::SlotRegistry;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The caller referenced a slot the registry does not declare
    #[error("unknown slot id '{0}'")]
    UnknownSlotId(String),
}

/// Editable layout state for one page, seeded from a [`SlotRegistry`]
#[derive(Debug, Clone)]
pub struct LayoutEngine<S> {
    registry: SlotRegistry<S>,
    order: Vec<SlotId>,
    visibility: HashMap<SlotId, bool>,
    styles: HashMap<SlotId, S>,
    drag_cursor: Option<SlotId>,
}

impl<S: Clone> LayoutEngine<S> {
    /// Create an engine whose state is the registry's defaults
    pub fn create(registry: SlotRegistry<S>) -> Self {
        let order = registry.ids();
        let visibility = default_visibility(&registry);
        let styles = default_styles(&registry);

        log::debug!("layout engine created with {} slots", order.len());

        Self {
            registry,
            order,
            visibility,
            styles,
            drag_cursor: None,
        }
    }

    pub fn registry(&self) -> &SlotRegistry<S> {
        &self.registry
    }

    /// Current render order, visible and hidden slots alike
    pub fn order(&self) -> &[SlotId] {
        &self.order
    }

    pub fn visibility(&self) -> &HashMap<SlotId, bool> {
        &self.visibility
    }

    pub fn styles(&self) -> &HashMap<SlotId, S> {
        &self.styles
    }

    pub fn drag_cursor(&self) -> Option<&SlotId> {
        self.drag_cursor.as_ref()
    }

    /// Whether `id` is the slot currently being dragged
    pub fn is_dragging(&self, id: &str) -> bool {
        self.drag_cursor.as_ref().is_some_and(|cursor| cursor.as_str() == id)
    }

    /// Visibility of a slot, `None` for unknown ids
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.visibility.get(id).copied()
    }

    pub fn style(&self, id: &str) -> Option<&S> {
        self.styles.get(id)
    }

    /// Show or hide a slot
    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<(), LayoutError> {
        let entry = self.visibility.get_mut(id).ok_or_else(|| unknown(id))?;
        *entry = visible;

        log::debug!("slot '{}' visible={}", id, visible);
        Ok(())
    }

    /// Flip a slot's visibility and return the new value
    pub fn toggle_visible(&mut self, id: &str) -> Result<bool, LayoutError> {
        let entry = self.visibility.get_mut(id).ok_or_else(|| unknown(id))?;
        *entry = !*entry;

        log::debug!("slot '{}' toggled to visible={}", id, *entry);
        Ok(*entry)
    }

    /// Replace a slot's style record
    ///
    /// The record is stored as given. Merging edits into the previous record
    /// is the style editor's job; nothing here combines old and new values.
    pub fn patch_style(&mut self, id: &str, style: S) -> Result<(), LayoutError> {
        let entry = self.styles.get_mut(id).ok_or_else(|| unknown(id))?;
        *entry = style;

        log::debug!("slot '{}' style replaced", id);
        Ok(())
    }

    /// Put a single slot's style back to its registry default
    pub fn reset_style(&mut self, id: &str) -> Result<(), LayoutError> {
        let default = self
            .registry
            .get(id)
            .map(|slot| slot.default_style.clone())
            .ok_or_else(|| unknown(id))?;
        self.styles.insert(SlotId::from(id), default);

        log::debug!("slot '{}' style reset to default", id);
        Ok(())
    }

    /// Discard every edit and return to the registry defaults
    pub fn reset(&mut self) {
        self.order = self.registry.ids();
        self.visibility = default_visibility(&self.registry);
        self.styles = default_styles(&self.registry);
        self.drag_cursor = None;

        log::debug!("layout reset to registry defaults");
    }
}

fn unknown(id: &str) -> LayoutError {
    log::warn!("rejected unknown slot id '{}'", id);
    LayoutError::UnknownSlotId(id.to_string())
}

fn default_visibility<S>(registry: &SlotRegistry<S>) -> HashMap<SlotId, bool> {
    registry
        .iter()
        .map(|slot| (slot.id.clone(), slot.default_visible))
        .collect()
}

fn default_styles<S: Clone>(registry: &SlotRegistry<S>) -> HashMap<SlotId, S> {
    registry
        .iter()
        .map(|slot| (slot.id.clone(), slot.default_style.clone()))
        .collect()
}
