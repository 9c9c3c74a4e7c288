//! Render plan derivation
//!
//! The render plan is the only thing the presentation layer consumes: the
//! visible slots in their current order, each paired with its current style.
//! It borrows from the engine and is rebuilt on every call, so it can never
//! disagree with the underlying maps.

use super::LayoutEngine;
use crate::models::SlotId;
use serde::Serialize;

/// One visible slot and the style it should be rendered with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEntry<'a, S> {
    pub id: &'a SlotId,
    pub style: &'a S,
}

pub type RenderPlan<'a, S> = Vec<RenderEntry<'a, S>>;

impl<S: Clone> LayoutEngine<S> {
    /// Visible slots in render order with their resolved styles
    pub fn render_plan(&self) -> RenderPlan<'_, S> {
        self.order
            .iter()
            .filter(|id| self.visibility.get(id.as_str()).copied().unwrap_or(false))
            .filter_map(|id| {
                self.styles
                    .get(id.as_str())
                    .map(|style| RenderEntry { id, style })
            })
            .collect()
    }

    /// Ids of the visible slots in render order
    pub fn visible_ids(&self) -> Vec<&SlotId> {
        self.render_plan().into_iter().map(|entry| entry.id).collect()
    }
}
