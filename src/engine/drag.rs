//! Drag-and-drop reordering
//!
//! The whole reorder protocol is four calls: `begin_drag`, `drag_over`,
//! `drop` and `end_drag`. Pointer, touch and keyboard handlers all drive the
//! same calls. At most one slot is dragged at a time; a new `begin_drag`
//! silently replaces the previous one.
//!
//! Dropping moves the dragged slot to the index the target occupied before
//! the move. Slots in between shift by one:
//!
//! ```text
//! [A, B, C, D]  drag A, drop on C  ->  [B, C, A, D]
//! [A, B, C, D]  drag D, drop on A  ->  [D, A, B, C]
//! ```

use super::LayoutEngine;
use crate::models::SlotId;
use serde::{Deserialize, Serialize};

/// Insertion hint for the slot under the pointer during a drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropHint {
    pub dragged: SlotId,
    pub target: SlotId,
    /// Current index of the dragged slot
    pub from: usize,
    /// Index the dragged slot would occupy after dropping on `target`
    pub to: usize,
}

impl DropHint {
    /// The dragged slot would land after the target (moving down the list)
    pub fn lands_after_target(&self) -> bool {
        self.from < self.to
    }
}

impl<S: Clone> LayoutEngine<S> {
    /// Start dragging `id`; ignored if `id` is not part of the layout
    pub fn begin_drag(&mut self, id: &str) {
        if !self.order.iter().any(|slot| slot.as_str() == id) {
            log::debug!("begin_drag ignored for unknown slot '{}'", id);
            return;
        }

        if let Some(previous) = self.drag_cursor.as_ref() {
            log::debug!("drag of '{}' abandoned for '{}'", previous, id);
        }
        self.drag_cursor = Some(SlotId::from(id));
    }

    /// Where the dragged slot would land if dropped on `target`
    ///
    /// Never mutates. Returns `None` when nothing is being dragged, when the
    /// target is unknown, or when the target is the dragged slot itself.
    pub fn drag_over(&self, target: &str) -> Option<DropHint> {
        let dragged = self.drag_cursor.as_ref()?;
        let (from, to) = move_indices(&self.order, dragged.as_str(), target)?;

        Some(DropHint {
            dragged: dragged.clone(),
            target: SlotId::from(target),
            from,
            to,
        })
    }

    /// Drop the dragged slot on `target`
    ///
    /// Returns whether the order changed. The drag cursor is cleared whether
    /// or not the drop was valid.
    pub fn drop(&mut self, target: &str) -> bool {
        let Some(dragged) = self.drag_cursor.take() else {
            log::debug!("drop on '{}' without an active drag", target);
            return false;
        };

        let moved = move_to_target(&mut self.order, dragged.as_str(), target);
        if moved {
            log::debug!("moved '{}' to the position of '{}'", dragged, target);
        } else {
            log::debug!("drop of '{}' on '{}' ignored", dragged, target);
        }
        moved
    }

    /// Cancel any drag in progress
    pub fn end_drag(&mut self) {
        if let Some(dragged) = self.drag_cursor.take() {
            log::debug!("drag of '{}' cancelled", dragged);
        }
    }
}

/// Source and destination index for moving `dragged` onto `target`
fn move_indices(order: &[SlotId], dragged: &str, target: &str) -> Option<(usize, usize)> {
    let from = order.iter().position(|id| id.as_str() == dragged)?;
    let to = order.iter().position(|id| id.as_str() == target)?;
    (from != to).then_some((from, to))
}

/// Move `dragged` to the index `target` occupies; false if nothing moved
pub(crate) fn move_to_target(order: &mut Vec<SlotId>, dragged: &str, target: &str) -> bool {
    match move_indices(order, dragged, target) {
        Some((from, to)) => {
            let slot = order.remove(from);
            order.insert(to, slot);
            true
        }
        None => false,
    }
}
