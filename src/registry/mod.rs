//! Slot registry
//!
//! Declares which slots exist on a page and their default visibility and
//! style. A registry is validated once at construction and never changes
//! afterwards; the layout engine seeds its state from it.

use crate::models::{Slot, SlotId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two slot declarations share the same id
    #[error("duplicate slot id '{0}'")]
    DuplicateSlotId(SlotId),
}

/// Immutable, ordered set of slot declarations for one page type
#[derive(Debug, Clone)]
pub struct SlotRegistry<S> {
    slots: Vec<Slot<S>>,
    index: HashMap<SlotId, usize>,
}

impl<S> SlotRegistry<S> {
    /// Build a registry from slot declarations, keeping their order
    pub fn register(slots: Vec<Slot<S>>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(slots.len());
        for (i, slot) in slots.iter().enumerate() {
            if index.insert(slot.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateSlotId(slot.id.clone()));
            }
        }

        log::debug!("registered {} slots", slots.len());
        Ok(Self { slots, index })
    }

    /// Slot ids in registration order
    pub fn ids(&self) -> Vec<SlotId> {
        self.slots.iter().map(|slot| slot.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Slot<S>> {
        self.index.get(id).map(|&i| &self.slots[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Registration position of a slot
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot<S>> {
        self.slots.iter()
    }

    /// Convert every default style into another record type
    ///
    /// Ids and their order are preserved, so the result needs no revalidation.
    pub fn try_map_styles<T, E>(
        self,
        mut f: impl FnMut(S) -> Result<T, E>,
    ) -> Result<SlotRegistry<T>, E> {
        let slots = self
            .slots
            .into_iter()
            .map(|slot| {
                Ok(Slot {
                    id: slot.id,
                    default_visible: slot.default_visible,
                    default_style: f(slot.default_style)?,
                })
            })
            .collect::<Result<Vec<_>, E>>()?;

        Ok(SlotRegistry {
            slots,
            index: self.index,
        })
    }
}
