//! JavaScript-facing design studio
//!
//! One `DesignStudio` is created per page-view and owned by the host page.
//! Style records cross the boundary as plain JS objects and are stored as
//! JSON values; the studio never looks inside them.

use super::helpers::{deserialize, serialize, to_js_error};
use crate::engine::{LayoutEngine, LayoutSnapshot};
use crate::models::Slot;
use crate::presets::PageKind;
use crate::registry::SlotRegistry;
use crate::{studio_info, studio_log, studio_warn};
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct DesignStudio {
    engine: LayoutEngine<Value>,
}

impl DesignStudio {
    pub fn engine(&self) -> &LayoutEngine<Value> {
        &self.engine
    }
}

fn page_registry(kind: &str) -> Result<SlotRegistry<Value>, JsValue> {
    let kind: PageKind = kind.parse().map_err(to_js_error)?;
    kind.registry()
        .map_err(to_js_error)?
        .try_map_styles(serde_json::to_value)
        .map_err(to_js_error)
}

fn slots_registry(slots: JsValue) -> Result<SlotRegistry<Value>, JsValue> {
    let slots: Vec<Slot<Value>> = deserialize(slots, "Invalid slot list")?;
    SlotRegistry::register(slots).map_err(to_js_error)
}

#[wasm_bindgen]
impl DesignStudio {
    /// Create a studio for a built-in page (`product-card`, `button`, ...)
    #[wasm_bindgen(js_name = forPage)]
    pub fn for_page(kind: &str) -> Result<DesignStudio, JsValue> {
        let registry = page_registry(kind)?;
        studio_info!("studio created for page '{}' ({} slots)", kind, registry.len());
        Ok(DesignStudio {
            engine: LayoutEngine::create(registry),
        })
    }

    /// Create a studio from `[{ id, defaultVisible, defaultStyle }]`
    #[wasm_bindgen(js_name = fromSlots)]
    pub fn from_slots(slots: JsValue) -> Result<DesignStudio, JsValue> {
        let registry = slots_registry(slots)?;
        studio_info!("studio created from {} custom slots", registry.len());
        Ok(DesignStudio {
            engine: LayoutEngine::create(registry),
        })
    }

    /// Rebuild a built-in page from a stored snapshot
    #[wasm_bindgen(js_name = restorePage)]
    pub fn restore_page(kind: &str, snapshot: JsValue) -> Result<DesignStudio, JsValue> {
        let registry = page_registry(kind)?;
        let snapshot: LayoutSnapshot<Value> = deserialize(snapshot, "Invalid layout snapshot")?;
        studio_info!("studio restored for page '{}'", kind);
        Ok(DesignStudio {
            engine: LayoutEngine::restore(registry, snapshot),
        })
    }

    /// Rebuild a custom slot list from a stored snapshot
    pub fn restore(slots: JsValue, snapshot: JsValue) -> Result<DesignStudio, JsValue> {
        let registry = slots_registry(slots)?;
        let snapshot: LayoutSnapshot<Value> = deserialize(snapshot, "Invalid layout snapshot")?;
        Ok(DesignStudio {
            engine: LayoutEngine::restore(registry, snapshot),
        })
    }

    // ------------------------------------------------------------------------
    // Drag protocol
    // ------------------------------------------------------------------------

    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&mut self, id: &str) {
        self.engine.begin_drag(id);
        studio_log!("beginDrag '{}' -> cursor {:?}", id, self.engine.drag_cursor());
    }

    /// Insertion hint `{ dragged, target, from, to }`, or `null`
    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&self, target: &str) -> Result<JsValue, JsValue> {
        match self.engine.drag_over(target) {
            Some(hint) => serialize(&hint, "Failed to serialize drop hint"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Drop the dragged slot on `target`; true if the order changed
    pub fn drop(&mut self, target: &str) -> bool {
        let moved = self.engine.drop(target);
        studio_log!("drop on '{}' moved={}", target, moved);
        moved
    }

    #[wasm_bindgen(js_name = endDrag)]
    pub fn end_drag(&mut self) {
        self.engine.end_drag();
    }

    #[wasm_bindgen(js_name = dragCursor)]
    pub fn drag_cursor(&self) -> Option<String> {
        self.engine.drag_cursor().map(|id| id.to_string())
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self, id: &str) -> bool {
        self.engine.is_dragging(id)
    }

    // ------------------------------------------------------------------------
    // Visibility and style
    // ------------------------------------------------------------------------

    #[wasm_bindgen(js_name = setVisible)]
    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<(), JsValue> {
        self.engine.set_visible(id, visible).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = toggleVisible)]
    pub fn toggle_visible(&mut self, id: &str) -> Result<bool, JsValue> {
        self.engine.toggle_visible(id).map_err(to_js_error)
    }

    /// Replace a slot's style record with `style` as given
    #[wasm_bindgen(js_name = patchStyle)]
    pub fn patch_style(&mut self, id: &str, style: JsValue) -> Result<(), JsValue> {
        let style: Value = deserialize(style, "Invalid style record")?;
        if !style.is_object() {
            studio_warn!("style for '{}' is not an object: {}", id, style);
        }
        self.engine.patch_style(id, style).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = resetStyle)]
    pub fn reset_style(&mut self, id: &str) -> Result<(), JsValue> {
        self.engine.reset_style(id).map_err(to_js_error)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        studio_info!("layout reset to defaults");
    }

    // ------------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------------

    /// Visible slots in order as `[{ id, style }]`
    #[wasm_bindgen(js_name = renderPlan)]
    pub fn render_plan(&self) -> Result<JsValue, JsValue> {
        serialize(&self.engine.render_plan(), "Failed to serialize render plan")
    }

    /// Every slot id in render order, hidden ones included
    pub fn order(&self) -> js_sys::Array {
        self.engine
            .order()
            .iter()
            .map(|id| JsValue::from_str(id.as_str()))
            .collect()
    }

    pub fn visibility(&self) -> Result<JsValue, JsValue> {
        serialize(self.engine.visibility(), "Failed to serialize visibility")
    }

    pub fn styles(&self) -> Result<JsValue, JsValue> {
        serialize(self.engine.styles(), "Failed to serialize styles")
    }

    /// Persistable `{ order, visibility, styles }`
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.engine.snapshot(), "Failed to serialize snapshot")
    }
}
