// Snapshot persistence and preset pages, the way a host page uses them:
// edit a preset layout, store the snapshot as JSON, restore it later.

use serde_json::json;
use storefront_studio::{ElementStyle, LayoutEngine, LayoutSnapshot, PageKind, SlotId};

fn ids(order: &[SlotId]) -> Vec<&str> {
    order.iter().map(SlotId::as_str).collect()
}

#[test]
fn test_preset_layout_survives_json_storage() {
    let mut engine = LayoutEngine::create(PageKind::ProductCard.registry().unwrap());

    engine.set_visible("rating", false).unwrap();
    engine.set_visible("description", true).unwrap();
    engine.begin_drag("cta");
    engine.drop("price");
    let mut style = engine.style("price").cloned().unwrap();
    style.color = Some("#dc2626".to_string());
    engine.patch_style("price", style).unwrap();

    let stored = serde_json::to_string(&engine.snapshot()).unwrap();
    let snapshot: LayoutSnapshot<ElementStyle> = serde_json::from_str(&stored).unwrap();
    let restored = LayoutEngine::restore(PageKind::ProductCard.registry().unwrap(), snapshot);

    assert_eq!(restored.order(), engine.order());
    assert_eq!(restored.render_plan(), engine.render_plan());
    assert_eq!(
        restored.style("price").and_then(|s| s.color.as_deref()),
        Some("#dc2626")
    );
}

#[test]
fn test_snapshot_json_shape() {
    let mut engine = LayoutEngine::create(PageKind::Button.registry().unwrap());
    engine.set_visible("icon", false).unwrap();
    engine.begin_drag("label");

    let json = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(json["order"], json!(["icon", "label"]));
    assert_eq!(json["visibility"], json!({ "icon": false, "label": true }));
    assert_eq!(json["styles"]["label"]["align"], json!("center"));
    assert!(json.get("dragCursor").is_none(), "drag state must not be persisted");
}

#[test]
fn test_restore_against_newer_registry() {
    // Stored before "search" existed and while "promo" still did
    let stored = json!({
        "order": ["cart", "promo", "logo", "links"],
        "visibility": { "cart": false, "promo": true },
        "styles": { "logo": { "width": 200 } }
    });
    let snapshot: LayoutSnapshot<ElementStyle> = serde_json::from_value(stored).unwrap();

    let engine = LayoutEngine::restore(PageKind::NavBar.registry().unwrap(), snapshot);

    assert_eq!(ids(engine.order()), vec!["cart", "logo", "links", "search"]);
    assert_eq!(engine.is_visible("cart"), Some(false));
    assert_eq!(engine.is_visible("search"), Some(false));
    assert_eq!(engine.is_visible("promo"), None);
    assert_eq!(engine.style("logo").and_then(|s| s.width), Some(200.0));
    assert_eq!(engine.style("logo").and_then(|s| s.height), None);
    assert_eq!(engine.styles().len(), 4);
}

#[test]
fn test_render_plan_for_default_text_block() {
    let engine = LayoutEngine::create(PageKind::TextBlock.registry().unwrap());
    let plan: Vec<&str> = engine.render_plan().iter().map(|e| e.id.as_str()).collect();

    assert_eq!(plan, vec!["heading", "subheading", "body"]);
}

#[test]
fn test_reset_after_restore_returns_to_preset_defaults() {
    let snapshot: LayoutSnapshot<ElementStyle> = serde_json::from_value(json!({
        "order": ["label", "icon"],
        "visibility": { "label": false }
    }))
    .unwrap();
    let mut engine = LayoutEngine::restore(PageKind::Button.registry().unwrap(), snapshot);
    assert_eq!(ids(engine.order()), vec!["label", "icon"]);

    engine.reset();

    assert_eq!(ids(engine.order()), vec!["icon", "label"]);
    assert_eq!(engine.is_visible("label"), Some(true));
}
