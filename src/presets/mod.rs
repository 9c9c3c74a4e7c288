//! Built-in page registries for the studio widgets
//!
//! Each widget the studio can edit (product card, button, text block,
//! navigation bar) has a fixed set of slots. These registries are what the
//! host passes to the layout engine when the merchant opens a widget.

use crate::models::{Align, ElementStyle, Slot};
use crate::registry::{RegistryError, SlotRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const BODY_FONT: &str = "Inter, sans-serif";
const DISPLAY_FONT: &str = "Poppins, sans-serif";
const INK: &str = "#111827";
const MUTED: &str = "#6b7280";
const ACCENT: &str = "#2563eb";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("unknown page kind '{0}'")]
    UnknownPage(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Widget pages with a built-in slot registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    ProductCard,
    Button,
    TextBlock,
    NavBar,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::ProductCard,
        PageKind::Button,
        PageKind::TextBlock,
        PageKind::NavBar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::ProductCard => "product-card",
            PageKind::Button => "button",
            PageKind::TextBlock => "text-block",
            PageKind::NavBar => "nav-bar",
        }
    }

    /// Slot declarations for this page, in default render order
    pub fn slots(&self) -> Vec<Slot<ElementStyle>> {
        match self {
            PageKind::ProductCard => product_card_slots(),
            PageKind::Button => button_slots(),
            PageKind::TextBlock => text_block_slots(),
            PageKind::NavBar => nav_bar_slots(),
        }
    }

    pub fn registry(&self) -> Result<SlotRegistry<ElementStyle>, PresetError> {
        Ok(SlotRegistry::register(self.slots())?)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PresetError::UnknownPage(s.to_string()))
    }
}

fn product_card_slots() -> Vec<Slot<ElementStyle>> {
    vec![
        Slot::visible("name", ElementStyle::new().font(DISPLAY_FONT, 20.0, 600).color(INK)),
        Slot::visible("rating", ElementStyle::new().font(BODY_FONT, 13.0, 400).color("#f59e0b")),
        Slot::visible("price", ElementStyle::new().font(BODY_FONT, 18.0, 700).color(INK)),
        Slot::hidden(
            "description",
            ElementStyle::new().font(BODY_FONT, 14.0, 400).color(MUTED).spacing(0.0, 8.0),
        ),
        Slot::visible("variants", ElementStyle::new().font(BODY_FONT, 14.0, 500).spacing(4.0, 8.0)),
        Slot::visible("quantity", ElementStyle::new().font(BODY_FONT, 14.0, 400).size(96.0, 36.0)),
        Slot::visible(
            "cta",
            ElementStyle::new()
                .font(BODY_FONT, 15.0, 600)
                .color("#ffffff")
                .background(ACCENT)
                .spacing(12.0, 0.0)
                .rounded(6.0)
                .align(Align::Center),
        ),
    ]
}

fn button_slots() -> Vec<Slot<ElementStyle>> {
    vec![
        Slot::visible("icon", ElementStyle::new().size(16.0, 16.0).color("#ffffff")),
        Slot::visible(
            "label",
            ElementStyle::new()
                .font(BODY_FONT, 15.0, 600)
                .color("#ffffff")
                .background(ACCENT)
                .spacing(10.0, 0.0)
                .rounded(6.0)
                .align(Align::Center),
        ),
    ]
}

fn text_block_slots() -> Vec<Slot<ElementStyle>> {
    vec![
        Slot::visible("heading", ElementStyle::new().font(DISPLAY_FONT, 32.0, 700).color(INK)),
        Slot::visible("subheading", ElementStyle::new().font(DISPLAY_FONT, 20.0, 500).color(MUTED)),
        Slot::visible(
            "body",
            ElementStyle::new().font(BODY_FONT, 16.0, 400).color(INK).spacing(0.0, 12.0),
        ),
        Slot::hidden("link", ElementStyle::new().font(BODY_FONT, 16.0, 500).color(ACCENT)),
    ]
}

fn nav_bar_slots() -> Vec<Slot<ElementStyle>> {
    vec![
        Slot::visible("logo", ElementStyle::new().size(120.0, 32.0)),
        Slot::visible(
            "links",
            ElementStyle::new().font(BODY_FONT, 15.0, 500).color(INK).spacing(8.0, 0.0),
        ),
        Slot::hidden("search", ElementStyle::new().size(240.0, 36.0).rounded(18.0)),
        Slot::visible("cart", ElementStyle::new().size(24.0, 24.0).color(INK).align(Align::Right)),
    ]
}
