// Click handlers - Map delegated clicks to hub actions
use crate::application::scheduler::ClickTarget;
use crate::domain::facet::FacetKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    Toggle(FacetKind, String),
    Clear,
    Share,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileAction {
    ToggleFavorite(String),
    /// `url` is the button's `data-url`, when it carries one.
    CopyUrl { id: String, url: Option<String> },
    Open(String),
}

/// Clicks anywhere in the filter bar. Only chips with a known `data-type`
/// do something.
pub fn filter_action(target: &ClickTarget) -> Option<FilterAction> {
    if !target.has_class("filter-chip") {
        return None;
    }

    match target.data("type")? {
        "category" => Some(FilterAction::Toggle(
            FacetKind::Category,
            target.data("value")?.to_string(),
        )),
        "platform" => Some(FilterAction::Toggle(
            FacetKind::Platform,
            target.data("value")?.to_string(),
        )),
        "clear" => Some(FilterAction::Clear),
        "share" => Some(FilterAction::Share),
        other => {
            tracing::debug!("Ignoring chip with data-type {}", other);
            None
        }
    }
}

/// Clicks anywhere in the grid. Buttons outside a tile are ignored.
pub fn tile_action(target: &ClickTarget) -> Option<TileAction> {
    let id = target.dashboard_id.clone()?;

    if target.has_class("btn-favorite") {
        Some(TileAction::ToggleFavorite(id))
    } else if target.has_class("btn-copy-url") {
        Some(TileAction::CopyUrl {
            id,
            url: target.data("url").map(str::to_string),
        })
    } else if target.has_class("btn-primary") {
        Some(TileAction::Open(id))
    } else {
        None
    }
}
