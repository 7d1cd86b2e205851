//! View routing and overlay gates.
//!
//! The router is a total function of [`AppState`]: every state, including
//! ones that violate the detail-needs-an-item invariant, resolves to exactly
//! one [`Screen`].

use std::fmt;

use crate::item::Item;
use crate::state::AppState;

/// Top-level view tag.
///
/// `Unknown` keeps unrecognized tags (e.g. from a hand-edited URL hash)
/// so the router can send them home explicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Collection,
    Creator,
    Detail,
    Unknown(String),
}

impl View {
    /// Parse a view tag. Only the exact lowercase tags are known; an empty
    /// tag is home.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "" | "home" => View::Home,
            "collection" => View::Collection,
            "creator" => View::Creator,
            "detail" => View::Detail,
            _ => View::Unknown(tag.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            View::Home => "home",
            View::Collection => "collection",
            View::Creator => "creator",
            View::Detail => "detail",
            View::Unknown(tag) => tag,
        }
    }

    /// Parse a URL hash (`#/collection`).
    pub fn from_hash(hash: &str) -> Self {
        Self::from_tag(hash.trim_start_matches('#').trim_start_matches('/'))
    }

    /// URL hash for this view (`#/collection`).
    pub fn to_hash(&self) -> String {
        match self {
            View::Home => "#/".to_string(),
            other => format!("#/{}", other.tag()),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The screen the router selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen<'a> {
    Home,
    Collection,
    Creator,
    Detail(&'a Item),
}

/// Resolve the active screen.
///
/// `Detail` without a selected item falls back to the collection;
/// unrecognized tags fall back to home.
pub fn resolve_screen(state: &AppState) -> Screen<'_> {
    match &state.view {
        View::Home => Screen::Home,
        View::Collection => Screen::Collection,
        View::Creator => Screen::Creator,
        View::Detail => match &state.selected_item {
            Some(item) => Screen::Detail(item),
            None => Screen::Collection,
        },
        View::Unknown(_) => Screen::Home,
    }
}

/// The minting overlay is shown over any screen while the flow is open.
pub fn show_minting_modal(state: &AppState) -> bool {
    state.minting.is_open
}

/// Message for the top error banner.
///
/// Errors are only surfaced once a wallet address is present; anything
/// reported before connection stays hidden.
pub fn network_banner(state: &AppState) -> Option<&str> {
    let message = state.network_error.as_deref().filter(|m| !m.is_empty())?;
    state.web3.address().map(|_| message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(View::from_tag("home"), View::Home);
        assert_eq!(View::from_tag("collection"), View::Collection);
        assert_eq!(View::from_tag("creator"), View::Creator);
        assert_eq!(View::from_tag("detail"), View::Detail);
        assert_eq!(View::from_tag(""), View::Home);
        assert_eq!(
            View::from_tag("settings"),
            View::Unknown("settings".to_string())
        );
    }

    #[test]
    fn test_hash_mapping() {
        assert_eq!(View::from_hash(""), View::Home);
        assert_eq!(View::from_hash("#/"), View::Home);
        assert_eq!(View::from_hash("#/collection"), View::Collection);
        assert_eq!(View::Home.to_hash(), "#/");
        assert_eq!(View::Creator.to_hash(), "#/creator");
        assert_eq!(View::from_hash(&View::Detail.to_hash()), View::Detail);
    }

    #[test]
    fn test_display_is_tag() {
        assert_eq!(View::Collection.to_string(), "collection");
        assert_eq!(View::Unknown("x".to_string()).to_string(), "x");
    }
}
