// Host ports - The page, clipboard and prompt the hub runs against
use async_trait::async_trait;
use thiserror::Error;

/// Element ids the hub page is expected to provide. Any of them may be
/// missing; the feature that needs it then does nothing.
pub mod element {
    pub const SEARCH_INPUT: &str = "search-input";
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const FILTER_CONTAINER: &str = "filter-container";
    pub const DASHBOARD_GRID: &str = "dashboard-grid";
    pub const EMPTY_STATE: &str = "empty-state";
    pub const TOAST: &str = "toast";
}

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    Input,
    Click,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLocation {
    pub origin: String,
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
}

impl PageLocation {
    /// First value of a query parameter, decoded the way browsers decode
    /// query strings (`+` is a space, then percent-decoding).
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.search
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| decode_component(key).as_deref() == Some(name))
            .and_then(|(_, value)| decode_component(value))
    }
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// The document the hub renders into. Setters return whether the element
/// exists.
pub trait Page {
    fn location(&self) -> PageLocation;

    fn has_element(&self, id: &str) -> bool;

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    fn set_text(&mut self, id: &str, text: &str) -> bool;

    fn set_class(&mut self, id: &str, class: &str) -> bool;

    fn set_display(&mut self, id: &str, display: Display) -> bool;

    fn set_value(&mut self, id: &str, value: &str) -> bool;

    fn set_body_attribute(&mut self, name: &str, value: &str);

    /// Bind a delegated listener on an element. Every call adds another
    /// listener. Returns false when the element is missing.
    fn listen(&mut self, id: &str, kind: ListenerKind) -> bool;
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blocking dialog that shows a value for the user to copy by hand.
pub trait Prompt: Send + Sync {
    fn prompt(&self, message: &str, value: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(search: &str) -> PageLocation {
        PageLocation {
            search: search.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_query_param() {
        let loc = location("?tab=all&state=ab%2Bc%3D&empty");
        assert_eq!(loc.query_param("state").as_deref(), Some("ab+c="));
        assert_eq!(loc.query_param("tab").as_deref(), Some("all"));
        assert_eq!(loc.query_param("empty").as_deref(), Some(""));
        assert_eq!(loc.query_param("missing"), None);
    }

    #[test]
    fn test_query_param_plus_is_space() {
        assert_eq!(location("?q=a+b").query_param("q").as_deref(), Some("a b"));
        assert_eq!(location("").query_param("q"), None);
    }
}
