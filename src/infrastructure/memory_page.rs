// In-memory page - Headless document holding the hub's elements
use crate::application::host::{Display, ListenerKind, Page, PageLocation, element};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub inner_html: String,
    pub text: String,
    pub class: String,
    pub display: Option<Display>,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    location: PageLocation,
    elements: BTreeMap<String, ElementState>,
    body_attributes: BTreeMap<String, String>,
    listeners: BTreeMap<String, Vec<ListenerKind>>,
}

impl MemoryPage {
    /// A page with every element the hub layout provides.
    pub fn hub_page() -> Self {
        Self::with_elements(&[
            element::SEARCH_INPUT,
            element::THEME_TOGGLE,
            element::FILTER_CONTAINER,
            element::DASHBOARD_GRID,
            element::EMPTY_STATE,
            element::TOAST,
        ])
    }

    pub fn with_elements(ids: &[&str]) -> Self {
        let mut page = Self::default();
        for id in ids {
            page.elements.insert(id.to_string(), ElementState::default());
        }
        if let Some(toast) = page.elements.get_mut(element::TOAST) {
            toast.class = "toast".to_string();
        }
        if let Some(empty) = page.elements.get_mut(element::EMPTY_STATE) {
            empty.display = Some(Display::None);
        }
        page
    }

    pub fn at(mut self, location: PageLocation) -> Self {
        self.location = location;
        self
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.inner_html.as_str())
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    pub fn class(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.class.as_str())
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.element(id).and_then(|e| e.display)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.value.as_str())
    }

    pub fn body_attribute(&self, name: &str) -> Option<&str> {
        self.body_attributes.get(name).map(String::as_str)
    }

    /// Number of listeners bound on an element, duplicates included.
    #[cfg(test)]
    pub fn listener_count(&self, id: &str) -> usize {
        self.listeners.get(id).map_or(0, Vec::len)
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut ElementState)) -> bool {
        match self.elements.get_mut(id) {
            Some(state) => {
                apply(state);
                true
            }
            None => false,
        }
    }
}

impl Page for MemoryPage {
    fn location(&self) -> PageLocation {
        self.location.clone()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        self.update(id, |e| e.inner_html = html.to_string())
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.update(id, |e| e.text = text.to_string())
    }

    fn set_class(&mut self, id: &str, class: &str) -> bool {
        self.update(id, |e| e.class = class.to_string())
    }

    fn set_display(&mut self, id: &str, display: Display) -> bool {
        self.update(id, |e| e.display = Some(display))
    }

    fn set_value(&mut self, id: &str, value: &str) -> bool {
        self.update(id, |e| e.value = value.to_string())
    }

    fn set_body_attribute(&mut self, name: &str, value: &str) {
        self.body_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn listen(&mut self, id: &str, kind: ListenerKind) -> bool {
        if !self.elements.contains_key(id) {
            return false;
        }
        self.listeners.entry(id.to_string()).or_default().push(kind);
        true
    }
}
