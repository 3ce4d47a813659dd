// Filter criteria - What the user currently narrows the catalog by

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    /// Facet id of the selected category, empty when unset.
    pub category: String,
    /// Facet id of the selected platform, empty when unset.
    pub platform: String,
    /// Carried through share links but not applied when filtering.
    pub tags: Vec<String>,
}

impl FilterCriteria {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty() && self.platform.is_empty()
    }

    /// Select `id`, or clear the selection when it is already selected.
    pub fn toggle_category(&mut self, id: &str) {
        toggle_selection(&mut self.category, id);
    }

    pub fn toggle_platform(&mut self, id: &str) {
        toggle_selection(&mut self.platform, id);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn toggle_selection(current: &mut String, id: &str) {
    if current == id {
        current.clear();
    } else {
        *current = id.to_string();
    }
}
