// Facet domain model - Category and platform filter dimensions with display styling
use std::collections::HashMap;

use super::dashboard::{DEFAULT_CATEGORY, DEFAULT_PLATFORM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Category,
    Platform,
}

impl FacetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKind::Category => "category",
            FacetKind::Platform => "platform",
        }
    }

    /// Display name used when a record's value has no style entry of its own.
    pub fn fallback_name(&self) -> &'static str {
        match self {
            FacetKind::Category => DEFAULT_CATEGORY,
            FacetKind::Platform => DEFAULT_PLATFORM,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacetDefinition {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Emoji for categories, logo path for platforms.
    pub icon: Option<String>,
}

impl FacetDefinition {
    pub fn new(name: &str, style: &FacetStyle) -> Self {
        Self {
            id: facet_id(name),
            name: name.to_string(),
            color: style.color.clone(),
            icon: style.icon.clone(),
        }
    }
}

/// Convert "Human Resources" to "human-resources".
/// Every run of whitespace becomes a single hyphen.
pub fn facet_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                id.push('-');
            }
            in_whitespace = true;
        } else {
            id.push(ch);
            in_whitespace = false;
        }
    }
    id
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacetStyle {
    pub color: String,
    pub icon: Option<String>,
}

impl FacetStyle {
    pub fn new(color: &str, icon: Option<&str>) -> Self {
        Self {
            color: color.to_string(),
            icon: icon.map(str::to_string),
        }
    }
}

/// Styling looked up by exact display name, with one named fallback entry
/// for names the table doesn't know.
#[derive(Debug, Clone)]
pub struct FacetStyles {
    kind: FacetKind,
    entries: HashMap<String, FacetStyle>,
    fallback: FacetStyle,
}

impl FacetStyles {
    pub fn categories() -> Self {
        let entries = [
            ("Sales", FacetStyle::new("#66B2A3", Some("📊"))),
            ("Finance", FacetStyle::new("#2F7E68", Some("💰"))),
            ("Marketing", FacetStyle::new("#ed8b4e", Some("📈"))),
            ("Operations", FacetStyle::new("#b288cf", Some("⚙️"))),
            ("Human Resources", FacetStyle::new("#5bacfc", Some("👥"))),
        ];
        Self::from_entries(FacetKind::Category, entries, FacetStyle::new("#3E5C76", Some("📋")))
    }

    pub fn platforms() -> Self {
        let entries = [
            ("Power BI", FacetStyle::new("#F2C811", Some("/images/powerbi-logo.png"))),
            ("Tableau", FacetStyle::new("#E97627", Some("/images/tableau-logo.png"))),
            ("SharePoint", FacetStyle::new("#0078D4", Some("/images/sharepoint-logo.png"))),
            ("Kubernetes", FacetStyle::new("#326CE5", None)),
            ("Python Dash", FacetStyle::new("#3F4F75", Some("/images/plotlydash-logo.jpeg"))),
        ];
        Self::from_entries(FacetKind::Platform, entries, FacetStyle::new("#9E9E9E", None))
    }

    fn from_entries<const N: usize>(
        kind: FacetKind,
        entries: [(&str, FacetStyle); N],
        fallback: FacetStyle,
    ) -> Self {
        Self {
            kind,
            entries: entries
                .into_iter()
                .map(|(name, style)| (name.to_string(), style))
                .collect(),
            fallback,
        }
    }

    /// Add or replace the style for one display name. Overriding the
    /// fallback name replaces the fallback itself.
    pub fn insert(&mut self, name: &str, style: FacetStyle) {
        if name == self.kind.fallback_name() {
            self.fallback = style;
        } else {
            self.entries.insert(name.to_string(), style);
        }
    }

    pub fn lookup(&self, name: &str) -> &FacetStyle {
        self.entries.get(name).unwrap_or(&self.fallback)
    }

    /// The definition used for a record whose value isn't among the derived facets.
    pub fn fallback_definition(&self) -> FacetDefinition {
        FacetDefinition::new(self.kind.fallback_name(), &self.fallback)
    }
}
