// Dashboard domain model - One catalog entry and its normalization rules
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const UNTITLED_DASHBOARD: &str = "Untitled Dashboard";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_PLATFORM: &str = "Unknown";
pub const DEFAULT_URL: &str = "#";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub platform: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub last_updated: String,
    pub is_active: bool,
}

impl DashboardRecord {
    /// Text the free-text search runs against, already lowercased.
    pub fn searchable_text(&self) -> String {
        let mut parts = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
            self.platform.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// A catalog entry as it appears in either source document, before defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDashboard {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub source_relative_file_path: Option<String>,
}

impl RawDashboard {
    pub fn normalize(self, today: NaiveDate) -> DashboardRecord {
        let id = present(self.id)
            .or_else(|| self.source_relative_file_path.as_deref().map(id_from_source_path))
            .unwrap_or_default();
        let title = present(self.title)
            .or_else(|| present(self.name))
            .unwrap_or_else(|| UNTITLED_DASHBOARD.to_string());

        DashboardRecord {
            id,
            title,
            description: self.description.unwrap_or_default(),
            url: present(self.url).unwrap_or_else(|| DEFAULT_URL.to_string()),
            platform: present(self.platform).unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            category: present(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tags: self.tags.unwrap_or_default(),
            image: present(self.image),
            last_updated: present(self.last_updated)
                .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            is_active: self.is_active != Some(false),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Convert "content/dashboards/sales-overview.rocket.md" to "sales-overview".
/// Paths that don't follow that shape are used as-is.
fn id_from_source_path(path: &str) -> String {
    path.strip_suffix(".rocket.md")
        .and_then(|stem| stem.rsplit_once('/'))
        .map(|(_, name)| name)
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}
