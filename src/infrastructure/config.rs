use crate::domain::facet::{FacetStyle, FacetStyles};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct HubConfig {
    pub catalog: CatalogSettings,
    pub storage: StorageSettings,
    pub page: PageSettings,
    pub features: FeatureFlags,
    pub timing: TimingSettings,
    pub styles: StyleOverrides,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Http,
    Directory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogSettings {
    pub source: SourceKind,
    /// Site base URL for `http`, site root directory for `directory`.
    pub base: String,
    pub page_tree_path: String,
    pub flat_catalog_path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: SourceKind::Http,
            base: "http://localhost:8000".to_string(),
            page_tree_path: "/pageTreeData.rocketGenerated.json".to_string(),
            flat_catalog_path: "/src/data/dashboards.json".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageSettings {
    pub path: PathBuf,
    pub keys: StorageKeys,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".dashboard-hub/storage.json"),
            keys: StorageKeys::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    pub favorites: String,
    pub clicks: String,
    pub searches: String,
    pub theme: String,
    pub short_urls: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            favorites: "dashboard-hub-favorites".to_string(),
            clicks: "dashboard-hub-analytics".to_string(),
            searches: "dashboard-hub-searches".to_string(),
            theme: "dashboard-hub-theme".to_string(),
            short_urls: "dashboard-hub-short-urls".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PageSettings {
    pub origin: String,
    pub pathname: String,
    /// Raw query string of the page, e.g. "?state=eyJm...".
    pub query: String,
    pub fallback_image: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8000".to_string(),
            pathname: "/".to_string(),
            query: String::new(),
            fallback_image: None,
        }
    }
}

/// Optional capabilities of the hub page.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FeatureFlags {
    /// "Share Favorites" chip in the filter bar.
    pub share_favorites: bool,
    /// "Copy URL" button on every tile.
    pub copy_short_url: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            share_favorites: true,
            copy_short_url: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct TimingSettings {
    pub debounce_ms: u64,
    pub toast_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            toast_ms: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StyleOverrides {
    pub categories: Vec<StyleConfig>,
    pub platforms: Vec<StyleConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub name: String,
    pub color: String,
    pub icon: Option<String>,
}

impl StyleOverrides {
    pub fn category_styles(&self) -> FacetStyles {
        apply_overrides(FacetStyles::categories(), &self.categories)
    }

    pub fn platform_styles(&self) -> FacetStyles {
        apply_overrides(FacetStyles::platforms(), &self.platforms)
    }
}

fn apply_overrides(mut styles: FacetStyles, overrides: &[StyleConfig]) -> FacetStyles {
    for entry in overrides {
        styles.insert(
            &entry.name,
            FacetStyle::new(&entry.color, entry.icon.as_deref()),
        );
    }
    styles
}

/// Load `config/hub.*` (optional) with `HUB__SECTION__KEY` environment overrides.
pub fn load_hub_config() -> anyhow::Result<HubConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/hub").required(false))
        .add_source(
            config::Environment::with_prefix("HUB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
