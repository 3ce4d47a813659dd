// Persistence service - Favorites, analytics, theme and short links in the preference store
use crate::application::host::PageLocation;
use crate::application::preference_store::{KeyValueStore, StoreError};
use crate::domain::analytics::{AnalyticsState, SearchEntry};
use crate::domain::favorites::FavoritesSet;
use crate::domain::share::ShareState;
use crate::domain::theme::Theme;
use crate::infrastructure::config::StorageKeys;
use crate::infrastructure::share_codec::{self, SHARE_PARAM};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

#[derive(Clone)]
pub struct PersistenceService {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl PersistenceService {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn load_favorites(&self) -> FavoritesSet {
        self.read_json::<Vec<String>>(&self.keys.favorites)
            .unwrap_or_default()
            .into_iter()
            .collect()
    }

    pub fn save_favorites(&self, favorites: &FavoritesSet) -> Result<(), StoreError> {
        self.write_json(&self.keys.favorites, &favorites.to_vec())
    }

    /// Shared state from the page's `state` query parameter, if present and
    /// decodable. Undecodable values are logged and ignored.
    pub fn load_share_state(&self, location: &PageLocation) -> Option<ShareState> {
        let encoded = location.query_param(SHARE_PARAM)?;
        match share_codec::decode(&encoded) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Invalid share URL: {}", e);
                None
            }
        }
    }

    pub fn load_analytics(&self) -> AnalyticsState {
        AnalyticsState {
            clicks: self
                .read_json::<BTreeMap<String, u64>>(&self.keys.clicks)
                .unwrap_or_default(),
            searches: self
                .read_json::<VecDeque<SearchEntry>>(&self.keys.searches)
                .unwrap_or_default(),
        }
    }

    pub fn record_click(&self, analytics: &mut AnalyticsState, id: &str) -> Result<(), StoreError> {
        let count = analytics.record_click(id);
        tracing::debug!("Dashboard {} opened {} times", id, count);
        self.write_json(&self.keys.clicks, &analytics.clicks)
    }

    pub fn record_search(&self, analytics: &mut AnalyticsState, term: &str) -> Result<(), StoreError> {
        let now = chrono::Utc::now().timestamp_millis();
        if analytics.record_search(term, now) {
            self.write_json(&self.keys.searches, &analytics.searches)?;
        }
        Ok(())
    }

    pub fn load_theme(&self) -> Theme {
        self.store
            .get(&self.keys.theme)
            .map(|value| Theme::parse(&value))
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(&self.keys.theme, theme.as_str())
    }

    pub fn load_short_urls(&self) -> BTreeMap<String, String> {
        self.read_json(&self.keys.short_urls).unwrap_or_default()
    }

    pub fn save_short_url(&self, code: &str, url: &str) -> Result<(), StoreError> {
        let mut table = self.load_short_urls();
        table.insert(code.to_string(), url.to_string());
        self.write_json(&self.keys.short_urls, &table)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed stored value for {}: {}", key, e);
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }
}
