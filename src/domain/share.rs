// Share state - Portable projection of favorites and filters for share links
use serde::{Deserialize, Deserializer, Serialize};

use super::favorites::FavoritesSet;
use super::filter::FilterCriteria;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareState {
    #[serde(rename = "f", default, deserialize_with = "null_as_default")]
    pub favorites: Vec<String>,
    #[serde(rename = "s", default, deserialize_with = "null_as_default")]
    pub search: String,
    #[serde(rename = "c", default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "p", default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(rename = "t", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl ShareState {
    pub fn capture(favorites: &FavoritesSet, criteria: &FilterCriteria) -> Self {
        Self {
            favorites: favorites.to_vec(),
            search: criteria.search.clone(),
            category: criteria.category.clone(),
            platform: criteria.platform.clone(),
            tags: criteria.tags.clone(),
        }
    }

    pub fn into_parts(self) -> (FavoritesSet, FilterCriteria) {
        let favorites = self.favorites.into_iter().collect();
        let criteria = FilterCriteria {
            search: self.search,
            category: self.category,
            platform: self.platform,
            tags: self.tags,
        };
        (favorites, criteria)
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
