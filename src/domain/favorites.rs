// Favorites - Dashboard ids the user starred
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: BTreeSet<String>,
}

impl FavoritesSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`. Returns true when it is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl FromIterator<String> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
