// Hub state - Everything the page controller owns between events
use crate::application::filter_engine::apply_filters;
use crate::domain::analytics::AnalyticsState;
use crate::domain::catalog::Catalog;
use crate::domain::dashboard::DashboardRecord;
use crate::domain::favorites::FavoritesSet;
use crate::domain::filter::FilterCriteria;
use crate::domain::theme::Theme;

#[derive(Debug, Clone)]
pub struct HubState {
    pub catalog: Catalog,
    pub criteria: FilterCriteria,
    pub favorites: FavoritesSet,
    pub analytics: AnalyticsState,
    pub theme: Theme,
    /// Result of the last filter pass, in catalog order.
    pub visible: Vec<DashboardRecord>,
    /// Number of filter passes run so far.
    pub recomputations: u64,
}

impl HubState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            favorites: FavoritesSet::default(),
            analytics: AnalyticsState::default(),
            theme: Theme::default(),
            visible: Vec::new(),
            recomputations: 0,
        }
    }

    pub fn refilter(&mut self) {
        self.visible = apply_filters(&self.catalog, &self.criteria)
            .into_iter()
            .cloned()
            .collect();
        self.recomputations += 1;
    }
}
