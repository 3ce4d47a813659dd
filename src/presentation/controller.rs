// Hub controller - Owns the page and hub state, reacts to UI events one at a time
use crate::application::host::{Display, ListenerKind, Page, element};
use crate::application::link_service::CopyOutcome;
use crate::application::scheduler::{ClickTarget, Debouncer, Scheduler, UiEvent};
use crate::domain::catalog::Catalog;
use crate::domain::facet::{FacetKind, FacetStyles};
use crate::domain::share::ShareState;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{FilterAction, TileAction, filter_action, tile_action};
use crate::presentation::hub_state::HubState;
use anyhow::Context;
use std::time::Duration;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboards. Please refresh the page.";

pub struct HubController<P: Page> {
    page: P,
    app: AppState,
    state: HubState,
    search_debounce: Debouncer,
    listeners_bound: bool,
}

impl<P: Page> HubController<P> {
    pub fn new(page: P, app: AppState, scheduler: Scheduler, debounce: Duration) -> Self {
        let catalog = Catalog::empty(&FacetStyles::categories(), &FacetStyles::platforms());
        Self {
            page,
            app,
            state: HubState::new(catalog),
            search_debounce: Debouncer::new(scheduler, debounce),
            listeners_bound: false,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    #[cfg(test)]
    pub fn state(&self) -> &HubState {
        &self.state
    }

    /// Run the startup sequence. Failures end up as a toast, never a panic.
    pub async fn start(&mut self) {
        if let Err(e) = self.init().await {
            tracing::error!("Failed to initialize dashboard hub: {:#}", e);
            self.app.toasts.error(&mut self.page, LOAD_FAILED_MESSAGE);
        }
    }

    async fn init(&mut self) -> anyhow::Result<()> {
        self.state.catalog = self.app.catalog_service.load().await;
        if self.state.catalog.is_empty() {
            tracing::warn!("No dashboards available, showing the empty state");
        }
        self.state.favorites = self.app.persistence.load_favorites();
        self.state.analytics = self.app.persistence.load_analytics();
        self.restore_shared_state()
            .context("Failed to restore shared state")?;

        self.bind_listeners();
        self.render_filters();
        self.apply_filters();
        self.state.theme = self.app.themes.restore(&mut self.page);

        tracing::info!(
            "Dashboard hub ready: {} dashboards, {} favorites",
            self.state.catalog.records.len(),
            self.state.favorites.len()
        );
        Ok(())
    }

    fn restore_shared_state(&mut self) -> anyhow::Result<()> {
        let location = self.page.location();
        let Some(shared) = self.app.persistence.load_share_state(&location) else {
            return Ok(());
        };

        let (favorites, criteria) = shared.into_parts();
        self.state.favorites = favorites;
        self.state.criteria = criteria;
        self.app.persistence.save_favorites(&self.state.favorites)?;

        tracing::info!(
            "Loaded shared state with {} favorites",
            self.state.favorites.len()
        );
        self.app
            .toasts
            .info(&mut self.page, "Shared dashboard state loaded!");
        Ok(())
    }

    /// Listeners are delegated from stable containers, so they survive
    /// re-renders and are bound once per page.
    fn bind_listeners(&mut self) {
        if self.listeners_bound {
            return;
        }
        self.listeners_bound = true;
        if self.page.listen(element::SEARCH_INPUT, ListenerKind::Input) {
            self.page
                .set_value(element::SEARCH_INPUT, &self.state.criteria.search);
        }
        self.page.listen(element::THEME_TOGGLE, ListenerKind::Click);
        self.page.listen(element::FILTER_CONTAINER, ListenerKind::Click);
        self.page.listen(element::DASHBOARD_GRID, ListenerKind::Click);
    }

    /// Handle one event. Returns false once the hub should stop.
    pub async fn handle(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SearchInput(value) => self.on_search_input(value),
            UiEvent::SearchSettled(generation) => {
                if self.search_debounce.settle(generation) {
                    self.apply_filters();
                } else {
                    tracing::debug!("Dropping superseded search timer {}", generation);
                }
            }
            UiEvent::FilterClick(target) => self.on_filter_click(&target).await,
            UiEvent::GridClick(target) => self.on_grid_click(&target).await,
            UiEvent::ThemeToggle => {
                self.state.theme = self.app.themes.toggle(&mut self.page, self.state.theme);
            }
            UiEvent::ToastExpired => self.app.toasts.expire(&mut self.page),
            UiEvent::Shutdown => return false,
        }
        true
    }

    fn on_search_input(&mut self, value: String) {
        if let Err(e) = self
            .app
            .persistence
            .record_search(&mut self.state.analytics, &value)
        {
            tracing::warn!("Failed to record search: {}", e);
        }
        self.state.criteria.search = value;
        self.search_debounce.schedule(UiEvent::SearchSettled);
    }

    async fn on_filter_click(&mut self, target: &ClickTarget) {
        let Some(action) = filter_action(target) else {
            return;
        };

        match action {
            FilterAction::Toggle(FacetKind::Category, id) => {
                self.state.criteria.toggle_category(&id);
                self.render_filters();
                self.apply_filters();
            }
            FilterAction::Toggle(FacetKind::Platform, id) => {
                self.state.criteria.toggle_platform(&id);
                self.render_filters();
                self.apply_filters();
            }
            FilterAction::Clear => self.clear_filters(),
            FilterAction::Share if self.app.features.share_favorites => {
                self.share_favorites().await
            }
            FilterAction::Share => tracing::debug!("Sharing favorites is disabled"),
        }
    }

    async fn on_grid_click(&mut self, target: &ClickTarget) {
        let Some(action) = tile_action(target) else {
            return;
        };

        match action {
            TileAction::ToggleFavorite(id) => self.toggle_favorite(&id),
            TileAction::CopyUrl { .. } if !self.app.features.copy_short_url => {
                tracing::debug!("Copying short URLs is disabled");
            }
            TileAction::CopyUrl { id, url } => {
                let url = url.or_else(|| self.state.catalog.find(&id).map(|r| r.url.clone()));
                match url {
                    Some(url) => self.copy_short_url(&url).await,
                    None => tracing::warn!("No URL to copy for dashboard {}", id),
                }
            }
            TileAction::Open(id) => {
                if let Err(e) = self
                    .app
                    .persistence
                    .record_click(&mut self.state.analytics, &id)
                {
                    tracing::warn!("Failed to record click: {}", e);
                }
            }
        }
    }

    pub fn clear_filters(&mut self) {
        self.state.criteria.clear();
        self.page.set_value(element::SEARCH_INPUT, "");
        self.render_filters();
        self.apply_filters();
    }

    pub fn toggle_favorite(&mut self, id: &str) {
        let added = self.state.favorites.toggle(id);
        if let Err(e) = self.app.persistence.save_favorites(&self.state.favorites) {
            tracing::warn!("Failed to save favorites: {}", e);
        }
        self.render_dashboards();

        let title = self
            .state
            .catalog
            .find(id)
            .map_or(id, |record| record.title.as_str())
            .to_string();
        let message = if added {
            format!("{} added to favorites", title)
        } else {
            format!("{} removed from favorites", title)
        };
        self.app.toasts.info(&mut self.page, &message);
    }

    pub async fn share_favorites(&mut self) {
        if self.state.favorites.is_empty() {
            self.app.toasts.info(&mut self.page, "No favorites to share");
            return;
        }

        let shared = ShareState::capture(&self.state.favorites, &self.state.criteria);
        let location = self.page.location();
        match self.app.links.copy_share_link(&location, &shared).await {
            CopyOutcome::Copied(_) => self
                .app
                .toasts
                .info(&mut self.page, "Share link copied to clipboard!"),
            CopyOutcome::Prompted(_) => self
                .app
                .toasts
                .info(&mut self.page, "Clipboard unavailable - link shown in prompt"),
        }
    }

    pub async fn copy_short_url(&mut self, url: &str) {
        let location = self.page.location();
        match self.app.links.copy_short_url(&location, url).await {
            CopyOutcome::Copied(_) => self
                .app
                .toasts
                .info(&mut self.page, "Shortened URL copied to clipboard!"),
            CopyOutcome::Prompted(_) => self
                .app
                .toasts
                .info(&mut self.page, "Copy failed - URL shown in prompt"),
        }
    }

    pub fn resolve_short_url(&self, code: &str) -> Option<String> {
        self.app.links.resolve(code)
    }

    fn apply_filters(&mut self) {
        self.state.refilter();
        tracing::debug!(
            "Filter pass {} matched {} dashboards",
            self.state.recomputations,
            self.state.visible.len()
        );
        self.render_dashboards();
    }

    fn render_filters(&mut self) {
        let html = self
            .app
            .renderer
            .render_filters(&self.state.catalog, &self.state.criteria);
        self.page.set_inner_html(element::FILTER_CONTAINER, &html);
    }

    fn render_dashboards(&mut self) {
        if !self.page.has_element(element::DASHBOARD_GRID) {
            return;
        }

        if self.state.visible.is_empty() {
            self.page.set_display(element::DASHBOARD_GRID, Display::None);
            self.page.set_display(element::EMPTY_STATE, Display::Block);
            return;
        }

        self.page.set_display(element::DASHBOARD_GRID, Display::Grid);
        self.page.set_display(element::EMPTY_STATE, Display::None);
        let html = self.app.renderer.render_tiles(
            &self.state.catalog,
            &self.state.visible,
            &self.state.favorites,
        );
        self.page.set_inner_html(element::DASHBOARD_GRID, &html);
    }
}
