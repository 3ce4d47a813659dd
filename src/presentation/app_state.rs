// Application state shared by the controller
use crate::application::catalog_service::CatalogService;
use crate::application::link_service::LinkService;
use crate::application::persistence_service::PersistenceService;
use crate::application::theme_service::ThemeService;
use crate::application::toast_service::ToastService;
use crate::infrastructure::config::FeatureFlags;
use crate::presentation::renderer::ViewRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub persistence: PersistenceService,
    pub links: LinkService,
    pub themes: ThemeService,
    pub toasts: ToastService,
    pub renderer: Arc<dyn ViewRenderer>,
    pub features: FeatureFlags,
}
