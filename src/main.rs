// Main entry point - Dependency injection and the console event loop
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{sync::Arc, time::Duration};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::application::catalog_service::CatalogService;
use crate::application::catalog_source::CatalogSource;
use crate::application::host::PageLocation;
use crate::application::link_service::LinkService;
use crate::application::persistence_service::PersistenceService;
use crate::application::scheduler::Scheduler;
use crate::application::theme_service::ThemeService;
use crate::application::toast_service::ToastService;
use crate::infrastructure::config::{SourceKind, load_hub_config};
use crate::infrastructure::console_host::{ConsoleClipboard, ConsolePrompt};
use crate::infrastructure::directory_catalog_source::DirectoryCatalogSource;
use crate::infrastructure::file_store::FileStore;
use crate::infrastructure::http_catalog_source::HttpCatalogSource;
use crate::infrastructure::memory_page::MemoryPage;
use crate::presentation::app_state::AppState;
use crate::presentation::console;
use crate::presentation::controller::HubController;
use crate::presentation::renderer::HtmlRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_hub_config()?;

    // Create adapters (infrastructure layer)
    let source: Arc<dyn CatalogSource> = match config.catalog.source {
        SourceKind::Http => Arc::new(HttpCatalogSource::new(config.catalog.base.clone())),
        SourceKind::Directory => Arc::new(DirectoryCatalogSource::new(&config.catalog.base)),
    };
    let store = Arc::new(FileStore::open(&config.storage.path));
    let page = MemoryPage::hub_page().at(PageLocation {
        origin: config.page.origin.clone(),
        pathname: config.page.pathname.clone(),
        search: config.page.query.clone(),
    });

    // Create services (application layer)
    let (tx, rx) = mpsc::unbounded_channel();
    let scheduler = Scheduler::new(tx);
    let persistence = PersistenceService::new(store, config.storage.keys.clone());
    let catalog_service = CatalogService::new(
        source,
        config.catalog.page_tree_path.clone(),
        config.catalog.flat_catalog_path.clone(),
        config.styles.category_styles(),
        config.styles.platform_styles(),
    );

    // Create application state
    let state = AppState {
        catalog_service,
        persistence: persistence.clone(),
        links: LinkService::new(
            Arc::new(ConsoleClipboard),
            Arc::new(ConsolePrompt),
            persistence.clone(),
        ),
        themes: ThemeService::new(persistence),
        toasts: ToastService::new(
            scheduler.clone(),
            Duration::from_millis(config.timing.toast_ms),
        ),
        renderer: Arc::new(HtmlRenderer::new(
            config.features,
            config.page.fallback_image.clone(),
        )),
        features: config.features,
    };

    // Start the hub (presentation layer)
    let debounce = Duration::from_millis(config.timing.debounce_ms);
    let mut hub = HubController::new(page, state, scheduler.clone(), debounce);
    hub.start().await;
    println!("{}", console::snapshot(hub.page()));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    console::run(
        &mut hub,
        scheduler,
        rx,
        stdin,
        &mut stdout,
        debounce + Duration::from_millis(1),
    )
    .await?;

    Ok(())
}
