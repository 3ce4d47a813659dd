// Application layer - Services and the ports they run against
pub mod catalog_service;
pub mod catalog_source;
pub mod filter_engine;
pub mod host;
pub mod link_service;
pub mod persistence_service;
pub mod preference_store;
pub mod scheduler;
pub mod theme_service;
pub mod toast_service;
