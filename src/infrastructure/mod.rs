// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod console_host;
pub mod directory_catalog_source;
pub mod file_store;
pub mod http_catalog_source;
pub mod memory_page;
#[cfg(test)]
pub mod memory_store;
pub mod share_codec;
