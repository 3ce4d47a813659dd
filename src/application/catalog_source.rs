// Catalog source trait - Where catalog documents are fetched from
use async_trait::async_trait;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the JSON document at a site-relative path.
    /// A missing document or a non-success response is an error.
    async fn fetch_json(&self, path: &str) -> anyhow::Result<serde_json::Value>;
}
