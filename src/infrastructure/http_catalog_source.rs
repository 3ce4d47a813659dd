// HTTP catalog source - Fetches catalog documents from the deployed site
use crate::application::catalog_source::CatalogSource;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.build_url(path);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("{} responded with status {}", url, response.status());
        }

        response
            .json::<serde_json::Value>()
            .await
            .with_context(|| format!("Failed to parse {} as JSON", url))
    }
}
