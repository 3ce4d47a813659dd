// Catalog service - Use case for loading the dashboard catalog at startup
use crate::application::catalog_source::CatalogSource;
use crate::domain::catalog::Catalog;
use crate::domain::dashboard::{DashboardRecord, RawDashboard};
use crate::domain::facet::FacetStyles;
use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Path segment that marks a page-tree node as a dashboard page.
const DASHBOARD_COLLECTION: &str = "dashboards/";

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    page_tree_path: String,
    flat_catalog_path: String,
    category_styles: FacetStyles,
    platform_styles: FacetStyles,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlatCatalog {
    Wrapped {
        #[serde(default)]
        dashboards: Vec<Value>,
    },
    Bare(Vec<Value>),
}

impl CatalogService {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        page_tree_path: String,
        flat_catalog_path: String,
        category_styles: FacetStyles,
        platform_styles: FacetStyles,
    ) -> Self {
        Self {
            source,
            page_tree_path,
            flat_catalog_path,
            category_styles,
            platform_styles,
        }
    }

    /// Load the catalog, trying the page tree first and the flat document
    /// second. Never fails: if neither source yields dashboards the catalog
    /// is empty.
    pub async fn load(&self) -> Catalog {
        let today = chrono::Utc::now().date_naive();
        let records = self.load_records(today).await;
        tracing::info!("Loaded {} dashboards", records.len());
        Catalog::from_records(records, &self.category_styles, &self.platform_styles)
    }

    async fn load_records(&self, today: NaiveDate) -> Vec<DashboardRecord> {
        match self.load_page_tree(today).await {
            Ok(records) if !records.is_empty() => return records,
            Ok(_) => {
                tracing::debug!(
                    "Page tree {} has no dashboard pages, trying {}",
                    self.page_tree_path,
                    self.flat_catalog_path
                );
            }
            Err(e) => {
                tracing::warn!("Loading from page tree failed, trying JSON fallback: {:#}", e);
            }
        }

        match self.load_flat_catalog(today).await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Both page tree and JSON loading failed: {:#}", e);
                Vec::new()
            }
        }
    }

    async fn load_page_tree(&self, today: NaiveDate) -> anyhow::Result<Vec<DashboardRecord>> {
        let tree = self
            .source
            .fetch_json(&self.page_tree_path)
            .await
            .with_context(|| format!("Failed to fetch {}", self.page_tree_path))?;
        Ok(extract_from_page_tree(&tree, today))
    }

    async fn load_flat_catalog(&self, today: NaiveDate) -> anyhow::Result<Vec<DashboardRecord>> {
        let document = self
            .source
            .fetch_json(&self.flat_catalog_path)
            .await
            .with_context(|| format!("Failed to fetch {}", self.flat_catalog_path))?;
        let entries = match serde_json::from_value::<FlatCatalog>(document)
            .context("Catalog document is neither a list nor an object with a dashboards list")?
        {
            FlatCatalog::Wrapped { dashboards } => dashboards,
            FlatCatalog::Bare(entries) => entries,
        };

        Ok(entries
            .into_iter()
            .filter_map(|entry| normalize_entry(entry, today))
            .collect())
    }
}

/// Walk the page tree depth-first, collecting every node whose source file
/// lives in the dashboards collection.
pub fn extract_from_page_tree(tree: &Value, today: NaiveDate) -> Vec<DashboardRecord> {
    let mut records = Vec::new();
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        let is_dashboard = node
            .get("sourceRelativeFilePath")
            .and_then(Value::as_str)
            .is_some_and(|path| path.contains(DASHBOARD_COLLECTION));
        if is_dashboard {
            if let Some(record) = normalize_entry(node.clone(), today) {
                records.push(record);
            }
        }

        if let Some(children) = node.get("children").and_then(Value::as_array) {
            // Reversed so siblings come off the stack in document order.
            stack.extend(children.iter().rev());
        }
    }

    records
}

fn normalize_entry(entry: Value, today: NaiveDate) -> Option<DashboardRecord> {
    match serde_json::from_value::<RawDashboard>(entry) {
        Ok(raw) => Some(raw.normalize(today)),
        Err(e) => {
            tracing::warn!("Skipping malformed dashboard entry: {}", e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned documents by path and records every request.
    #[derive(Default)]
    pub struct FakeSource {
        pub documents: HashMap<String, Value>,
        pub requests: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub fn with(mut self, path: &str, document: Value) -> Self {
            self.documents.insert(path.to_string(), document);
            self
        }
    }

    #[async_trait]
    impl CatalogSource for FakeSource {
        async fn fetch_json(&self, path: &str) -> anyhow::Result<Value> {
            self.requests.lock().unwrap().push(path.to_string());
            self.documents
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("404 for {}", path))
        }
    }

    pub fn service(source: Arc<FakeSource>) -> CatalogService {
        CatalogService::new(
            source,
            "/tree.json".to_string(),
            "/dashboards.json".to_string(),
            FacetStyles::categories(),
            FacetStyles::platforms(),
        )
    }
}
