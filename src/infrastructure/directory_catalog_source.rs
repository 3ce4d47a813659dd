// Directory catalog source - Reads catalog documents from a built site on disk
use crate::application::catalog_source::CatalogSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DirectoryCatalogSource {
    root: PathBuf,
}

impl DirectoryCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for DirectoryCatalogSource {
    async fn fetch_json(&self, path: &str) -> Result<serde_json::Value> {
        let file = self.resolve(path);
        let raw = tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", file.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_site_relative_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("src/data")).unwrap();
        std::fs::write(
            dir.path().join("src/data/dashboards.json"),
            r#"{"dashboards":[{"id":"a"}]}"#,
        )
        .unwrap();

        let source = DirectoryCatalogSource::new(dir.path());
        let document = source.fetch_json("/src/data/dashboards.json").await.unwrap();
        assert_eq!(document["dashboards"][0]["id"], "a");

        assert!(source.fetch_json("/pageTreeData.rocketGenerated.json").await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let source = DirectoryCatalogSource::new(dir.path());
        assert!(source.fetch_json("broken.json").await.is_err());
    }
}
