// Link service - Share links and browser-local short URLs
use crate::application::host::{Clipboard, PageLocation, Prompt};
use crate::application::persistence_service::PersistenceService;
use crate::application::preference_store::StoreError;
use crate::domain::share::ShareState;
use crate::infrastructure::share_codec;
use sha2::{Digest, Sha256};
use std::sync::Arc;

pub const SHORT_CODE_LEN: usize = 6;

/// What happened to a link the user asked to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(String),
    /// The clipboard refused; the link was shown in a prompt instead.
    Prompted(String),
}

#[derive(Clone)]
pub struct LinkService {
    clipboard: Arc<dyn Clipboard>,
    prompt: Arc<dyn Prompt>,
    persistence: PersistenceService,
}

impl LinkService {
    pub fn new(
        clipboard: Arc<dyn Clipboard>,
        prompt: Arc<dyn Prompt>,
        persistence: PersistenceService,
    ) -> Self {
        Self {
            clipboard,
            prompt,
            persistence,
        }
    }

    pub async fn copy_share_link(&self, location: &PageLocation, state: &ShareState) -> CopyOutcome {
        let url = share_codec::share_url(&location.origin, &location.pathname, state);
        match self.clipboard.write_text(&url).await {
            Ok(()) => CopyOutcome::Copied(url),
            Err(e) => {
                tracing::warn!("Clipboard unavailable for share link: {}", e);
                self.prompt
                    .prompt("Copy this link to share your favorites:", &url);
                CopyOutcome::Prompted(url)
            }
        }
    }

    /// Shorten `url`, remember the mapping locally and copy the short form.
    /// If anything fails the original URL is shown in a prompt.
    pub async fn copy_short_url(&self, location: &PageLocation, url: &str) -> CopyOutcome {
        let copied = async {
            let short = self.shorten(location, url)?;
            self.clipboard.write_text(&short).await?;
            anyhow::Ok(short)
        }
        .await;

        match copied {
            Ok(short) => CopyOutcome::Copied(short),
            Err(e) => {
                tracing::error!("Failed to copy URL: {:#}", e);
                self.prompt.prompt("Copy this URL:", url);
                CopyOutcome::Prompted(url.to_string())
            }
        }
    }

    pub fn shorten(&self, location: &PageLocation, url: &str) -> Result<String, StoreError> {
        let code = short_code(url);
        self.persistence.save_short_url(&code, url)?;
        Ok(format!("{}/s/{}", location.origin, code))
    }

    /// Look up a code created in this browser.
    pub fn resolve(&self, code: &str) -> Option<String> {
        self.persistence
            .load_short_urls()
            .remove(&code.to_uppercase())
    }
}

/// First six bytes of the SHA-256 digest, each reduced mod 36 to one
/// base-36 digit, uppercased.
pub fn short_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    digest
        .iter()
        .take(SHORT_CODE_LEN)
        .filter_map(|byte| char::from_digit(u32::from(byte % 36), 36))
        .collect::<String>()
        .to_uppercase()
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;
    use crate::infrastructure::config::StorageKeys;
    use crate::infrastructure::memory_store::MemoryStore;

    fn location() -> PageLocation {
        PageLocation {
            origin: "https://hub.example.com".to_string(),
            pathname: "/index.html".to_string(),
            search: String::new(),
        }
    }

    fn links(clipboard: Arc<FakeClipboard>, prompt: Arc<FakePrompt>) -> LinkService {
        let persistence =
            PersistenceService::new(Arc::new(MemoryStore::default()), StorageKeys::default());
        LinkService::new(clipboard, prompt, persistence)
    }

    #[test]
    fn test_short_code_shape() {
        let code = short_code("https://bi.example.com/sales");
        assert_eq!(code.len(), SHORT_CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert_eq!(code, short_code("https://bi.example.com/sales"));
        assert_ne!(code, short_code("https://bi.example.com/finance"));
    }

    #[test]
    fn test_short_code_known_digest() {
        // sha256("") = e3 b0 c4 42 98 fc ...
        assert_eq!(short_code(""), "BWGU80");
    }

    #[tokio::test]
    async fn test_copy_short_url_stores_mapping() {
        let clipboard = Arc::new(FakeClipboard::default());
        let service = links(clipboard.clone(), Arc::new(FakePrompt::default()));
        let url = "https://bi.example.com/sales";

        let outcome = service.copy_short_url(&location(), url).await;
        let expected = format!("https://hub.example.com/s/{}", short_code(url));
        assert_eq!(outcome, CopyOutcome::Copied(expected.clone()));
        assert_eq!(*clipboard.written.lock().unwrap(), vec![expected]);
        assert_eq!(service.resolve(&short_code(url)).as_deref(), Some(url));
        assert_eq!(service.resolve(&short_code(url).to_lowercase()).as_deref(), Some(url));
        assert_eq!(service.resolve("NOPE00"), None);
    }

    #[tokio::test]
    async fn test_copy_short_url_falls_back_to_prompt() {
        let clipboard = Arc::new(FakeClipboard {
            fail: true,
            ..Default::default()
        });
        let prompt = Arc::new(FakePrompt::default());
        let service = links(clipboard, prompt.clone());

        let outcome = service.copy_short_url(&location(), "https://bi.example.com/a").await;
        assert_eq!(outcome, CopyOutcome::Prompted("https://bi.example.com/a".to_string()));
        assert_eq!(
            *prompt.shown.lock().unwrap(),
            vec![("Copy this URL:".to_string(), "https://bi.example.com/a".to_string())]
        );
    }

    #[tokio::test]
    async fn test_share_link_round_trips() {
        let clipboard = Arc::new(FakeClipboard::default());
        let service = links(clipboard.clone(), Arc::new(FakePrompt::default()));
        let state = ShareState {
            favorites: vec!["budget".to_string()],
            category: "finance".to_string(),
            ..Default::default()
        };

        let CopyOutcome::Copied(url) = service.copy_share_link(&location(), &state).await else {
            panic!("expected the link to be copied");
        };
        assert!(url.starts_with("https://hub.example.com/index.html?state="));

        let shared = PageLocation {
            search: format!("?{}", url.split_once('?').unwrap().1),
            ..location()
        };
        let encoded = shared.query_param("state").unwrap();
        assert_eq!(share_codec::decode(&encoded).unwrap(), state);
    }

    #[tokio::test]
    async fn test_share_link_prompt_fallback() {
        let clipboard = Arc::new(FakeClipboard {
            fail: true,
            ..Default::default()
        });
        let prompt = Arc::new(FakePrompt::default());
        let service = links(clipboard, prompt.clone());

        let outcome = service
            .copy_share_link(&location(), &ShareState::default())
            .await;
        assert!(matches!(outcome, CopyOutcome::Prompted(_)));
        assert_eq!(
            prompt.shown.lock().unwrap()[0].0,
            "Copy this link to share your favorites:"
        );
    }
}
