// Theme service - Light/dark toggle persisted across sessions
use crate::application::host::{Page, THEME_ATTRIBUTE, element};
use crate::application::persistence_service::PersistenceService;
use crate::domain::theme::Theme;

#[derive(Clone)]
pub struct ThemeService {
    persistence: PersistenceService,
}

impl ThemeService {
    pub fn new(persistence: PersistenceService) -> Self {
        Self { persistence }
    }

    /// Apply the stored theme (light when nothing is stored).
    pub fn restore(&self, page: &mut dyn Page) -> Theme {
        let theme = self.persistence.load_theme();
        apply(page, theme);
        theme
    }

    pub fn toggle(&self, page: &mut dyn Page, current: Theme) -> Theme {
        let next = current.toggled();
        apply(page, next);
        if let Err(e) = self.persistence.save_theme(next) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
        tracing::debug!("Theme switched to {}", next.as_str());
        next
    }
}

fn apply(page: &mut dyn Page, theme: Theme) {
    page.set_body_attribute(THEME_ATTRIBUTE, theme.as_str());
    if page.set_text(element::THEME_TOGGLE, theme.glyph()) {
        page.set_class(
            element::THEME_TOGGLE,
            &format!("theme-toggle {}", theme.toggle_class()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::preference_store::KeyValueStore;
    use crate::infrastructure::config::StorageKeys;
    use crate::infrastructure::memory_page::MemoryPage;
    use crate::infrastructure::memory_store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_restore_and_toggle() {
        let store = Arc::new(MemoryStore::default());
        let themes = ThemeService::new(PersistenceService::new(store.clone(), StorageKeys::default()));
        let mut page = MemoryPage::hub_page();

        let theme = themes.restore(&mut page);
        assert_eq!(theme, Theme::Light);
        assert_eq!(page.body_attribute(THEME_ATTRIBUTE), Some("light"));
        assert_eq!(page.text(element::THEME_TOGGLE), Some("☾"));

        let theme = themes.toggle(&mut page, theme);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(page.body_attribute(THEME_ATTRIBUTE), Some("dark"));
        assert_eq!(page.text(element::THEME_TOGGLE), Some("☀"));
        assert_eq!(page.class(element::THEME_TOGGLE), Some("theme-toggle dark-mode"));
        assert_eq!(store.get("dashboard-hub-theme").as_deref(), Some("dark"));

        let mut reloaded = MemoryPage::hub_page();
        assert_eq!(themes.restore(&mut reloaded), Theme::Dark);
    }

    #[test]
    fn test_missing_toggle_still_sets_body() {
        let themes = ThemeService::new(PersistenceService::new(
            Arc::new(MemoryStore::default()),
            StorageKeys::default(),
        ));
        let mut page = MemoryPage::default();

        themes.toggle(&mut page, Theme::Light);
        assert_eq!(page.body_attribute(THEME_ATTRIBUTE), Some("dark"));
    }
}
