// Scheduler - UI events, timers and the trailing-edge search debounce
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The element a delegated click landed on, as the container listener sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickTarget {
    pub classes: Vec<String>,
    /// `data-*` attributes without the prefix, e.g. `type` for `data-type`.
    pub data: BTreeMap<String, String>,
    /// `data-dashboard-id` of the closest tile ancestor.
    pub dashboard_id: Option<String>,
}

impl ClickTarget {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// A filter chip: `<button class="filter-chip" data-type=.. data-value=..>`.
    pub fn chip(kind: &str, value: Option<&str>) -> Self {
        let mut data = BTreeMap::new();
        data.insert("type".to_string(), kind.to_string());
        if let Some(value) = value {
            data.insert("value".to_string(), value.to_string());
        }
        Self {
            classes: vec!["filter-chip".to_string()],
            data,
            dashboard_id: None,
        }
    }

    /// A button inside a tile, e.g. `btn-favorite`.
    pub fn tile_button(dashboard_id: &str, class: &str) -> Self {
        Self {
            classes: vec!["btn".to_string(), class.to_string()],
            data: BTreeMap::new(),
            dashboard_id: Some(dashboard_id.to_string()),
        }
    }

    #[cfg(test)]
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SearchInput(String),
    FilterClick(ClickTarget),
    GridClick(ClickTarget),
    ThemeToggle,
    /// The search quiet period elapsed; carries the debounce generation.
    SearchSettled(u64),
    ToastExpired,
    Shutdown,
}

/// Posts events back onto the UI queue, now or after a delay.
#[derive(Clone)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl Scheduler {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }

    pub fn post(&self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("UI queue closed, dropping event");
        }
    }

    pub fn after(&self, delay: Duration, event: UiEvent) -> JoinHandle<()> {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        })
    }
}

/// At most one pending timer; scheduling again replaces it, so only the
/// last call within the quiet period fires.
///
/// Every timer carries a generation number. A timer that already fired but
/// is still queued when a newer one is scheduled is stale, and `settle`
/// rejects it.
pub struct Debouncer {
    scheduler: Scheduler,
    wait: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(scheduler: Scheduler, wait: Duration) -> Self {
        Self {
            scheduler,
            wait,
            generation: 0,
            pending: None,
        }
    }

    pub fn schedule(&mut self, event: impl FnOnce(u64) -> UiEvent) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        self.generation += 1;
        self.pending = Some(self.scheduler.after(self.wait, event(self.generation)));
    }

    /// Accept a fired timer if it is the latest one scheduled.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.pending = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_collapses_rapid_calls() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Scheduler::new(tx), Duration::from_millis(300));

        debouncer.schedule(UiEvent::SearchSettled);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(UiEvent::SearchSettled);
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.schedule(UiEvent::SearchSettled);

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(drain(&mut rx).is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![UiEvent::SearchSettled(3)]);
        assert!(debouncer.settle(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Scheduler::new(tx), Duration::from_millis(300));

        debouncer.schedule(UiEvent::SearchSettled);
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(debouncer.settle(1));
        debouncer.schedule(UiEvent::SearchSettled);
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(
            drain(&mut rx),
            vec![UiEvent::SearchSettled(1), UiEvent::SearchSettled(2)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_timer_goes_stale_when_rescheduled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Scheduler::new(tx), Duration::from_millis(300));

        debouncer.schedule(UiEvent::SearchSettled);
        tokio::time::sleep(Duration::from_millis(301)).await;
        // Fired and queued, but not yet handled.
        debouncer.schedule(UiEvent::SearchSettled);

        assert_eq!(drain(&mut rx), vec![UiEvent::SearchSettled(1)]);
        assert!(!debouncer.settle(1));

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(drain(&mut rx), vec![UiEvent::SearchSettled(2)]);
        assert!(debouncer.settle(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_after_fires_every_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(tx);

        scheduler.after(Duration::from_secs(3), UiEvent::ToastExpired);
        scheduler.after(Duration::from_secs(4), UiEvent::ToastExpired);
        scheduler.post(UiEvent::ThemeToggle);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(
            drain(&mut rx),
            vec![UiEvent::ThemeToggle, UiEvent::ToastExpired, UiEvent::ToastExpired]
        );
    }

    #[test]
    fn test_click_target_builders() {
        let chip = ClickTarget::chip("category", Some("sales"));
        assert!(chip.has_class("filter-chip"));
        assert_eq!(chip.data("type"), Some("category"));
        assert_eq!(chip.data("value"), Some("sales"));

        let copy = ClickTarget::tile_button("budget", "btn-copy-url").with_data("url", "https://x");
        assert!(copy.has_class("btn-copy-url"));
        assert_eq!(copy.data("url"), Some("https://x"));
        assert_eq!(copy.dashboard_id.as_deref(), Some("budget"));
    }
}
