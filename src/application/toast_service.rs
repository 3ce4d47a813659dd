// Toast service - Transient feedback messages with auto-dismiss
use crate::application::host::{Page, element};
use crate::application::scheduler::{Scheduler, UiEvent};
use crate::domain::toast::{HIDDEN_TOAST_CLASS, ToastKind};
use std::time::Duration;

/// Every message schedules its own dismissal. Dismissals are never
/// cancelled, so a timer started by an earlier message can hide a later one.
#[derive(Clone)]
pub struct ToastService {
    scheduler: Scheduler,
    duration: Duration,
}

impl ToastService {
    pub fn new(scheduler: Scheduler, duration: Duration) -> Self {
        Self {
            scheduler,
            duration,
        }
    }

    pub fn show(&self, page: &mut dyn Page, message: &str, kind: ToastKind) {
        if !page.has_element(element::TOAST) {
            tracing::debug!("No toast element, dropping message: {}", message);
            return;
        }

        page.set_text(element::TOAST, message);
        page.set_class(element::TOAST, &kind.visible_class());
        self.scheduler.after(self.duration, UiEvent::ToastExpired);
    }

    pub fn info(&self, page: &mut dyn Page, message: &str) {
        self.show(page, message, ToastKind::Info);
    }

    pub fn error(&self, page: &mut dyn Page, message: &str) {
        self.show(page, message, ToastKind::Error);
    }

    /// Handle a fired dismissal timer.
    pub fn expire(&self, page: &mut dyn Page) {
        page.set_class(element::TOAST, HIDDEN_TOAST_CLASS);
    }
}
