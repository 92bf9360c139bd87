//! Toast Notifications
//!
//! Transient messages pinned to the top-right corner. Each toast slides in,
//! stays for the display time, slides out and removes itself. There is no
//! queue: simultaneous toasts share the same position.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success",
            ToastKind::Warning => "alert alert-warning",
            ToastKind::Error => "alert alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Exit animation running
    pub leaving: bool,
}

/// Toasts on screen, in insertion order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message, leaving: false });
        id
    }

    pub fn start_leaving(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// When a toast starts leaving and when it is removed, in ms after it was shown
pub fn toast_timeline(display_ms: u32, exit_ms: u32) -> (u32, u32) {
    (display_ms, display_ms.saturating_add(exit_ms))
}

/// Shows toasts; copied freely into handlers.
#[derive(Clone, Copy)]
pub struct Notifier {
    list: RwSignal<ToastList>,
    display_ms: u32,
    exit_ms: u32,
}

impl Notifier {
    pub fn new(display_ms: u32, exit_ms: u32) -> Self {
        Self {
            list: RwSignal::new(ToastList::default()),
            display_ms,
            exit_ms,
        }
    }

    /// Show a toast. Removal is scheduled immediately and cannot be cancelled.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::log_1(&format!("[TOAST] {:?}: {}", kind, message).into());

        let mut id = 0;
        self.list.update(|l| id = l.push(kind, message));

        let list = self.list;
        let (leave_at, remove_at) = toast_timeline(self.display_ms, self.exit_ms);
        spawn_local(async move {
            TimeoutFuture::new(leave_at).await;
            list.update(|l| {
                l.start_leaving(id);
            });
            TimeoutFuture::new(remove_at - leave_at).await;
            list.update(|l| {
                l.remove(id);
            });
        });
    }

    /// Current toasts (tracked)
    pub fn toasts(&self) -> Vec<Toast> {
        self.list.with(|l| l.toasts().to_vec())
    }
}

fn toast_style(leaving: bool) -> &'static str {
    if leaving {
        "position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px; animation: slideOut 0.3s ease-out forwards;"
    } else {
        "position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px; animation: slideIn 0.3s ease-out;"
    }
}

/// Renders the toasts of a notifier
#[component]
pub fn ToastStack(notifier: Notifier) -> impl IntoView {
    view! {
        <For
            each=move || notifier.toasts()
            // Leaving re-renders the element so the exit animation starts
            key=|toast| (toast.id, toast.leaving)
            children=move |toast| {
                view! {
                    <div class=toast.kind.css_class() style=toast_style(toast.leaving)>
                        {toast.message}
                    </div>
                }
            }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_keep_insertion_order() {
        let mut list = ToastList::default();
        let a = list.push(ToastKind::Success, "Request moved to Scrap".to_string());
        let b = list.push(ToastKind::Warning, "Equipment has been marked as scrapped".to_string());

        assert_ne!(a, b);
        let kinds: Vec<_> = list.toasts().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Warning]);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut list = ToastList::default();
        let id = list.push(ToastKind::Error, "Network error occurred".to_string());
        assert!(!list.toasts()[0].leaving);

        assert!(list.start_leaving(id));
        assert!(list.toasts()[0].leaving);

        assert!(list.remove(id));
        assert!(list.toasts().is_empty());
        // Timers fire once; a second removal is a no-op
        assert!(!list.remove(id));
        assert!(!list.start_leaving(id));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut list = ToastList::default();
        let first = list.push(ToastKind::Success, "a".to_string());
        list.remove(first);
        let second = list.push(ToastKind::Warning, "b".to_string());
        assert_ne!(first, second);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(ToastKind::Success.css_class(), "alert alert-success");
        assert_eq!(ToastKind::Warning.css_class(), "alert alert-warning");
        assert_eq!(ToastKind::Error.css_class(), "alert alert-error");
    }

    #[test]
    fn test_toast_gone_after_display_and_exit() {
        use crate::config::{BoardConfig, TOAST_DISPLAY_MS, TOAST_EXIT_MS};

        let config = BoardConfig::default();
        let (leave_at, remove_at) = toast_timeline(config.toast_display_ms, config.toast_exit_ms);
        assert_eq!(leave_at, TOAST_DISPLAY_MS);
        assert_eq!(remove_at, 3300);
        assert_eq!(toast_timeline(TOAST_DISPLAY_MS, TOAST_EXIT_MS), (3000, 3300));
        assert_eq!(toast_timeline(u32::MAX, 1).1, u32::MAX);
    }
}
