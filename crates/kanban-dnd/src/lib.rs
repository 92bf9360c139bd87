//! Kanban DnD Utilities
//!
//! HTML5 drag-and-drop for Leptos: one tracked card per drag session,
//! plus the hovered drop target for highlighting.

use std::fmt::Display;

use leptos::prelude::*;
use web_sys::DragEvent;

/// Drag session state.
///
/// `C` identifies a draggable card, `T` identifies a drop target.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<C, T> {
    dragging: Option<C>,
    over: Option<T>,
    /// Unmatched dragenter events on `over`; children bubble their own
    over_depth: u32,
}

impl<C, T> Default for DragSession<C, T> {
    fn default() -> Self {
        Self { dragging: None, over: None, over_depth: 0 }
    }
}

impl<C: PartialEq, T: PartialEq> DragSession<C, T> {
    /// Start tracking `card`. Returns the stale card it replaced, if any.
    pub fn start(&mut self, card: C) -> Option<C> {
        self.clear_over();
        self.dragging.replace(card)
    }

    /// Drag ended or was cancelled
    pub fn end(&mut self) {
        self.dragging = None;
        self.clear_over();
    }

    /// Entering a child of the hovered target counts as another enter on it.
    pub fn enter(&mut self, target: T) {
        if self.dragging.is_none() {
            return;
        }
        if self.over.as_ref() == Some(&target) {
            self.over_depth += 1;
        } else {
            self.over = Some(target);
            self.over_depth = 1;
        }
    }

    /// The highlight stays until every enter on the hovered target has its leave.
    /// Leaves from other targets are ignored.
    pub fn leave(&mut self, target: &T) {
        if self.over.as_ref() != Some(target) {
            return;
        }
        self.over_depth = self.over_depth.saturating_sub(1);
        if self.over_depth == 0 {
            self.over = None;
        }
    }

    /// Remove the tracked card for a drop, clearing the session.
    pub fn take(&mut self) -> Option<C> {
        self.clear_over();
        self.dragging.take()
    }

    fn clear_over(&mut self) {
        self.over = None;
        self.over_depth = 0;
    }

    pub fn dragging(&self) -> Option<&C> {
        self.dragging.as_ref()
    }

    pub fn over(&self) -> Option<&T> {
        self.over.as_ref()
    }

    pub fn is_dragging(&self, card: &C) -> bool {
        self.dragging.as_ref() == Some(card)
    }

    pub fn is_over(&self, target: &T) -> bool {
        self.over.as_ref() == Some(target)
    }
}

/// DnD state signals
pub struct DndSignals<C: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub session_read: ReadSignal<DragSession<C, T>>,
    pub session_write: WriteSignal<DragSession<C, T>>,
}

impl<C: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<C, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<C, T> {}

pub fn create_dnd_signals<C, T>() -> DndSignals<C, T>
where
    C: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (session_read, session_write) = signal(DragSession::default());
    DndSignals { session_read, session_write }
}

/// Create dragstart handler for a draggable card
pub fn make_on_dragstart<C, T>(dnd: DndSignals<C, T>, card: C) -> impl Fn(DragEvent) + Clone + 'static
where
    C: Clone + PartialEq + Display + Send + Sync + 'static,
    T: PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox refuses to start a drag without a payload
            let _ = dt.set_data("text/plain", &card.to_string());
        }
        let mut stale = None;
        dnd.session_write.update(|s| stale = s.start(card.clone()));
        if let Some(stale) = stale {
            web_sys::console::warn_1(&format!("[DND] Replaced stale drag of {}", stale).into());
        }
    }
}

/// Create dragend handler for a draggable card
pub fn make_on_dragend<C, T>(dnd: DndSignals<C, T>) -> impl Fn(DragEvent) + Copy + 'static
where
    C: PartialEq + Send + Sync + 'static,
    T: PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        dnd.session_write.update(|s| s.end());
    }
}

/// Create dragover handler for drop targets: allows the drop
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    }
}

/// Create dragenter handler (highlight target)
pub fn make_on_dragenter<C, T>(dnd: DndSignals<C, T>, target: T) -> impl Fn(DragEvent) + Clone + 'static
where
    C: PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        dnd.session_write.update(|s| s.enter(target.clone()));
    }
}

/// Create dragleave handler
pub fn make_on_dragleave<C, T>(dnd: DndSignals<C, T>, target: T) -> impl Fn(DragEvent) + Clone + 'static
where
    C: PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        dnd.session_write.update(|s| s.leave(&target));
    }
}

/// Create drop handler for a target.
/// Takes the tracked card out of the session and hands it to `on_drop`.
pub fn make_on_drop<C, T, F>(dnd: DndSignals<C, T>, target: T, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    C: PartialEq + Display + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(C, T) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let mut dropped = None;
        dnd.session_write.update(|s| dropped = s.take());

        match dropped {
            Some(card) => {
                web_sys::console::log_1(&format!("[DND] Drop: card={}", card).into());
                on_drop(card, target.clone());
            }
            None => {
                web_sys::console::log_1(&"[DND] Drop without a tracked card, ignoring".into());
            }
        }
    }
}

/// Tracked check: is `card` the one being dragged
pub fn is_dragging<C, T>(dnd: DndSignals<C, T>, card: &C) -> bool
where
    C: PartialEq + Send + Sync + 'static,
    T: PartialEq + Send + Sync + 'static,
{
    dnd.session_read.with(|s| s.is_dragging(card))
}

/// Tracked check: is `target` the hovered drop target
pub fn is_over<C, T>(dnd: DndSignals<C, T>, target: &T) -> bool
where
    C: PartialEq + Send + Sync + 'static,
    T: PartialEq + Send + Sync + 'static,
{
    dnd.session_read.with(|s| s.is_over(target))
}
