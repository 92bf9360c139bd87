//! Board Context
//!
//! Controller state scoped to one mounted board, provided via Leptos Context API.

use leptos::prelude::*;
use kanban_dnd::{create_dnd_signals, DndSignals};

use crate::config::BoardConfig;
use crate::notifier::Notifier;
use crate::store::BoardStore;

/// Drag session keyed by card request id and column status
pub type BoardDnd = DndSignals<String, String>;

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub store: BoardStore,
    pub dnd: BoardDnd,
    pub notifier: Notifier,
    pub config: StoredValue<BoardConfig>,
    /// Card currently playing the drop animation - read
    pub animating: ReadSignal<Option<String>>,
    /// Card currently playing the drop animation - write
    set_animating: WriteSignal<Option<String>>,
}

impl BoardContext {
    pub fn new(store: BoardStore, config: BoardConfig) -> Self {
        let notifier = Notifier::new(config.toast_display_ms, config.toast_exit_ms);
        let (animating, set_animating) = signal(None::<String>);
        Self {
            store,
            dnd: create_dnd_signals(),
            notifier,
            config: StoredValue::new(config),
            animating,
            set_animating,
        }
    }

    pub fn set_animating(&self, request_id: Option<String>) {
        self.set_animating.set(request_id);
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}
