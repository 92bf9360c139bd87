//! Kanban Board App
//!
//! Re-renders the board read from the page and owns the board context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::KanbanColumn;
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::notifier::ToastStack;
use crate::store::{store_columns, BoardState};

/// Toast animations and drag feedback
const BOARD_STYLES: &str = r#"
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}

@keyframes dropSettle {
    from { transform: scale(1.04); }
    to { transform: scale(1); }
}

.drag-over {
    background: #e3f2fd;
    border: 2px dashed #2196f3;
}

.kanban-card.dragging {
    opacity: 0.5;
}

.kanban-card.drop-animate {
    animation: dropSettle 0.3s ease-out;
}
"#;

#[component]
pub fn App(board: BoardState, config: BoardConfig) -> impl IntoView {
    let ctx = BoardContext::new(Store::new(board), config);

    // Provide context to all columns and cards
    provide_context(ctx);

    view! {
        <style>{BOARD_STYLES}</style>

        <For
            each=move || store_columns(&ctx.store)
            key=|column| column.status.clone()
            children=move |column| view! { <KanbanColumn column=column /> }
        />

        <ToastStack notifier=ctx.notifier />
    }
}
