//! Kanban Column Component
//!
//! One status bucket: header with badge, and the card drop area. A header
//! read from the page is re-rendered as is, with its `.badge` kept current.

use leptos::html::Div;
use leptos::prelude::*;
use kanban_dnd::{is_over, make_on_dragenter, make_on_dragleave, make_on_dragover, make_on_drop};

use crate::components::{class_list, KanbanCard};
use crate::context::use_board;
use crate::controller::handle_drop;
use crate::models::Column;
use crate::store::{store_badge_counts, store_cards_in};

#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let ctx = use_board();
    let status = column.status.clone();
    let header_ref = NodeRef::<Div>::new();

    // DnD handlers
    let on_dragover = make_on_dragover();
    let on_dragenter = make_on_dragenter(ctx.dnd, status.clone());
    let on_dragleave = make_on_dragleave(ctx.dnd, status.clone());
    let on_drop = make_on_drop(ctx.dnd, status.clone(), move |request_id, target| {
        handle_drop(ctx, request_id, target);
    });

    // Badge is recomputed from the board state
    let badge_status = status.clone();
    let badge = move || {
        store_badge_counts(&ctx.store)
            .get(&badge_status)
            .copied()
            .unwrap_or(0)
    };

    let page_badge = badge.clone();
    Effect::new(move |_| {
        let count = page_badge();
        let Some(slot) = header_ref.get() else { return };
        if let Ok(Some(el)) = slot.query_selector(".badge") {
            el.set_text_content(Some(&count.to_string()));
        }
    });

    let over_status = status.clone();
    let cards_classes = column.cards_classes;
    let cards_class = move || {
        class_list("kanban-cards", &cards_classes, &[("drag-over", is_over(ctx.dnd, &over_status))])
    };

    let header = match column.header_html {
        Some(html) => view! {
            <div class="kanban-column-header-slot" style="display: contents;" node_ref=header_ref inner_html=html />
        }
        .into_any(),
        None => view! {
            <div class="kanban-column-header">
                <span class="kanban-column-title">{column.title}</span>
                <span class="badge">{badge}</span>
            </div>
        }
        .into_any(),
    };

    let cards_status = status.clone();

    view! {
        <div class=class_list("kanban-column", &column.classes, &[]) data-status=status>
            {header}
            <div
                class=cards_class
                on:dragover=on_dragover
                on:dragenter=on_dragenter
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=move || store_cards_in(&ctx.store, &cards_status)
                    key=|card| card.request_id.clone()
                    children=move |card| view! { <KanbanCard card=card /> }
                />
            </div>
        </div>
    }
}
