//! Kanban Card Component
//!
//! A draggable request card. The server-rendered body, classes and
//! attributes are kept.

use leptos::html::Div;
use leptos::prelude::*;
use kanban_dnd::{is_dragging, make_on_dragend, make_on_dragstart};

use crate::components::class_list;
use crate::context::use_board;
use crate::models::Card;

#[component]
pub fn KanbanCard(card: Card) -> impl IntoView {
    let ctx = use_board();
    let card_ref = NodeRef::<Div>::new();

    let id = card.request_id.clone();
    let on_dragstart = make_on_dragstart(ctx.dnd, id.clone());
    let on_dragend = make_on_dragend(ctx.dnd);

    let class_id = id.clone();
    let classes = card.classes;
    let card_class = move || {
        let dragging = is_dragging(ctx.dnd, &class_id);
        let animating = ctx.animating.get().as_deref() == Some(class_id.as_str());
        class_list("kanban-card", &classes, &[("dragging", dragging), ("drop-animate", animating)])
    };

    // Remaining page attributes (data-priority, title, ...)
    let attributes = card.attributes;
    Effect::new(move |_| {
        let Some(el) = card_ref.get() else { return };
        for (name, value) in &attributes {
            if let Err(e) = el.set_attribute(name, value) {
                web_sys::console::warn_1(&e);
            }
        }
    });

    view! {
        <div
            node_ref=card_ref
            class=card_class
            draggable="true"
            data-request-id=id
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            inner_html=card.body_html
        />
    }
}
