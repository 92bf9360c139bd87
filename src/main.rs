#![allow(warnings)]
//! Kanban Board Entry Point
//!
//! Takes over the server-rendered board: reads its columns and cards,
//! then mounts the interactive board in their place.

mod models;
mod error;
mod config;
mod board;
mod store;
mod markup;
mod commands;
mod outcome;
mod notifier;
mod context;
mod controller;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        web_sys::console::error_1(&"[BOARD] No document".into());
        return;
    };
    let Some(root) = markup::find_board_root(&doc) else {
        web_sys::console::log_1(&"[BOARD] No kanban board on this page".into());
        return;
    };

    let (config, warnings) = BoardConfig::from_attributes(|name| root.get_attribute(name));
    let (board, skipped) = markup::read_board(&root);
    for warning in warnings.iter().chain(skipped.iter()) {
        web_sys::console::warn_1(&format!("[BOARD] {}", warning).into());
    }
    web_sys::console::log_1(
        &format!("[BOARD] Loaded {} columns, {} cards", board.columns.len(), board.cards.len()).into(),
    );

    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        web_sys::console::error_1(&"[BOARD] Board root is not an HTML element".into());
        return;
    };
    root.set_inner_html("");
    leptos::mount::mount_to(root, move || view! { <App board=board config=config /> }).forget();
}
