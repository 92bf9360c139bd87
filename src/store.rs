//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::models::{Card, Column};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Columns in page order
    pub columns: Vec<Column>,
    /// All cards in display order
    pub cards: Vec<Card>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_columns(store: &BoardStore) -> Vec<Column> {
    store.columns().get()
}

/// Cards of one column (tracked)
pub fn store_cards_in(store: &BoardStore, status: &str) -> Vec<Card> {
    board::cards_in(&store.cards().read(), status)
}

/// Current column of a card (untracked)
pub fn store_card_status(store: &BoardStore, request_id: &str) -> Option<String> {
    board::card_status(&store.cards().read_untracked(), request_id).map(str::to_string)
}

/// Badge counts keyed by column status (tracked)
pub fn store_badge_counts(store: &BoardStore) -> HashMap<String, usize> {
    board::badge_counts(&store.columns().read(), &store.cards().read())
}

/// Move a card to the end of a column; returns its previous status
pub fn store_move_card(store: &BoardStore, request_id: &str, to: &str) -> Option<String> {
    board::move_card(&mut store.cards().write(), request_id, to)
}

/// Snapshot of the cards for planning a drop (untracked)
pub fn store_cards_untracked(store: &BoardStore) -> Vec<Card> {
    store.cards().get_untracked()
}
