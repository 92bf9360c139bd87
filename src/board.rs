//! Board Operations
//!
//! Pure functions over the board's cards and columns. A card's column is
//! its `status`, so moving a card is a status change plus re-append.

use std::collections::HashMap;

use crate::config::DropPolicy;
use crate::models::{Card, Column};

/// What a drop should do
#[derive(Clone, Debug, PartialEq)]
pub enum DropPlan {
    /// Nothing to do (unknown card, or same column under the guarded policy)
    Ignore,
    Move {
        request_id: String,
        from: String,
        to: String,
        /// Send the new status to the backend before moving
        notify_backend: bool,
        /// Flash the `drop-animate` class on the moved card
        animate: bool,
    },
}

/// One effect of an accepted drop, executed in list order
#[derive(Clone, Debug, PartialEq)]
pub enum DropStep {
    /// Issue the status update; its answer is not awaited
    SendStatus { request_id: String, from: String, to: String },
    /// Re-append the card to a column
    Move { request_id: String, to: String },
    /// Flash `drop-animate` on the card
    Animate { request_id: String },
}

/// Effects of a planned drop. The request always precedes the move.
pub fn drop_steps(plan: &DropPlan) -> Vec<DropStep> {
    let DropPlan::Move { request_id, from, to, notify_backend, animate } = plan else {
        return Vec::new();
    };

    let mut steps = Vec::new();
    if *notify_backend {
        steps.push(DropStep::SendStatus {
            request_id: request_id.clone(),
            from: from.clone(),
            to: to.clone(),
        });
    }
    steps.push(DropStep::Move { request_id: request_id.clone(), to: to.clone() });
    if *animate {
        steps.push(DropStep::Animate { request_id: request_id.clone() });
    }
    steps
}

/// Cards of one column, in display order
pub fn cards_in(cards: &[Card], status: &str) -> Vec<Card> {
    cards.iter().filter(|c| c.status == status).cloned().collect()
}

pub fn card_status<'a>(cards: &'a [Card], request_id: &str) -> Option<&'a str> {
    cards
        .iter()
        .find(|c| c.request_id == request_id)
        .map(|c| c.status.as_str())
}

/// Move a card to the end of `to`. Returns the status it had before.
pub fn move_card(cards: &mut Vec<Card>, request_id: &str, to: &str) -> Option<String> {
    let index = cards.iter().position(|c| c.request_id == request_id)?;
    let mut card = cards.remove(index);
    let from = std::mem::replace(&mut card.status, to.to_string());
    cards.push(card);
    Some(from)
}

/// Count cards per column, keyed by column status.
/// Every column gets an entry, empty ones count 0.
pub fn badge_counts(columns: &[Column], cards: &[Card]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = columns
        .iter()
        .map(|col| (col.status.clone(), 0))
        .collect();
    for card in cards {
        if let Some(count) = counts.get_mut(&card.status) {
            *count += 1;
        }
    }
    counts
}

/// Decide what dropping `request_id` onto column `target` does.
pub fn plan_drop(policy: DropPolicy, cards: &[Card], request_id: &str, target: &str) -> DropPlan {
    let Some(from) = card_status(cards, request_id) else {
        return DropPlan::Ignore;
    };

    match policy {
        DropPolicy::Guarded if from == target => DropPlan::Ignore,
        DropPolicy::Guarded => DropPlan::Move {
            request_id: request_id.to_string(),
            from: from.to_string(),
            to: target.to_string(),
            notify_backend: true,
            animate: false,
        },
        DropPolicy::Reanimate => DropPlan::Move {
            request_id: request_id.to_string(),
            from: from.to_string(),
            to: target.to_string(),
            notify_backend: false,
            animate: true,
        },
    }
}
