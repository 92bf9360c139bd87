//! Drop Handling
//!
//! Plans a drop, fires the status update, moves the card, and recovers
//! when the backend refuses the change.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{drop_steps, plan_drop, DropStep};
use crate::commands;
use crate::context::BoardContext;
use crate::models::StatusUpdate;
use crate::outcome::{outcome_for, recovery_action, RecoveryAction};
use crate::store::{store_card_status, store_cards_untracked, store_move_card};

/// Handle a card dropped onto the column with status `target`.
///
/// The move is optimistic: the request goes out first, the card moves
/// right away, and the answer is handled whenever it arrives.
pub fn handle_drop(ctx: BoardContext, request_id: String, target: String) {
    let policy = ctx.config.with_value(|c| c.drop_policy);
    let cards = store_cards_untracked(&ctx.store);
    let steps = drop_steps(&plan_drop(policy, &cards, &request_id, &target));

    if steps.is_empty() {
        web_sys::console::log_1(&format!("[BOARD] Drop of {} on {} ignored", request_id, target).into());
        return;
    }

    for step in steps {
        match step {
            DropStep::SendStatus { request_id, from, to } => send_status_update(ctx, request_id, from, to),
            DropStep::Move { request_id, to } => {
                web_sys::console::log_1(&format!("[BOARD] Move {} -> {}", request_id, to).into());
                store_move_card(&ctx.store, &request_id, &to);
            }
            DropStep::Animate { request_id } => play_drop_animation(ctx, request_id),
        }
    }
}

fn send_status_update(ctx: BoardContext, request_id: String, from: String, to: String) {
    let (endpoint, terminal_status) = ctx
        .config
        .with_value(|c| (c.update_endpoint.clone(), c.terminal_status.clone()));
    let update = StatusUpdate { request_id, status: to };
    let pending = commands::update_request_status(&endpoint, &update);

    spawn_local(async move {
        let result = pending.await;
        match &result {
            Ok(()) => web_sys::console::log_1(&"[API] Status updated successfully".into()),
            Err(e) => web_sys::console::error_1(&format!("[API] Error updating status: {}", e).into()),
        }

        let outcome = outcome_for(&update.status, &terminal_status, &result);
        for (kind, message) in outcome.toasts {
            ctx.notifier.notify(kind, message);
        }
        if outcome.recover {
            recover(ctx, &update.request_id, &from, &update.status);
        }
    });
}

fn recover(ctx: BoardContext, request_id: &str, from: &str, to: &str) {
    let (recovery, delay_ms) = ctx.config.with_value(|c| (c.recovery, c.reload_delay_ms));
    let current = store_card_status(&ctx.store, request_id);

    match recovery_action(recovery, delay_ms, request_id, current.as_deref(), from, to) {
        RecoveryAction::ReloadAfter(delay_ms) => schedule_reload(delay_ms),
        RecoveryAction::Rollback { request_id, to } => {
            web_sys::console::log_1(&format!("[BOARD] Rolling back {} to {}", request_id, to).into());
            store_move_card(&ctx.store, &request_id, &to);
        }
        RecoveryAction::Skip => {
            web_sys::console::warn_1(&format!("[BOARD] {} moved again, rollback skipped", request_id).into());
        }
    }
}

/// Reload the page after `delay_ms` to resync with the server. Not cancellable.
pub fn schedule_reload(delay_ms: u32) {
    web_sys::console::log_1(&format!("[BOARD] Reloading in {} ms", delay_ms).into());
    Timeout::new(delay_ms, || {
        let Some(win) = web_sys::window() else { return };
        if let Err(e) = win.location().reload() {
            web_sys::console::error_1(&e);
        }
    })
    .forget();
}

fn play_drop_animation(ctx: BoardContext, request_id: String) {
    let duration = ctx.config.with_value(|c| c.drop_animation_ms);
    ctx.set_animating(Some(request_id.clone()));
    spawn_local(async move {
        TimeoutFuture::new(duration).await;
        // A later drop may have started its own animation
        if ctx.animating.get_untracked().as_deref() == Some(request_id.as_str()) {
            ctx.set_animating(None);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{badge_counts, card_status, move_card};
    use crate::config::{BoardConfig, FailureRecovery};
    use crate::error::UpdateError;
    use crate::models::{Card, Column};
    use crate::notifier::ToastKind;

    fn make_board() -> (Vec<Column>, Vec<Card>) {
        let columns = ["Open", "In Progress", "Scrap"]
            .iter()
            .map(|s| Column::new(s, s))
            .collect();
        let cards = vec![
            Card::new("req-41", "Open", "<b>Pump</b>"),
            Card::new("req-42", "Open", "<b>Press</b>"),
            Card::new("req-43", "Scrap", "<b>Lathe</b>"),
        ];
        (columns, cards)
    }

    /// Runs the steps the way `handle_drop` does, with the request recorded
    /// instead of sent. Returns the pending update and the step order.
    fn drop_card(config: &BoardConfig, cards: &mut Vec<Card>, id: &str, target: &str) -> (Option<(String, String)>, Vec<&'static str>) {
        let steps = drop_steps(&plan_drop(config.drop_policy, cards, id, target));
        let mut pending = None;
        let mut order = Vec::new();
        for step in steps {
            match step {
                DropStep::SendStatus { from, to, .. } => {
                    // The card has not moved yet when the request goes out
                    assert_eq!(card_status(cards, id), Some(from.as_str()));
                    pending = Some((from, to));
                    order.push("send");
                }
                DropStep::Move { request_id, to } => {
                    move_card(cards, &request_id, &to);
                    order.push("move");
                }
                DropStep::Animate { .. } => order.push("animate"),
            }
        }
        (pending, order)
    }

    #[test]
    fn test_drop_into_scrap_succeeds() {
        let config = BoardConfig::default();
        let (columns, mut cards) = make_board();
        let before = badge_counts(&columns, &cards);

        let (pending, order) = drop_card(&config, &mut cards, "req-42", "Scrap");
        assert_eq!(order, vec!["send", "move"]);
        let (from, to) = pending.expect("status update sent");

        let after = badge_counts(&columns, &cards);
        assert_eq!(after["Open"], before["Open"] - 1);
        assert_eq!(after["Scrap"], before["Scrap"] + 1);
        assert_eq!(card_status(&cards, "req-42"), Some("Scrap"));

        let outcome = outcome_for(&to, &config.terminal_status, &Ok(()));
        assert!(!outcome.recover);
        assert_eq!(outcome.toasts.len(), 2);
        assert_eq!(outcome.toasts[0], (ToastKind::Success, "Request moved to Scrap".to_string()));
        assert_eq!(outcome.toasts[1].0, ToastKind::Warning);
        assert!(outcome.toasts[1].1.contains("scrapped"));
        assert_eq!(from, "Open");
    }

    #[test]
    fn test_locked_request_reloads_after_move() {
        let config = BoardConfig::default();
        let (_, mut cards) = make_board();

        let (pending, _) = drop_card(&config, &mut cards, "req-42", "Scrap");
        let (from, to) = pending.expect("status update sent");
        // Moved before the answer arrives
        assert_eq!(card_status(&cards, "req-42"), Some("Scrap"));

        let result = Err(UpdateError::Rejected("locked".to_string()));
        let outcome = outcome_for(&to, &config.terminal_status, &result);
        assert!(outcome.recover);
        assert_eq!(outcome.toasts.len(), 1);
        assert_eq!(outcome.toasts[0].0, ToastKind::Error);
        assert!(outcome.toasts[0].1.contains("locked"));

        let action = recovery_action(
            config.recovery,
            config.reload_delay_ms,
            "req-42",
            card_status(&cards, "req-42"),
            &from,
            &to,
        );
        assert_eq!(action, RecoveryAction::ReloadAfter(2000));
    }

    #[test]
    fn test_rollback_restores_source_column() {
        let config = BoardConfig { recovery: FailureRecovery::RollbackCard, ..BoardConfig::default() };
        let (columns, mut cards) = make_board();
        let before = badge_counts(&columns, &cards);

        let (pending, _) = drop_card(&config, &mut cards, "req-42", "Scrap");
        let (from, to) = pending.expect("status update sent");

        let action = recovery_action(
            config.recovery,
            config.reload_delay_ms,
            "req-42",
            card_status(&cards, "req-42"),
            &from,
            &to,
        );
        let RecoveryAction::Rollback { request_id, to: back } = action else {
            panic!("expected rollback, got {:?}", action);
        };
        move_card(&mut cards, &request_id, &back);

        assert_eq!(card_status(&cards, "req-42"), Some("Open"));
        assert_eq!(badge_counts(&columns, &cards), before);
    }

    #[test]
    fn test_same_column_drop_sends_nothing() {
        let config = BoardConfig::default();
        let (_, mut cards) = make_board();
        let original = cards.clone();

        let (pending, order) = drop_card(&config, &mut cards, "req-41", "Open");
        assert_eq!(pending, None);
        assert!(order.is_empty());
        assert_eq!(cards, original);
    }
}
