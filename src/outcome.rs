//! Status Update Outcome
//!
//! Turns the result of a status update into the toasts to show and
//! whether the board has to recover.

use crate::config::FailureRecovery;
use crate::error::UpdateError;
use crate::notifier::ToastKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// Toasts in the order they are shown
    pub toasts: Vec<(ToastKind, String)>,
    /// The optimistic move must be undone (reload or rollback)
    pub recover: bool,
}

pub fn outcome_for(status: &str, terminal_status: &str, result: &Result<(), UpdateError>) -> Outcome {
    match result {
        Ok(()) => {
            let mut toasts = vec![(ToastKind::Success, format!("Request moved to {}", status))];
            if status == terminal_status {
                toasts.push((ToastKind::Warning, "Equipment has been marked as scrapped".to_string()));
            }
            Outcome { toasts, recover: false }
        }
        Err(UpdateError::Rejected(message)) => Outcome {
            toasts: vec![(ToastKind::Error, format!("Error updating status: {}", message))],
            recover: true,
        },
        Err(UpdateError::Encode(_)) | Err(UpdateError::Network(_)) | Err(UpdateError::Decode(_)) => Outcome {
            toasts: vec![(ToastKind::Error, "Network error occurred".to_string())],
            recover: true,
        },
    }
}

/// How the board undoes a refused move
#[derive(Clone, Debug, PartialEq)]
pub enum RecoveryAction {
    ReloadAfter(u32),
    /// Move the card back into `to`
    Rollback { request_id: String, to: String },
    /// The card left the target column since the drop; leave it alone
    Skip,
}

/// `current` is the card's column when the failure is observed.
pub fn recovery_action(
    recovery: FailureRecovery,
    reload_delay_ms: u32,
    request_id: &str,
    current: Option<&str>,
    from: &str,
    to: &str,
) -> RecoveryAction {
    match recovery {
        FailureRecovery::ReloadPage => RecoveryAction::ReloadAfter(reload_delay_ms),
        FailureRecovery::RollbackCard if current == Some(to) => RecoveryAction::Rollback {
            request_id: request_id.to_string(),
            to: from.to_string(),
        },
        FailureRecovery::RollbackCard => RecoveryAction::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_into_terminal_status() {
        let outcome = outcome_for("Scrap", "Scrap", &Ok(()));
        assert!(!outcome.recover);
        assert_eq!(
            outcome.toasts,
            vec![
                (ToastKind::Success, "Request moved to Scrap".to_string()),
                (ToastKind::Warning, "Equipment has been marked as scrapped".to_string()),
            ]
        );
    }

    #[test]
    fn test_success_into_regular_status() {
        let outcome = outcome_for("In Progress", "Scrap", &Ok(()));
        assert!(!outcome.recover);
        assert_eq!(outcome.toasts, vec![(ToastKind::Success, "Request moved to In Progress".to_string())]);
    }

    #[test]
    fn test_rejected_shows_backend_message() {
        let outcome = outcome_for("Scrap", "Scrap", &Err(UpdateError::Rejected("locked".to_string())));
        assert!(outcome.recover);
        assert_eq!(outcome.toasts.len(), 1);
        assert_eq!(outcome.toasts[0].0, ToastKind::Error);
        assert!(outcome.toasts[0].1.contains("locked"));
    }

    #[test]
    fn test_transport_failures_are_generic() {
        for err in [
            UpdateError::Network("TypeError: Failed to fetch".to_string()),
            UpdateError::Decode("unexpected token <".to_string()),
            UpdateError::Encode("key must be a string".to_string()),
        ] {
            let outcome = outcome_for("Open", "Scrap", &Err(err));
            assert!(outcome.recover);
            assert_eq!(outcome.toasts, vec![(ToastKind::Error, "Network error occurred".to_string())]);
        }
    }

    #[test]
    fn test_reload_ignores_card_position() {
        for current in [Some("Scrap"), Some("Open"), None] {
            assert_eq!(
                recovery_action(FailureRecovery::ReloadPage, 2000, "req-42", current, "Open", "Scrap"),
                RecoveryAction::ReloadAfter(2000)
            );
        }
    }

    #[test]
    fn test_rollback_only_from_target_column() {
        assert_eq!(
            recovery_action(FailureRecovery::RollbackCard, 2000, "req-42", Some("Scrap"), "Open", "Scrap"),
            RecoveryAction::Rollback { request_id: "req-42".to_string(), to: "Open".to_string() }
        );
        // Dragged elsewhere before the answer arrived
        assert_eq!(
            recovery_action(FailureRecovery::RollbackCard, 2000, "req-42", Some("Repaired"), "Open", "Scrap"),
            RecoveryAction::Skip
        );
        assert_eq!(
            recovery_action(FailureRecovery::RollbackCard, 2000, "req-42", None, "Open", "Scrap"),
            RecoveryAction::Skip
        );
    }
}
