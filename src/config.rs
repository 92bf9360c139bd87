//! Board Configuration
//!
//! Defaults match the backend routes; the board root element may override
//! them through `data-*` attributes.

use std::str::FromStr;

pub const DEFAULT_UPDATE_ENDPOINT: &str = "/requests/update_status";
/// Status that marks the equipment as scrapped
pub const DEFAULT_TERMINAL_STATUS: &str = "Scrap";
pub const RELOAD_DELAY_MS: u32 = 2000;
pub const TOAST_DISPLAY_MS: u32 = 3000;
pub const TOAST_EXIT_MS: u32 = 300;
pub const DROP_ANIMATION_MS: u32 = 300;

/// Which drop behavior the board uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropPolicy {
    /// Skip drops onto the card's own column; otherwise update the backend and move.
    #[default]
    Guarded,
    /// Always move and re-animate, without a backend update.
    Reanimate,
}

impl FromStr for DropPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guarded" => Ok(Self::Guarded),
            "reanimate" => Ok(Self::Reanimate),
            other => Err(format!("unknown drop policy '{}'", other)),
        }
    }
}

/// What to do after a failed status update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureRecovery {
    /// Reload the whole page after `reload_delay_ms`.
    #[default]
    ReloadPage,
    /// Put the card back into its source column.
    RollbackCard,
}

impl FromStr for FailureRecovery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reload" => Ok(Self::ReloadPage),
            "rollback" => Ok(Self::RollbackCard),
            other => Err(format!("unknown failure recovery '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub update_endpoint: String,
    pub terminal_status: String,
    pub reload_delay_ms: u32,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,
    pub drop_animation_ms: u32,
    pub drop_policy: DropPolicy,
    pub recovery: FailureRecovery,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            update_endpoint: DEFAULT_UPDATE_ENDPOINT.to_string(),
            terminal_status: DEFAULT_TERMINAL_STATUS.to_string(),
            reload_delay_ms: RELOAD_DELAY_MS,
            toast_display_ms: TOAST_DISPLAY_MS,
            toast_exit_ms: TOAST_EXIT_MS,
            drop_animation_ms: DROP_ANIMATION_MS,
            drop_policy: DropPolicy::default(),
            recovery: FailureRecovery::default(),
        }
    }
}

impl BoardConfig {
    /// Apply overrides from the board root's attributes.
    /// `attr` returns the value of a `data-*` attribute if present.
    /// Returns the config and a warning for every rejected value.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(endpoint) = attr("data-update-endpoint").filter(|v| !v.trim().is_empty()) {
            config.update_endpoint = endpoint.trim().to_string();
        }
        if let Some(status) = attr("data-terminal-status").filter(|v| !v.trim().is_empty()) {
            config.terminal_status = status.trim().to_string();
        }
        if let Some(raw) = attr("data-drop-policy") {
            match raw.parse() {
                Ok(policy) => config.drop_policy = policy,
                Err(e) => warnings.push(e),
            }
        }
        if let Some(raw) = attr("data-failure-recovery") {
            match raw.parse() {
                Ok(recovery) => config.recovery = recovery,
                Err(e) => warnings.push(e),
            }
        }

        (config, warnings)
    }

    pub fn is_terminal(&self, status: &str) -> bool {
        self.terminal_status == status
    }
}
