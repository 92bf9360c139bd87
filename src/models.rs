//! Board Models
//!
//! Cards and columns read from the page, and the status-update wire types.

use serde::{Deserialize, Serialize};

/// One maintenance request on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub request_id: String,
    /// Status label of the owning column
    pub status: String,
    /// Server-rendered inner markup, kept verbatim
    pub body_html: String,
    /// Classes of the card element besides `kanban-card` (priority, overdue, ...)
    pub classes: Vec<String>,
    /// Other attributes of the card element, re-applied on render
    pub attributes: Vec<(String, String)>,
}

impl Card {
    pub fn new(request_id: &str, status: &str, body_html: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            status: status.to_string(),
            body_html: body_html.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
        }
    }
}

/// A status bucket
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: String,
    pub title: String,
    /// Classes of the column element besides `kanban-column`
    pub classes: Vec<String>,
    /// Server-rendered markup around the card container (header, badge, ...)
    pub header_html: Option<String>,
    /// Classes of the `.kanban-cards` container besides `kanban-cards`
    pub cards_classes: Vec<String>,
}

impl Column {
    pub fn new(status: &str, title: &str) -> Self {
        Self {
            status: status.to_string(),
            title: title.to_string(),
            classes: Vec::new(),
            header_html: None,
            cards_classes: Vec::new(),
        }
    }
}

/// Body of `POST /requests/update_status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub request_id: String,
    pub status: String,
}

/// Backend answer to a status update
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
