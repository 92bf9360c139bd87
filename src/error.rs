//! Status update errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a status update did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpdateError {
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The request body could not be built.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// The request never completed: fetch rejected or a browser API failed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl UpdateError {
    pub fn network(err: JsValue) -> Self {
        Self::Network(js_error_text(&err))
    }

    pub fn encode(err: impl ToString) -> Self {
        Self::Encode(err.to_string())
    }

    pub fn decode(err: impl ToString) -> Self {
        Self::Decode(err.to_string())
    }

    pub fn decode_js(err: JsValue) -> Self {
        Self::Decode(js_error_text(&err))
    }
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
