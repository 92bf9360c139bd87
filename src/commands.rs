//! Backend Commands
//!
//! Remote status updater: `POST /requests/update_status`.

use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::UpdateError;
use crate::models::{StatusUpdate, StatusUpdateResponse};

/// Send a status update.
///
/// The request is issued before this returns; the future only waits for
/// and interprets the answer.
pub fn update_request_status(
    endpoint: &str,
    update: &StatusUpdate,
) -> impl Future<Output = Result<(), UpdateError>> + 'static {
    web_sys::console::log_1(&format!("[API] POST {} request={} status={}", endpoint, update.request_id, update.status).into());
    let sent = start_fetch(endpoint, update);

    async move {
        let promise = sent?;
        let resp_value = JsFuture::from(promise).await.map_err(UpdateError::network)?;
        let resp: Response = resp_value.dyn_into().map_err(UpdateError::network)?;

        // HTTP status is not checked: error answers still carry {success, message}
        let json = JsFuture::from(resp.json().map_err(UpdateError::decode_js)?)
            .await
            .map_err(UpdateError::decode_js)?;
        let answer: StatusUpdateResponse = serde_wasm_bindgen::from_value(json).map_err(UpdateError::decode)?;

        interpret_response(answer)
    }
}

fn start_fetch(endpoint: &str, update: &StatusUpdate) -> Result<js_sys::Promise, UpdateError> {
    let window = web_sys::window().ok_or_else(|| UpdateError::Network("no window".to_string()))?;
    let body = serde_json::to_string(update).map_err(UpdateError::encode)?;

    let headers = Headers::new().map_err(UpdateError::network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(UpdateError::network)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &init).map_err(UpdateError::network)?;
    Ok(window.fetch_with_request(&request))
}

/// `success: false` becomes `UpdateError::Rejected` with the backend's message
pub fn interpret_response(answer: StatusUpdateResponse) -> Result<(), UpdateError> {
    if answer.success {
        Ok(())
    } else {
        Err(UpdateError::Rejected(
            answer.message.unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}
