//! Error type for DOM operations.

use wasm_bindgen::{JsCast, JsValue};

/// A failed DOM or browser API call.
///
/// Handlers log these and carry on; they never reach the page.
#[derive(thiserror::Error, Debug, Clone)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("clipboard unavailable")]
    ClipboardUnavailable,

    #[error("legacy copy command was rejected")]
    CopyRejected,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js(message)
    }
}
