//! Browser clipboard writes.
//!
//! Tries the async Clipboard API first and falls back to the legacy
//! `execCommand("copy")` path through an off-screen textarea.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::dom;
use crate::error::DomError;

/// Put `text` on the system clipboard.
pub async fn write_text(text: &str) -> Result<(), DomError> {
    match write_text_async(text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::debug!("Clipboard API write failed, using fallback: {}", e);
            write_text_fallback(text)
        }
    }
}

/// Write through `navigator.clipboard.writeText`.
pub async fn write_text_async(text: &str) -> Result<(), DomError> {
    let window = dom::window()?;
    let navigator = window.navigator();

    // Insecure contexts and older browsers don't expose the API at all.
    let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !has_clipboard {
        return Err(DomError::ClipboardUnavailable);
    }

    let promise = navigator.clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    tracing::debug!("Wrote {} bytes to clipboard", text.len());
    Ok(())
}

/// Copy via a temporary off-screen textarea and the legacy copy command.
pub fn write_text_fallback(text: &str) -> Result<(), DomError> {
    let document = dom::document()?;
    let body = dom::body()?;

    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| DomError::Js("<textarea> is not an HtmlTextAreaElement".into()))?;
    textarea.set_value(text);
    textarea.set_read_only(true);
    dom::set_styles(
        &textarea,
        &[
            ("position", "fixed"),
            ("left", "-9999px"),
            ("top", "0"),
            ("opacity", "0"),
        ],
    );
    body.append_child(&textarea)?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(DomError::CopyRejected)
        .and_then(|html| html.exec_command("copy").map_err(DomError::from));

    textarea.remove();

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(DomError::CopyRejected),
        Err(e) => Err(e),
    }
}
