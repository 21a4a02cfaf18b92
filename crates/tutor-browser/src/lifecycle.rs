//! Document-ready hook.

use gloo_events::EventListener;

use crate::dom;

/// Run `f` once the document structure is available.
///
/// Runs immediately unless the document is still loading, in which case it
/// waits for `DOMContentLoaded`.
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("no document to initialize: {}", e);
            return;
        }
    };

    if document.ready_state() != "loading" {
        f();
        return;
    }

    EventListener::once(&document, "DOMContentLoaded", move |_| f()).forget();
}
