//! Transient toast notifications.

use gloo_timers::callback::Timeout;
use tutor_core::color::rgba_u32_to_css;
use tutor_core::{TOAST_FADE_MS, TOAST_MS, ToastKind};

use crate::dom;
use crate::error::DomError;

/// Show `message` in the corner of the page, then fade it out.
pub fn show_toast(message: &str, kind: ToastKind) -> Result<(), DomError> {
    let document = dom::document()?;
    let toast = dom::create(&document, "div", &format!("toast {}", kind.class_name()))?;
    toast.set_attribute("role", "status")?;
    toast.set_text_content(Some(message));
    let background = rgba_u32_to_css(kind.color());
    dom::set_styles(&toast, &[("background-color", background.as_str())]);
    dom::body()?.append_child(&toast)?;

    Timeout::new(TOAST_MS, move || {
        let _ = toast.class_list().add_1("toast-hide");
        Timeout::new(TOAST_FADE_MS, move || toast.remove()).forget();
    })
    .forget();
    Ok(())
}
