//! Copy buttons for code blocks.
//!
//! Each `pre` / `.code-block` gets a `.code-header` sibling holding a "Copy"
//! button. Activation copies the block's code text and shows transient
//! feedback keyed by the button's id.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use tutor_core::color::{self, rgba_u32_to_css};
use tutor_core::{COPIED_LABEL, COPY_FEEDBACK_MS, COPY_LABEL, FAILED_LABEL, copy_text};
use web_sys::{Element, HtmlElement};

use crate::clipboard;
use crate::dom;
use crate::error::DomError;
use crate::page::Page;

/// Selector for containers that get a copy button.
pub const CODE_BLOCK_SELECTOR: &str = "pre, .code-block";

/// Attach copy buttons to every code block that lacks one.
///
/// Returns the number of buttons added.
pub fn init_copy_buttons(page: &Page) -> Result<usize, DomError> {
    let document = dom::document()?;
    let mut added = 0;

    for container in dom::query_document(&document, CODE_BLOCK_SELECTOR) {
        // A `pre` inside a `.code-block` is handled by its wrapper.
        if container.tag_name().eq_ignore_ascii_case("pre")
            && container
                .parent_element()
                .and_then(|p| dom::closest(&p, ".code-block"))
                .is_some()
        {
            continue;
        }

        let header = match existing_header(&container) {
            Some(header) => header,
            None => {
                let header = dom::create(&document, "div", "code-header")?;
                container.before_with_node_1(&header)?;
                header.into()
            }
        };
        if dom::query(&header, ".copy-button").is_some() {
            continue;
        }

        let id = page.state().borrow_mut().allocate_id("copy-btn");
        let button = dom::create(&document, "button", "copy-button")?;
        button.set_id(&id);
        button.set_attribute("type", "button")?;
        button.set_attribute("aria-label", "Copy code to clipboard")?;
        button.set_text_content(Some(COPY_LABEL));
        header.append_child(&button)?;

        let page = page.clone();
        let target = button.clone();
        EventListener::new(&button, "click", move |_| {
            on_copy_click(&page, &container, &target);
        })
        .forget();

        added += 1;
    }

    Ok(added)
}

fn existing_header(container: &Element) -> Option<Element> {
    container
        .previous_element_sibling()
        .filter(|e| e.class_list().contains("code-header"))
}

/// Text a copy button puts on the clipboard: the nested `code` element's
/// text, else the whole container's, trimmed.
pub fn block_text(container: &Element) -> String {
    let code = dom::query(container, "code").and_then(|c| c.text_content());
    copy_text(
        code.as_deref(),
        &container.text_content().unwrap_or_default(),
    )
}

fn on_copy_click(page: &Page, container: &Element, button: &HtmlElement) {
    let id = button.id();
    if page.state().borrow().is_copying(&id) {
        return;
    }

    let text = block_text(container);

    let page = page.clone();
    let button = button.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match clipboard::write_text(&text).await {
            Ok(()) => show_feedback(&page, &button, &id, CopyFeedback::COPIED),
            Err(e) => {
                tracing::error!("Failed to copy code block: {}", e);
                show_feedback(&page, &button, &id, CopyFeedback::FAILED);
            }
        }
    });
}

/// Transient button treatment after a copy attempt.
struct CopyFeedback {
    label: &'static str,
    class: &'static str,
    color: u32,
}

impl CopyFeedback {
    const COPIED: CopyFeedback = CopyFeedback {
        label: COPIED_LABEL,
        class: "copied",
        color: color::POSITIVE,
    };
    const FAILED: CopyFeedback = CopyFeedback {
        label: FAILED_LABEL,
        class: "failed",
        color: color::NEGATIVE,
    };
}

/// Swap the button label and color, reverting after `COPY_FEEDBACK_MS`.
///
/// A no-op while feedback for the same id is still showing.
fn show_feedback(page: &Page, button: &HtmlElement, id: &str, feedback: CopyFeedback) {
    if !page.state().borrow_mut().begin_copy(id) {
        return;
    }

    let style = button.style();
    let original_background = style.get_property_value("background-color").unwrap_or_default();
    let _ = style.set_property("background-color", &rgba_u32_to_css(feedback.color));
    button.set_text_content(Some(feedback.label));
    let class = feedback.class;
    let _ = button.class_list().add_1(class);

    let page = page.clone();
    let button = button.clone();
    let id = id.to_string();
    Timeout::new(COPY_FEEDBACK_MS, move || {
        button.set_text_content(Some(COPY_LABEL));
        let _ = button.class_list().remove_1(class);
        let _ = button
            .style()
            .set_property("background-color", &original_background);
        page.state().borrow_mut().finish_copy(&id);
    })
    .forget();
}
