//! Global style rules for injected widget chrome.

use web_sys::Document;

use crate::dom;
use crate::error::DomError;

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "tutor-styles";

const STYLES: &str = r#"
.code-header {
    display: flex;
    justify-content: flex-end;
    margin-bottom: -0.5rem;
}
.copy-button {
    background: #3b82f6;
    color: #fff;
    border: none;
    border-radius: 4px;
    padding: 0.25rem 0.75rem;
    font-size: 0.8rem;
    cursor: pointer;
    transition: background-color 0.2s ease;
}
.copy-button.copied {
    background: #10b981;
}
.copy-button.failed {
    background: #ef4444;
}
.quiz-option.disabled {
    cursor: default;
}
.quiz-feedback {
    margin-top: 1rem;
    padding: 0.75rem 1rem;
    border-radius: 6px;
}
.quiz-feedback.correct {
    background: rgba(16, 185, 129, 0.1);
    border-left: 4px solid #10b981;
}
.quiz-feedback.incorrect {
    background: rgba(239, 68, 68, 0.1);
    border-left: 4px solid #ef4444;
}
.quiz-celebration {
    margin-top: 1rem;
    padding: 1rem;
    text-align: center;
    border-radius: 8px;
    background: linear-gradient(135deg, rgba(16, 185, 129, 0.15), rgba(59, 130, 246, 0.15));
}
.calculator-result.updated,
.calculator-output.updated {
    animation: tutor-pulse 0.5s ease;
}
@keyframes tutor-pulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
}
.confetti-particle {
    position: fixed;
    top: -12px;
    z-index: 10000;
    pointer-events: none;
    border-radius: 2px;
    animation-name: tutor-confetti-fall;
    animation-timing-function: linear;
    animation-fill-mode: forwards;
}
@keyframes tutor-confetti-fall {
    to {
        transform: translate(var(--drift, 0px), 100vh) rotate(var(--rotation, 0deg));
        opacity: 0.6;
    }
}
.toast {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    z-index: 10001;
    padding: 0.75rem 1.25rem;
    border-radius: 6px;
    color: #fff;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    transition: opacity 0.3s ease, transform 0.3s ease;
}
.toast.toast-hide {
    opacity: 0;
    transform: translateY(0.5rem);
}
"#;

/// Inject the widget stylesheet once per document.
///
/// Returns false if it was already present.
pub fn inject_styles(document: &Document) -> Result<bool, DomError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let style = dom::create(document, "style", "")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLES));

    match document.head() {
        Some(head) => head.append_child(&style)?,
        None => dom::body()?.append_child(&style)?,
    };
    Ok(true)
}
