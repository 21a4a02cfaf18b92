//! Copy-button labels and text extraction.

/// How long "Copied!" / "Failed" stays on a button, in milliseconds.
pub const COPY_FEEDBACK_MS: u32 = 2000;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const FAILED_LABEL: &str = "Failed";

/// Text to put on the clipboard for a code block.
///
/// Prefers the nested code element's text, falling back to the container's.
pub fn copy_text(code_text: Option<&str>, container_text: &str) -> String {
    code_text.unwrap_or(container_text).trim().to_string()
}
