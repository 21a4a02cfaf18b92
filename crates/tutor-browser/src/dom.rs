//! Small DOM helpers shared by the controllers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::DomError;

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::MissingElement("body"))
}

/// Collect every element under `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector))
}

/// Collect every element in the document matching `selector`.
pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    collect(document.query_selector_all(selector))
}

fn collect(list: Result<web_sys::NodeList, wasm_bindgen::JsValue>) -> Vec<Element> {
    let Ok(node_list) = list else {
        return Vec::new();
    };
    (0..node_list.length())
        .filter_map(|i| node_list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element under `root` matching `selector`, swallowing selector errors.
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Nearest ancestor-or-self matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Attribute value with surrounding whitespace removed; blank counts as absent.
pub fn attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Set inline style properties. Errors on detached nodes are ignored.
pub fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

/// Create an element with a class name.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, DomError> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js(format!("<{tag}> is not an HtmlElement")))
}
