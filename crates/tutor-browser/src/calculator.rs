//! Calculator widgets.
//!
//! A `.calculator` declares `data-calculator="roi|sharpe|compound|var"` or
//! `data-function="<registered name>"`. Named `input`/`select` elements feed
//! the formula; results land in `.calculator-result` and
//! `.calculator-interpretation`.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use tutor_core::color::{rgba_u32_to_css, sign_color};
use tutor_core::{CalcResult, Calculator, Inputs, PULSE_MS, parse_input};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, KeyboardEvent};

use crate::dom;
use crate::error::DomError;
use crate::page::Page;

const BOUND_ATTR: &str = "data-calculator-bound";

/// Wire up every calculator in the document.
///
/// Returns the number of calculators bound.
pub fn init_calculators(page: &Page) -> Result<usize, DomError> {
    let document = dom::document()?;
    let mut bound = 0;

    for widget in dom::query_document(&document, ".calculator") {
        if widget.has_attribute(BOUND_ATTR) {
            continue;
        }
        widget.set_attribute(BOUND_ATTR, "true")?;

        {
            let page = page.clone();
            let target = widget.clone();
            EventListener::new(&widget, "input", move |_| recalculate(&page, &target)).forget();
        }
        {
            let page = page.clone();
            let target = widget.clone();
            EventListener::new(&widget, "keyup", move |event| {
                let is_enter = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|e| e.key() == "Enter");
                if is_enter {
                    recalculate(&page, &target);
                }
            })
            .forget();
        }
        for button in dom::query_all(&widget, ".calculator-button") {
            let page = page.clone();
            let target = widget.clone();
            EventListener::new(&button, "click", move |_| recalculate(&page, &target)).forget();
        }

        bound += 1;
    }

    Ok(bound)
}

/// Recompute and render one widget. Unknown calculators are a silent no-op.
pub fn recalculate(page: &Page, widget: &Element) {
    let Some(calculator) = Calculator::from_attributes(
        widget.get_attribute("data-calculator").as_deref(),
        widget.get_attribute("data-function").as_deref(),
    ) else {
        return;
    };

    let inputs = collect_inputs(widget);
    // Snapshot so script formulas may register others while running.
    let registry = page.formulas().borrow().clone();
    let Some(result) = calculator.evaluate(&inputs, &registry) else {
        tracing::debug!(?calculator, "calculator produced no result");
        return;
    };

    render_result(widget, &result);
}

/// Read every named input under `widget`. Unparsable values read as zero.
pub fn collect_inputs(widget: &Element) -> Inputs {
    let mut inputs = Inputs::new();
    for element in dom::query_all(widget, "input[name], select[name]") {
        let (name, raw) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            (input.name(), input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            (select.name(), select.value())
        } else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        inputs.insert(name, parse_input(&raw));
    }
    inputs
}

/// Project a result into the widget's output elements.
pub fn render_result(widget: &Element, result: &CalcResult) {
    let Some(output) = dom::query(widget, ".calculator-result") else {
        return;
    };
    output.set_text_content(Some(&result.display));

    if let Some(positive) = result.positive {
        let css = rgba_u32_to_css(sign_color(positive));
        dom::set_styles(&output, &[("color", css.as_str())]);
        let class_list = output.class_list();
        let (add, remove) = if positive {
            ("positive", "negative")
        } else {
            ("negative", "positive")
        };
        let _ = class_list.remove_1(remove);
        let _ = class_list.add_1(add);
    }

    if let Some(interpretation) = &result.interpretation {
        if let Some(target) = dom::query(widget, ".calculator-interpretation") {
            target.set_text_content(Some(interpretation));
        }
    }

    let container = dom::closest(&output, ".calculator-output").unwrap_or(output);
    let _ = container.class_list().add_1("updated");
    Timeout::new(PULSE_MS, move || {
        let _ = container.class_list().remove_1("updated");
    })
    .forget();
}
