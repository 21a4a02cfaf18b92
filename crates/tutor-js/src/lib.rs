//! WASM bindings for the course page widgets.
//!
//! Loading the module wires copy buttons, quizzes and calculators once the
//! document is ready. The exports re-run individual controllers for content
//! added later and expose the formulas and formatters to page scripts.

use serde::Serialize;
use tutor_browser::{
    CalcResult, DEFAULT_DEBOUNCE_MS, FormatOptions, Inputs, Locale, Page, ToastKind,
    ValidationOptions, validate_numeric_input,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

thread_local! {
    static PAGE: Page = Page::new();
}

/// Handle to the page state shared by every export.
fn page() -> Page {
    PAGE.with(Page::clone)
}

/// Install the panic hook and logging, then initialize the page.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging();

    tutor_browser::on_ready(|| {
        if let Err(e) = page().init_all() {
            tracing::error!("page initialization failed: {}", e);
        }
    });
}

fn init_logging() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Already set when the module is instantiated twice.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}

// === Controllers ===

/// Add copy buttons to code blocks that lack one. Returns the number added.
#[wasm_bindgen(js_name = initCopyButtons)]
pub fn init_copy_buttons() -> Result<usize, JsError> {
    Ok(tutor_browser::init_copy_buttons(&page())?)
}

/// Wire quizzes not yet bound. Returns the number bound.
#[wasm_bindgen(js_name = initQuizzes)]
pub fn init_quizzes() -> Result<usize, JsError> {
    Ok(tutor_browser::init_quizzes(&page())?)
}

/// Wire calculators not yet bound. Returns the number bound.
#[wasm_bindgen(js_name = initCalculators)]
pub fn init_calculators() -> Result<usize, JsError> {
    Ok(tutor_browser::init_calculators(&page())?)
}

/// Inject styles and run every controller.
#[wasm_bindgen(js_name = initAll)]
pub fn init_all() -> Result<(), JsError> {
    page()
        .init_all()
        .map_err(|e| JsError::new(&format!("Initialization failed: {}", e)))
}

/// Register a custom calculator formula for `data-function="<name>"` widgets.
///
/// `formula` receives an object of input values keyed by field name and
/// returns `{ value, display?, positive?, interpretation? }`, a bare number,
/// or `null` for no result. Widgets bound earlier pick it up on their next
/// recalculation.
#[wasm_bindgen(js_name = registerCalculator)]
pub fn register_calculator(name: &str, formula: js_sys::Function) -> Result<(), JsError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(JsError::new("Calculator name must not be empty"));
    }

    let label = name.to_string();
    page().register_formula(name, move |inputs| call_formula(&label, &formula, inputs));
    tracing::debug!(formula = %name, "registered calculator");
    Ok(())
}

fn call_formula(name: &str, formula: &js_sys::Function, inputs: &Inputs) -> Option<CalcResult> {
    // Plain object rather than a Map, so formulas can read `inputs.rate`.
    let args = match inputs.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(args) => args,
        Err(e) => {
            tracing::warn!(formula = %name, "failed to convert calculator inputs: {}", e);
            return None;
        }
    };

    let returned = match formula.call1(&JsValue::NULL, &args) {
        Ok(returned) => returned,
        Err(e) => {
            tracing::warn!(formula = %name, "calculator formula threw: {:?}", e);
            return None;
        }
    };
    if returned.is_null() || returned.is_undefined() {
        return None;
    }

    if let Some(value) = returned.as_f64() {
        let result = CalcResult {
            value,
            display: String::new(),
            positive: None,
            interpretation: None,
        };
        return Some(result.with_default_display());
    }

    match serde_wasm_bindgen::from_value::<CalcResult>(returned) {
        Ok(result) => Some(result.with_default_display()),
        Err(e) => {
            tracing::warn!(formula = %name, "unusable calculator result: {}", e);
            None
        }
    }
}

/// Current score of a quiz, or `undefined` before its first answer.
#[wasm_bindgen(js_name = quizScore)]
pub fn quiz_score(quiz_id: &str) -> Option<JsQuizScore> {
    page().score(quiz_id).as_ref().map(JsQuizScore::from)
}

// === Formulas ===

#[wasm_bindgen(js_name = calculateROI)]
pub fn calculate_roi(initial: f64, final_value: f64) -> JsCalcResult {
    tutor_browser::calculate_roi(initial, final_value).into()
}

#[wasm_bindgen(js_name = calculateSharpeRatio)]
pub fn calculate_sharpe_ratio(returns: f64, risk_free: f64, std_dev: f64) -> JsCalcResult {
    tutor_browser::calculate_sharpe_ratio(returns, risk_free, std_dev).into()
}

#[wasm_bindgen(js_name = calculateCompoundGrowth)]
pub fn calculate_compound_growth(principal: f64, rate: f64, time: f64) -> JsCalcResult {
    tutor_browser::calculate_compound_growth(principal, rate, time).into()
}

/// Parametric value-at-risk. `confidence` is 90, 95 or 99; anything else
/// uses the 95% z-score.
#[wasm_bindgen(js_name = calculateVaR)]
pub fn calculate_var(value: f64, confidence: f64, volatility: f64) -> JsCalcResult {
    tutor_browser::calculate_var(value, confidence, volatility).into()
}

// === Formatting and validation ===

fn format_options(
    decimals: Option<u32>,
    currency: Option<String>,
    locale: Option<String>,
) -> FormatOptions {
    let mut options = FormatOptions::default();
    if let Some(decimals) = decimals {
        options.decimals = decimals as usize;
    }
    if let Some(currency) = currency.filter(|c| !c.trim().is_empty()) {
        options.currency = currency;
    }
    if let Some(locale) = locale {
        options.locale = Locale::parse(&locale);
    }
    options
}

/// Format with grouping separators. Defaults: 2 decimals, `en-US`.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64, decimals: Option<u32>, locale: Option<String>) -> String {
    format_options(decimals, None, locale).number(value)
}

/// Format an already-scaled percentage, e.g. `50` as "50.00%".
#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage(value: f64, decimals: Option<u32>, locale: Option<String>) -> String {
    format_options(decimals, None, locale).percentage(value)
}

/// Format a currency amount. Defaults: USD, `en-US`.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: f64, currency: Option<String>, locale: Option<String>) -> String {
    format_options(None, currency, locale).currency(value)
}

/// Validate a raw numeric input.
///
/// `options` takes `{ min?, max?, allowNegative?, allowDecimal? }`; omitted
/// fields accept anything.
#[wasm_bindgen(js_name = validateNumericInput)]
pub fn validate_numeric(input: &str, options: JsValue) -> Result<JsValidation, JsError> {
    let options = if options.is_undefined() || options.is_null() {
        ValidationOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid validation options: {}", e)))?
    };
    Ok(validate_numeric_input(input, &options).into())
}

// === Utilities ===

/// Wrap `callback` so it runs once, `wait` ms (default 300) after the last
/// call, with that call's argument.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(callback: js_sys::Function, wait: Option<u32>) -> js_sys::Function {
    let debounced = tutor_browser::debounce(
        wait.unwrap_or(DEFAULT_DEBOUNCE_MS),
        move |arg: JsValue| {
            if let Err(e) = callback.call1(&JsValue::NULL, &arg) {
                tracing::warn!("debounced callback threw: {:?}", e);
            }
        },
    );
    Closure::<dyn FnMut(JsValue)>::new(debounced)
        .into_js_value()
        .unchecked_into()
}

/// Show a transient notification. `kind` is info, success, warning or error.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) -> Result<(), JsError> {
    let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
    tutor_browser::show_toast(message, kind)
        .map_err(|e| JsError::new(&format!("Failed to show toast: {}", e)))
}
