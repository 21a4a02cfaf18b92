//! Financial calculator formulas and the custom formula registry.
//!
//! Built-in calculators read fixed input names:
//!
//! | Kind | Inputs |
//! |---|---|
//! | `roi` | `initial`, `final` |
//! | `sharpe` | `returns`, `riskFree`, `stdDev` |
//! | `compound` | `principal`, `rate`, `time` |
//! | `var` | `value`, `confidence`, `volatility` |
//!
//! Missing or unparsable inputs read as zero.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::format::{format_currency, format_number, format_percentage};

/// How long the result container keeps its "updated" class, in milliseconds.
pub const PULSE_MS: u32 = 500;

/// Calculator inputs keyed by field name.
pub type Inputs = BTreeMap<String, f64>;

/// A computed calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcResult {
    pub value: f64,
    #[serde(default)]
    pub display: String,
    /// Sign flag: picks positive/negative color treatment. `None` leaves the
    /// color alone.
    #[serde(default)]
    pub positive: Option<bool>,
    #[serde(default)]
    pub interpretation: Option<String>,
}

impl CalcResult {
    /// Fill in a display string for results that came without one.
    pub fn with_default_display(mut self) -> Self {
        if self.display.is_empty() {
            self.display = format_number(self.value, 2);
        }
        self
    }
}

/// Parse one raw input value. Anything unusable reads as zero.
pub fn parse_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn field(inputs: &Inputs, name: &str) -> f64 {
    inputs.get(name).copied().unwrap_or(0.0)
}

/// Return on investment, as a percentage of the initial amount.
pub fn calculate_roi(initial: f64, final_value: f64) -> CalcResult {
    let profit = final_value - initial;
    let percent = if initial == 0.0 {
        0.0
    } else {
        profit / initial * 100.0
    };
    let positive = percent >= 0.0;
    let interpretation = if profit >= 0.0 {
        format!("Profit: {}", format_currency(profit, "USD"))
    } else {
        format!("Loss: {}", format_currency(profit.abs(), "USD"))
    };

    CalcResult {
        value: percent,
        display: format_percentage(percent, 2),
        positive: Some(positive),
        interpretation: Some(interpretation),
    }
}

/// Qualitative band for a Sharpe ratio.
pub fn sharpe_interpretation(ratio: f64) -> &'static str {
    if ratio < 0.0 {
        "Poor"
    } else if ratio < 1.0 {
        "Acceptable"
    } else if ratio < 2.0 {
        "Good"
    } else if ratio < 3.0 {
        "Very Good"
    } else {
        "Exceptional"
    }
}

/// Excess return per unit of volatility, rendered to three decimals.
pub fn calculate_sharpe_ratio(returns: f64, risk_free: f64, std_dev: f64) -> CalcResult {
    let ratio = if std_dev == 0.0 {
        0.0
    } else {
        (returns - risk_free) / std_dev
    };

    CalcResult {
        value: ratio,
        display: format_number(ratio, 3),
        positive: Some(ratio >= 0.0),
        interpretation: Some(sharpe_interpretation(ratio).to_string()),
    }
}

/// Compound growth of `principal` at `rate` percent per period over `time` periods.
pub fn calculate_compound_growth(principal: f64, rate: f64, time: f64) -> CalcResult {
    let final_value = principal * (1.0 + rate / 100.0).powf(time);
    let gain = final_value - principal;
    let interpretation = if gain >= 0.0 {
        format!("Total gain: {}", format_currency(gain, "USD"))
    } else {
        format!("Total loss: {}", format_currency(gain.abs(), "USD"))
    };

    CalcResult {
        value: final_value,
        display: format_currency(final_value, "USD"),
        positive: Some(gain >= 0.0),
        interpretation: Some(interpretation),
    }
}

/// z-score for a confidence level in percent. Unknown levels use 95%.
pub fn z_score(confidence: f64) -> f64 {
    if confidence == 90.0 {
        1.28
    } else if confidence == 99.0 {
        2.33
    } else {
        1.645
    }
}

/// Parametric value-at-risk. Always framed as a loss.
pub fn calculate_var(value: f64, confidence: f64, volatility: f64) -> CalcResult {
    let z = z_score(confidence);
    let var = value * volatility * z;
    let level = if confidence == 90.0 || confidence == 99.0 {
        confidence
    } else {
        95.0
    };

    CalcResult {
        value: var,
        display: format_currency(var, "USD"),
        positive: Some(false),
        interpretation: Some(format!(
            "Maximum expected loss at {level}% confidence"
        )),
    }
}

/// Built-in calculator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorKind {
    Roi,
    Sharpe,
    Compound,
    ValueAtRisk,
}

impl CalculatorKind {
    /// Parse a `data-calculator` tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "roi" => Some(CalculatorKind::Roi),
            "sharpe" => Some(CalculatorKind::Sharpe),
            "compound" => Some(CalculatorKind::Compound),
            "var" => Some(CalculatorKind::ValueAtRisk),
            _ => None,
        }
    }

    pub fn compute(self, inputs: &Inputs) -> CalcResult {
        match self {
            CalculatorKind::Roi => calculate_roi(field(inputs, "initial"), field(inputs, "final")),
            CalculatorKind::Sharpe => calculate_sharpe_ratio(
                field(inputs, "returns"),
                field(inputs, "riskFree"),
                field(inputs, "stdDev"),
            ),
            CalculatorKind::Compound => calculate_compound_growth(
                field(inputs, "principal"),
                field(inputs, "rate"),
                field(inputs, "time"),
            ),
            CalculatorKind::ValueAtRisk => calculate_var(
                field(inputs, "value"),
                field(inputs, "confidence"),
                field(inputs, "volatility"),
            ),
        }
    }
}

/// What a calculator widget declares it computes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Calculator {
    Builtin(CalculatorKind),
    /// A registered formula, resolved by name at evaluation time.
    Custom(SmolStr),
}

impl Calculator {
    /// Resolve from a widget's `data-calculator` and `data-function` attributes.
    ///
    /// A named function takes precedence over the type tag.
    pub fn from_attributes(kind: Option<&str>, function: Option<&str>) -> Option<Self> {
        if let Some(name) = function.map(str::trim).filter(|s| !s.is_empty()) {
            return Some(Calculator::Custom(SmolStr::new(name)));
        }
        kind.and_then(CalculatorKind::parse).map(Calculator::Builtin)
    }

    /// Evaluate against the inputs. Unknown custom names produce no result.
    pub fn evaluate(&self, inputs: &Inputs, registry: &FormulaRegistry) -> Option<CalcResult> {
        match self {
            Calculator::Builtin(kind) => Some(kind.compute(inputs)),
            Calculator::Custom(name) => registry.evaluate(name, inputs),
        }
    }
}

/// A custom formula.
pub type Formula = Rc<dyn Fn(&Inputs) -> Option<CalcResult>>;

/// Named custom formulas, registered explicitly and looked up late.
///
/// Cloning shares the formulas, so a caller can snapshot the registry and
/// release any outer borrow before running script-provided formulas.
#[derive(Default, Clone)]
pub struct FormulaRegistry {
    formulas: HashMap<SmolStr, Formula>,
}

impl std::fmt::Debug for FormulaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormulaRegistry")
            .field("formulas", &self.formulas.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a formula, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: &str, formula: F)
    where
        F: Fn(&Inputs) -> Option<CalcResult> + 'static,
    {
        tracing::debug!(name, "registering calculator formula");
        self.formulas.insert(SmolStr::new(name), Rc::new(formula));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formulas.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    pub fn evaluate(&self, name: &str, inputs: &Inputs) -> Option<CalcResult> {
        let Some(formula) = self.formulas.get(name) else {
            tracing::debug!(name, "no formula registered");
            return None;
        };
        formula(inputs).map(CalcResult::with_default_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn inputs(pairs: &[(&str, f64)]) -> Inputs {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_roi() {
        let gain = calculate_roi(100.0, 150.0);
        assert!(approx(gain.value, 50.0));
        assert_eq!(gain.positive, Some(true));
        assert_eq!(gain.display, "50.00%");
        assert_eq!(gain.interpretation.as_deref(), Some("Profit: $50.00"));

        let loss = calculate_roi(100.0, 50.0);
        assert!(approx(loss.value, -50.0));
        assert_eq!(loss.positive, Some(false));
        assert_eq!(loss.display, "-50.00%");
        assert_eq!(loss.interpretation.as_deref(), Some("Loss: $50.00"));
    }

    #[test]
    fn test_roi_zero_initial() {
        let r = calculate_roi(0.0, 10.0);
        assert_eq!(r.value, 0.0);
        assert_eq!(r.display, "0.00%");
    }

    #[test]
    fn test_compound_growth() {
        let r = calculate_compound_growth(1000.0, 10.0, 2.0);
        assert!(approx(r.value, 1210.0));
        assert_eq!(r.positive, Some(true));
        assert_eq!(r.display, "$1,210.00");
        assert_eq!(r.interpretation.as_deref(), Some("Total gain: $210.00"));
    }

    #[test]
    fn test_var() {
        let r = calculate_var(10000.0, 95.0, 0.02);
        assert!(approx(r.value, 329.0));
        assert_eq!(r.positive, Some(false));
        assert_eq!(r.display, "$329.00");

        let unknown = calculate_var(10000.0, 42.0, 0.02);
        assert!(approx(unknown.value, 329.0));
        assert_eq!(
            unknown.interpretation.as_deref(),
            Some("Maximum expected loss at 95% confidence")
        );

        // Negative exposure is still framed as a loss.
        let negative = calculate_var(-10000.0, 99.0, 0.02);
        assert_eq!(negative.positive, Some(false));
    }

    #[test]
    fn test_z_scores() {
        assert_eq!(z_score(90.0), 1.28);
        assert_eq!(z_score(95.0), 1.645);
        assert_eq!(z_score(99.0), 2.33);
        assert_eq!(z_score(0.0), 1.645);
    }

    #[test]
    fn test_sharpe_display() {
        let r = calculate_sharpe_ratio(12.0, 2.0, 8.0);
        assert!(approx(r.value, 1.25));
        assert_eq!(r.display, "1.250");
        assert_eq!(r.interpretation.as_deref(), Some("Good"));

        let flat = calculate_sharpe_ratio(5.0, 2.0, 0.0);
        assert_eq!(flat.value, 0.0);
    }

    #[test]
    fn test_sharpe_bands() {
        let rendered: Vec<String> = [-0.5, 0.0, 0.99, 1.0, 1.5, 2.0, 2.999, 3.0, 10.0]
            .iter()
            .map(|r| format!("{r} {}", sharpe_interpretation(*r)))
            .collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        -0.5 Poor
        0 Acceptable
        0.99 Acceptable
        1 Good
        1.5 Good
        2 Very Good
        2.999 Very Good
        3 Exceptional
        10 Exceptional
        ");
    }

    #[test]
    fn test_kind_dispatch_reads_named_inputs() {
        let roi = CalculatorKind::parse("ROI").unwrap();
        let r = roi.compute(&inputs(&[("initial", 200.0), ("final", 250.0)]));
        assert!(approx(r.value, 25.0));

        let var = CalculatorKind::parse("var").unwrap();
        let r = var.compute(&inputs(&[("value", 1000.0), ("confidence", 90.0), ("volatility", 0.1)]));
        assert!(approx(r.value, 128.0));

        // Missing inputs read as zero.
        let compound = CalculatorKind::parse("compound").unwrap();
        let r = compound.compute(&inputs(&[]));
        assert_eq!(r.value, 0.0);

        assert!(CalculatorKind::parse("mortgage").is_none());
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(" 12.5 "), 12.5);
        assert_eq!(parse_input(""), 0.0);
        assert_eq!(parse_input("abc"), 0.0);
        assert_eq!(parse_input("inf"), 0.0);
    }

    #[test]
    fn test_calculator_from_attributes() {
        assert_eq!(
            Calculator::from_attributes(Some("roi"), None),
            Some(Calculator::Builtin(CalculatorKind::Roi))
        );
        assert_eq!(
            Calculator::from_attributes(Some("roi"), Some("breakEven")),
            Some(Calculator::Custom(SmolStr::new("breakEven")))
        );
        assert_eq!(Calculator::from_attributes(Some("bogus"), Some("  ")), None);
        assert_eq!(Calculator::from_attributes(None, None), None);
    }

    #[test]
    fn test_registry_late_binding() {
        let mut registry = FormulaRegistry::new();
        let calc = Calculator::Custom(SmolStr::new("double"));
        let data = inputs(&[("x", 21.0)]);

        // Unknown name: no result.
        assert_eq!(calc.evaluate(&data, &registry), None);

        registry.register("double", |inputs: &Inputs| {
            let x = inputs.get("x").copied()?;
            Some(CalcResult {
                value: x * 2.0,
                display: String::new(),
                positive: None,
                interpretation: None,
            })
        });
        assert!(registry.contains("double"));
        assert_eq!(registry.len(), 1);

        let result = calc.evaluate(&data, &registry).unwrap();
        assert_eq!(result.value, 42.0);
        assert_eq!(result.display, "42.00");
        assert_eq!(result.positive, None);
    }
}
