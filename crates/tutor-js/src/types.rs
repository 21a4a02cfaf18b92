//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use tutor_core::{CalcResult, ScoreRecord, ValidationError};
use wasm_bindgen::prelude::*;

/// Calculator result as seen by script callers.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsCalcResult {
    pub value: f64,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

impl From<CalcResult> for JsCalcResult {
    fn from(result: CalcResult) -> Self {
        Self {
            value: result.value,
            display: result.display,
            positive: result.positive,
            interpretation: result.interpretation,
        }
    }
}

/// Outcome of `validateNumericInput`.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<f64, ValidationError>> for JsValidation {
    fn from(result: Result<f64, ValidationError>) -> Self {
        match result {
            Ok(value) => Self {
                valid: true,
                value: Some(value),
                error: None,
            },
            Err(e) => Self {
                valid: false,
                value: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// A quiz's running score.
#[wasm_bindgen]
pub struct JsQuizScore {
    pub total: u32,
    pub correct: u32,
    pub perfect: bool,
    #[wasm_bindgen(getter_with_clone)]
    pub label: String,
}

impl From<&ScoreRecord> for JsQuizScore {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            total: record.total(),
            correct: record.correct(),
            perfect: record.is_perfect(),
            label: record.label(),
        }
    }
}
