//! tutor-core: Pure Rust logic for course page widgets without browser dependencies.
//!
//! This crate provides:
//! - `AppState` / `ScoreRecord` - page-lifetime quiz scores and copy-button state
//! - Quiz grading decisions (option marks, free-text comparison, completion)
//! - Financial calculator formulas and the `FormulaRegistry` for custom formulas
//! - Locale-aware number/currency/percentage formatting
//! - Numeric input validation and a clock-agnostic `Debouncer`
//! - Toast and confetti presentation parameters

pub mod calculator;
pub mod color;
pub mod copy;
pub mod debounce;
pub mod effects;
pub mod error;
pub mod format;
pub mod quiz;
pub mod state;
pub mod validate;

pub use calculator::{
    CalcResult, Calculator, CalculatorKind, Formula, FormulaRegistry, Inputs, PULSE_MS,
    calculate_compound_growth, calculate_roi, calculate_sharpe_ratio, calculate_var, parse_input,
    sharpe_interpretation, z_score,
};
pub use copy::{COPIED_LABEL, COPY_FEEDBACK_MS, COPY_LABEL, FAILED_LABEL, copy_text};
pub use debounce::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use effects::{
    CONFETTI_COUNT, ConfettiParticle, TOAST_FADE_MS, TOAST_MS, ToastKind, plan_confetti,
};
pub use error::ValidationError;
pub use format::{
    FormatOptions, Locale, MAX_DECIMALS, format_currency, format_currency_in, format_number,
    format_number_in, format_percentage,
};
pub use quiz::{
    FALLBACK_QUESTION_ID, Feedback, OptionMarks, grade_text, gradable_count, is_complete,
    select_option, text_feedback,
};
pub use smol_str::SmolStr;
pub use state::{AppState, ScoreRecord};
pub use validate::{ValidationOptions, validate_numeric_input};
