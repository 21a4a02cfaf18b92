//! Browser DOM layer for course page widgets.
//!
//! This crate wires the pure logic in `tutor-core` to the page. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `page`: shared `AppState` and formula registry, `init_all`
//! - `copy` / `clipboard`: code-block copy buttons with a legacy fallback
//! - `quiz`: option and free-text grading, feedback, score, celebration
//! - `calculator`: input collection, formula dispatch, result rendering
//! - `toast`, `confetti`, `styles`: injected presentation
//! - `debounce`, `lifecycle`: timer and document-ready plumbing
//!
//! # Re-exports
//!
//! This crate re-exports `tutor-core` for convenience, so consumers only need
//! to depend on `tutor-browser`.

// Re-export core crate
pub use tutor_core;
pub use tutor_core::*;

pub mod calculator;
pub mod clipboard;
pub mod confetti;
pub mod copy;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod lifecycle;
pub mod page;
pub mod quiz;
pub mod styles;
pub mod toast;

pub use calculator::{init_calculators, recalculate};
pub use copy::init_copy_buttons;
pub use debounce::debounce;
pub use error::DomError;
pub use lifecycle::on_ready;
pub use page::Page;
pub use quiz::init_quizzes;
pub use styles::inject_styles;
pub use toast::show_toast;
