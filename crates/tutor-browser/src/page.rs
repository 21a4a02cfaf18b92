//! Page-wide handles shared by every controller.

use std::cell::RefCell;
use std::rc::Rc;

use tutor_core::{AppState, CalcResult, FormulaRegistry, Inputs, ScoreRecord};

use crate::dom;
use crate::error::DomError;

/// Shared state for one page.
///
/// Cheap to clone; every clone points at the same state. Lives on the single
/// UI thread, and no borrow is held across an await point.
#[derive(Clone, Default)]
pub struct Page {
    state: Rc<RefCell<AppState>>,
    formulas: Rc<RefCell<FormulaRegistry>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Rc<RefCell<AppState>> {
        &self.state
    }

    pub fn formulas(&self) -> &Rc<RefCell<FormulaRegistry>> {
        &self.formulas
    }

    /// Register a custom calculator formula.
    ///
    /// Widgets look formulas up when they recompute, so registering after
    /// `init_all` still takes effect.
    pub fn register_formula<F>(&self, name: &str, formula: F)
    where
        F: Fn(&Inputs) -> Option<CalcResult> + 'static,
    {
        self.formulas.borrow_mut().register(name, formula);
    }

    /// Snapshot of a quiz's score.
    pub fn score(&self, quiz_id: &str) -> Option<ScoreRecord> {
        self.state.borrow().score(quiz_id).cloned()
    }

    /// Inject styles and run every controller over the current document.
    pub fn init_all(&self) -> Result<(), DomError> {
        let document = dom::document()?;
        crate::styles::inject_styles(&document)?;

        let steps: [(&str, fn(&Page) -> Result<usize, DomError>); 3] = [
            ("copy buttons", crate::copy::init_copy_buttons),
            ("quizzes", crate::quiz::init_quizzes),
            ("calculators", crate::calculator::init_calculators),
        ];
        for (name, init) in steps {
            match init(self) {
                Ok(count) => tracing::debug!(count, "initialized {}", name),
                Err(e) => tracing::warn!("failed to initialize {}: {}", name, e),
            }
        }
        Ok(())
    }
}
