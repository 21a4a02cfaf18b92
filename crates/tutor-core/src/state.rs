//! Page-lifetime state: quiz scores and in-flight copy feedback.
//!
//! Everything here is discarded on navigation. The DOM is a projection of
//! this state, never its source of truth.

use std::collections::{HashMap, HashSet};

use smol_str::{SmolStr, format_smolstr};

/// Per-quiz tally of distinct questions answered and answered correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRecord {
    total: u32,
    correct: u32,
    answered: HashSet<SmolStr>,
}

impl ScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an answer for `question_id`.
    ///
    /// Returns false (and changes nothing) if the question was already counted.
    pub fn record(&mut self, question_id: &str, correct: bool) -> bool {
        if self.answered.contains(question_id) {
            return false;
        }
        self.answered.insert(SmolStr::new(question_id));
        self.total += 1;
        if correct {
            self.correct += 1;
        }
        true
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn has_answered(&self, question_id: &str) -> bool {
        self.answered.contains(question_id)
    }

    /// At least one answer, all of them correct.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    /// On-page score label, e.g. "Score: 2/3".
    pub fn label(&self) -> String {
        format!("Score: {}/{}", self.correct, self.total)
    }
}

/// Shared state for every controller on the page.
#[derive(Debug, Default)]
pub struct AppState {
    scores: HashMap<SmolStr, ScoreRecord>,
    copying: HashSet<SmolStr>,
    next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer and return the quiz's updated score.
    pub fn record_answer(&mut self, quiz_id: &str, question_id: &str, correct: bool) -> &ScoreRecord {
        let record = self.scores.entry(SmolStr::new(quiz_id)).or_default();
        if !record.record(question_id, correct) {
            tracing::debug!(quiz_id, question_id, "answer already counted");
        }
        record
    }

    pub fn score(&self, quiz_id: &str) -> Option<&ScoreRecord> {
        self.scores.get(quiz_id)
    }

    /// Mark a copy button as showing "copied" feedback.
    ///
    /// Returns false if the button is already in flight; the caller must not
    /// start another feedback cycle.
    pub fn begin_copy(&mut self, button_id: &str) -> bool {
        self.copying.insert(SmolStr::new(button_id))
    }

    pub fn finish_copy(&mut self, button_id: &str) {
        self.copying.remove(button_id);
    }

    pub fn is_copying(&self, button_id: &str) -> bool {
        self.copying.contains(button_id)
    }

    /// Allocate a page-unique element id such as `copy-btn-3`.
    pub fn allocate_id(&mut self, prefix: &str) -> SmolStr {
        self.next_id += 1;
        format_smolstr!("{}-{}", prefix, self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_once_per_question() {
        let mut record = ScoreRecord::new();
        assert!(record.record("q1", true));
        assert!(!record.record("q1", false));
        assert!(!record.record("q1", true));
        assert_eq!(record.total(), 1);
        assert_eq!(record.correct(), 1);
        assert!(record.has_answered("q1"));
    }

    #[test]
    fn test_correct_never_exceeds_total() {
        let mut record = ScoreRecord::new();
        let answers = [("a", true), ("b", false), ("a", true), ("c", true), ("b", true)];
        for (q, correct) in answers {
            record.record(q, correct);
            assert!(record.correct() <= record.total());
        }
        assert_eq!(record.total(), 3);
        assert_eq!(record.correct(), 2);
        assert_eq!(record.label(), "Score: 2/3");
        assert!(!record.is_perfect());
    }

    #[test]
    fn test_perfect_requires_answers() {
        let mut record = ScoreRecord::new();
        assert!(!record.is_perfect());
        record.record("q1", true);
        assert!(record.is_perfect());
    }

    #[test]
    fn test_scores_are_per_quiz() {
        let mut state = AppState::new();
        state.record_answer("quiz-a", "q1", true);
        state.record_answer("quiz-b", "q1", false);

        assert_eq!(state.score("quiz-a").map(|s| s.correct()), Some(1));
        assert_eq!(state.score("quiz-b").map(|s| s.correct()), Some(0));
        assert!(state.score("quiz-c").is_none());
    }

    #[test]
    fn test_copy_in_flight_guard() {
        let mut state = AppState::new();
        assert!(state.begin_copy("copy-btn-1"));
        assert!(!state.begin_copy("copy-btn-1"));
        assert!(state.is_copying("copy-btn-1"));

        state.finish_copy("copy-btn-1");
        assert!(!state.is_copying("copy-btn-1"));
        assert!(state.begin_copy("copy-btn-1"));
    }

    #[test]
    fn test_allocate_id_is_unique() {
        let mut state = AppState::new();
        let a = state.allocate_id("copy-btn");
        let b = state.allocate_id("copy-btn");
        assert_eq!(a, "copy-btn-1");
        assert_eq!(b, "copy-btn-2");
    }
}
