//! Quiz grading decisions.
//!
//! The browser layer reads option flags and text inputs out of the DOM, asks
//! these functions what should happen, and projects the answer back.

/// Question id used when an option has no grouping wrapper.
pub const FALLBACK_QUESTION_ID: &str = "default";

/// Visual marks for one option after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionMarks {
    pub selected: bool,
    pub correct: bool,
    pub incorrect: bool,
}

/// Compute marks for every option in scope after `chosen` is picked.
///
/// `flags[i]` is whether option `i` is flagged correct. All prior marks are
/// cleared. A wrong pick also reveals the first option flagged correct.
/// Returns `None` if `chosen` is out of range.
pub fn select_option(flags: &[bool], chosen: usize) -> Option<Vec<OptionMarks>> {
    let chosen_correct = *flags.get(chosen)?;
    let mut marks = vec![OptionMarks::default(); flags.len()];

    marks[chosen].selected = true;
    if chosen_correct {
        marks[chosen].correct = true;
    } else {
        marks[chosen].incorrect = true;
        if let Some(answer) = flags.iter().position(|&f| f) {
            marks[answer].correct = true;
        }
    }
    Some(marks)
}

/// Compare a free-text answer, ignoring case and surrounding whitespace.
pub fn grade_text(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Feedback shown after an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub explanation: Option<String>,
}

impl Feedback {
    /// Build feedback, dropping blank explanations.
    pub fn new(correct: bool, explanation: Option<&str>) -> Self {
        Self {
            correct,
            explanation: explanation
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn glyph(&self) -> &'static str {
        if self.correct { "✓" } else { "✗" }
    }

    pub fn label(&self) -> &'static str {
        if self.correct { "Correct!" } else { "Incorrect" }
    }
}

/// Feedback for a free-text answer.
///
/// A configured explanation wins; otherwise a wrong answer reveals the
/// expected one.
pub fn text_feedback(correct: bool, explanation: Option<&str>, expected: &str) -> Feedback {
    let feedback = Feedback::new(correct, explanation);
    if feedback.explanation.is_some() || correct {
        return feedback;
    }
    Feedback {
        correct,
        explanation: Some(format!("Correct answer: {}", expected.trim())),
    }
}

/// Number of gradable items in a quiz.
///
/// `flagged_options` counts every option carrying a `data-correct` flag,
/// whatever its value; `text_inputs` counts free-text inputs with an
/// expected answer.
pub fn gradable_count(flagged_options: usize, text_inputs: usize) -> usize {
    flagged_options + text_inputs
}

/// Whether a quiz has been completed with every item correct.
pub fn is_complete(correct: u32, gradable: usize) -> bool {
    gradable > 0 && correct as usize == gradable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_correct_option() {
        let marks = select_option(&[false, true, false], 1).unwrap();
        assert_eq!(
            marks[1],
            OptionMarks {
                selected: true,
                correct: true,
                incorrect: false
            }
        );
        assert_eq!(marks[0], OptionMarks::default());
        assert_eq!(marks[2], OptionMarks::default());
    }

    #[test]
    fn test_select_wrong_option_reveals_answer() {
        let marks = select_option(&[false, true, false], 2).unwrap();
        assert!(marks[2].selected && marks[2].incorrect && !marks[2].correct);
        assert!(marks[1].correct && !marks[1].selected);
        assert_eq!(marks[0], OptionMarks::default());
    }

    #[test]
    fn test_select_wrong_reveals_first_flagged_only() {
        // Ungrouped scope spanning two questions: only the first answer is revealed.
        let marks = select_option(&[false, true, false, true], 0).unwrap();
        assert!(marks[1].correct);
        assert!(!marks[3].correct);
    }

    #[test]
    fn test_select_out_of_range() {
        assert!(select_option(&[true], 3).is_none());
        assert!(select_option(&[], 0).is_none());
    }

    #[test]
    fn test_grade_text_ignores_case_and_whitespace() {
        assert!(grade_text("  Paris ", "paris"));
        assert!(grade_text("DIVERSIFICATION", "  Diversification\n"));
        assert!(!grade_text("London", "Paris"));
        assert!(!grade_text("Par is", "Paris"));
    }

    #[test]
    fn test_feedback_labels() {
        let ok = Feedback::new(true, Some("  "));
        assert_eq!(ok.glyph(), "✓");
        assert_eq!(ok.label(), "Correct!");
        assert_eq!(ok.explanation, None);

        let bad = Feedback::new(false, Some("Because."));
        assert_eq!(bad.glyph(), "✗");
        assert_eq!(bad.label(), "Incorrect");
        assert_eq!(bad.explanation.as_deref(), Some("Because."));
    }

    #[test]
    fn test_text_feedback_synthesizes_answer() {
        let fb = text_feedback(false, None, " Bond ");
        assert_eq!(fb.explanation.as_deref(), Some("Correct answer: Bond"));

        let fb = text_feedback(false, Some("Bonds pay coupons."), "Bond");
        assert_eq!(fb.explanation.as_deref(), Some("Bonds pay coupons."));

        let fb = text_feedback(true, None, "Bond");
        assert_eq!(fb.explanation, None);
    }

    #[test]
    fn test_completion() {
        let gradable = gradable_count(2, 1);
        assert_eq!(gradable, 3);
        assert!(!is_complete(2, gradable));
        assert!(is_complete(3, gradable));
        assert!(!is_complete(0, 0));
    }

    #[test]
    fn test_completion_counts_every_flagged_option() {
        // Two questions with two flagged options each, both answered right.
        let gradable = gradable_count(4, 0);
        assert!(!is_complete(2, gradable));
    }
}
