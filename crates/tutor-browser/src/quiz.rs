//! Quiz widgets.
//!
//! # Markup
//!
//! ```html
//! <div class="quiz-container" id="risk-quiz">
//!   <div class="quiz-question" data-question-id="q1">
//!     <div class="quiz-option" data-correct="false" data-explanation="...">A</div>
//!     <div class="quiz-option" data-correct="true" data-explanation="...">B</div>
//!   </div>
//!   <div class="quiz-question" data-question-id="q2">
//!     <input class="quiz-text-input" data-answer="diversification" data-explanation="...">
//!     <button class="quiz-submit">Submit</button>
//!   </div>
//!   <div class="quiz-score"></div>
//! </div>
//! ```
//!
//! Without a `.quiz-question` wrapper an option belongs to the fallback
//! question and its selection scope is the whole quiz. Ungrouped text inputs
//! pair with the `.quiz-submit` buttons that follow them.

use gloo_events::EventListener;
use tutor_core::color::{self, rgba_u32_to_css, rgba_u32_to_css_alpha};
use tutor_core::{
    CONFETTI_COUNT, FALLBACK_QUESTION_ID, Feedback, OptionMarks, grade_text, gradable_count,
    is_complete, select_option, text_feedback,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlButtonElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::confetti;
use crate::dom;
use crate::error::DomError;
use crate::page::Page;

const BOUND_ATTR: &str = "data-quiz-bound";
const MARK_CLASSES: [&str; 3] = ["selected", "correct", "incorrect"];

/// Wire up every quiz in the document.
///
/// Quizzes without an id get one. Returns the number of quizzes bound.
pub fn init_quizzes(page: &Page) -> Result<usize, DomError> {
    let document = dom::document()?;
    let mut bound = 0;

    for quiz in dom::query_document(&document, ".quiz-container") {
        if quiz.has_attribute(BOUND_ATTR) {
            continue;
        }
        quiz.set_attribute(BOUND_ATTR, "true")?;
        if quiz.id().is_empty() {
            let id = page.state().borrow_mut().allocate_id("quiz");
            quiz.set_id(&id);
        }

        for option in dom::query_all(&quiz, ".quiz-option") {
            let page = page.clone();
            let quiz = quiz.clone();
            let target = option.clone();
            EventListener::new(&option, "click", move |_| {
                if let Err(e) = handle_option(&page, &quiz, &target) {
                    tracing::warn!("quiz option handler failed: {}", e);
                }
            })
            .forget();
        }

        for submit in dom::query_all(&quiz, ".quiz-submit") {
            let page = page.clone();
            let quiz = quiz.clone();
            let target = submit.clone();
            EventListener::new(&submit, "click", move |_| {
                if let Err(e) = handle_text_submit(&page, &quiz, &target) {
                    tracing::warn!("quiz submit handler failed: {}", e);
                }
            })
            .forget();
        }

        for input in dom::query_all(&quiz, ".quiz-text-input") {
            let page = page.clone();
            let quiz = quiz.clone();
            let target = input.clone();
            EventListener::new(&input, "keyup", move |event| {
                let is_enter = event
                    .dyn_ref::<web_sys::KeyboardEvent>()
                    .is_some_and(|e| e.key() == "Enter");
                if is_enter {
                    if let Err(e) = handle_text_submit(&page, &quiz, &target) {
                        tracing::warn!("quiz submit handler failed: {}", e);
                    }
                }
            })
            .forget();
        }

        bound += 1;
    }

    Ok(bound)
}

/// Handle a click on an option.
pub fn handle_option(page: &Page, quiz: &Element, option: &Element) -> Result<(), DomError> {
    let group = dom::closest(option, ".quiz-question");
    let question_id = group
        .as_ref()
        .and_then(|g| dom::attr(g, "data-question-id"))
        .unwrap_or_else(|| FALLBACK_QUESTION_ID.to_string());
    let quiz_id = quiz.id();

    if answered(page, &quiz_id, &question_id) {
        return Ok(());
    }

    let scope = group.unwrap_or_else(|| quiz.clone());
    let options = dom::query_all(&scope, ".quiz-option");
    let flags: Vec<bool> = options.iter().map(is_flagged_correct).collect();
    let Some(chosen) = options.iter().position(|o| o.is_same_node(Some(option))) else {
        return Ok(());
    };
    let Some(marks) = select_option(&flags, chosen) else {
        return Ok(());
    };

    for (element, mark) in options.iter().zip(&marks) {
        apply_marks(element, mark);
    }

    let correct = flags[chosen];
    let feedback = Feedback::new(correct, dom::attr(option, "data-explanation").as_deref());
    render_feedback(&scope, &feedback)?;
    update_score(page, quiz, &question_id, correct)?;

    for element in &options {
        dom::set_styles(element, &[("pointer-events", "none")]);
        let _ = element.class_list().add_1("disabled");
    }
    Ok(())
}

/// Handle a free-text submission from an input (Enter) or a submit button.
///
/// Exits quietly without an input or a configured answer.
pub fn handle_text_submit(page: &Page, quiz: &Element, trigger: &Element) -> Result<(), DomError> {
    let group = dom::closest(trigger, ".quiz-question");
    let scope = group.clone().unwrap_or_else(|| quiz.clone());

    let Some(input) = text_input_for(trigger, &scope) else {
        return Ok(());
    };
    let Some(expected) = dom::attr(&input, "data-answer") else {
        return Ok(());
    };
    if input.disabled() {
        return Ok(());
    }

    let question_id = group
        .as_ref()
        .and_then(|g| dom::attr(g, "data-question-id"))
        .or_else(|| dom::attr(&input, "data-question-id"))
        .or_else(|| Some(input.id()).filter(|id| !id.is_empty()))
        .unwrap_or_else(|| FALLBACK_QUESTION_ID.to_string());
    let quiz_id = quiz.id();
    if answered(page, &quiz_id, &question_id) {
        return Ok(());
    }

    let correct = grade_text(&input.value(), &expected);
    let tint = color::sign_color(correct);
    let border = rgba_u32_to_css(tint);
    let background = rgba_u32_to_css_alpha(tint, 0.1);
    dom::set_styles(
        &input,
        &[
            ("border-color", border.as_str()),
            ("background-color", background.as_str()),
        ],
    );

    let feedback = text_feedback(
        correct,
        dom::attr(&input, "data-explanation").as_deref(),
        &expected,
    );
    render_feedback(&scope, &feedback)?;
    update_score(page, quiz, &question_id, correct)?;

    input.set_disabled(true);
    let submits = match &group {
        Some(group) => dom::query_all(group, ".quiz-submit"),
        None => paired_submits(&input),
    };
    for submit in submits {
        match submit.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.set_disabled(true),
            None => submit.set_attribute("disabled", "true")?,
        }
    }
    Ok(())
}

/// The input a submission grades.
///
/// An input triggers itself. A button grades the nearest input before it
/// among its siblings, then the first input beside it, then the first in
/// scope.
fn text_input_for(trigger: &Element, scope: &Element) -> Option<HtmlInputElement> {
    let is_input = |e: &Element| e.matches(".quiz-text-input").unwrap_or(false);

    let found = if is_input(trigger) {
        Some(trigger.clone())
    } else {
        std::iter::successors(trigger.previous_element_sibling(), |e| {
            e.previous_element_sibling()
        })
        .find(|e| is_input(e))
        .or_else(|| {
            trigger
                .parent_element()
                .and_then(|parent| dom::query(&parent, ".quiz-text-input"))
        })
        .or_else(|| dom::query(scope, ".quiz-text-input"))
    };
    found.and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

/// Submit buttons following an ungrouped input, up to the next input.
fn paired_submits(input: &HtmlInputElement) -> Vec<Element> {
    std::iter::successors(input.next_element_sibling(), |e| e.next_element_sibling())
        .take_while(|e| !e.matches(".quiz-text-input").unwrap_or(false))
        .filter(|e| e.matches(".quiz-submit").unwrap_or(false))
        .collect()
}

fn answered(page: &Page, quiz_id: &str, question_id: &str) -> bool {
    page.state()
        .borrow()
        .score(quiz_id)
        .is_some_and(|s| s.has_answered(question_id))
}

fn is_flagged_correct(option: &Element) -> bool {
    option
        .get_attribute("data-correct")
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

fn apply_marks(element: &Element, marks: &OptionMarks) {
    let class_list = element.class_list();
    for class in MARK_CLASSES {
        let _ = class_list.remove_1(class);
    }
    if marks.selected {
        let _ = class_list.add_1("selected");
    }
    if marks.correct {
        let _ = class_list.add_1("correct");
    }
    if marks.incorrect {
        let _ = class_list.add_1("incorrect");
    }
}

/// Replace the feedback block under `scope` and scroll it into view.
fn render_feedback(scope: &Element, feedback: &Feedback) -> Result<(), DomError> {
    // Direct children only: grouped questions keep their own blocks.
    for old in dom::query_all(scope, ":scope > .quiz-feedback") {
        old.remove();
    }

    let document = dom::document()?;
    let class = if feedback.correct {
        "quiz-feedback correct"
    } else {
        "quiz-feedback incorrect"
    };
    let block = dom::create(&document, "div", class)?;

    let heading = dom::create(&document, "strong", "quiz-feedback-label")?;
    heading.set_text_content(Some(&format!("{} {}", feedback.glyph(), feedback.label())));
    block.append_child(&heading)?;

    if let Some(explanation) = &feedback.explanation {
        let paragraph = dom::create(&document, "p", "quiz-feedback-explanation")?;
        paragraph.set_text_content(Some(explanation));
        block.append_child(&paragraph)?;
    }

    scope.append_child(&block)?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    block.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Count the answer, refresh the score label and check for completion.
fn update_score(page: &Page, quiz: &Element, question_id: &str, correct: bool) -> Result<(), DomError> {
    let record = page
        .state()
        .borrow_mut()
        .record_answer(&quiz.id(), question_id, correct)
        .clone();

    if let Some(label) = dom::query(quiz, ".quiz-score") {
        label.set_text_content(Some(&record.label()));
        let tint = if record.is_perfect() {
            color::POSITIVE
        } else {
            color::NEUTRAL
        };
        let css = rgba_u32_to_css(tint);
        dom::set_styles(&label, &[("color", css.as_str())]);
    }

    let gradable = gradable_count(
        dom::query_all(quiz, ".quiz-option[data-correct]").len(),
        dom::query_all(quiz, ".quiz-text-input[data-answer]").len(),
    );
    if is_complete(record.correct(), gradable) {
        celebrate(quiz, gradable)?;
    }
    Ok(())
}

/// Show the completion panel, replacing any earlier one, and launch confetti.
fn celebrate(quiz: &Element, gradable: usize) -> Result<(), DomError> {
    for old in dom::query_all(quiz, ".quiz-celebration") {
        old.remove();
    }

    let document = dom::document()?;
    let panel = dom::create(&document, "div", "quiz-celebration")?;

    let title = dom::create(&document, "h3", "quiz-celebration-title")?;
    title.set_text_content(Some("🎉 Perfect score!"));
    panel.append_child(&title)?;

    let detail = dom::create(&document, "p", "quiz-celebration-detail")?;
    let noun = if gradable == 1 { "question" } else { "questions" };
    detail.set_text_content(Some(&format!(
        "You answered all {gradable} {noun} correctly."
    )));
    panel.append_child(&detail)?;

    quiz.append_child(&panel)?;
    tracing::debug!(quiz_id = %quiz.id(), "quiz complete");

    confetti::launch_confetti(CONFETTI_COUNT)
}
