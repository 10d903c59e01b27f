use quiz_core::model::QuizContent;
use services::{AnswerMark, QuizFlow, QuizSession};

use super::gauge_vm::GaugeModel;
use super::markdown_vm::{inline_markup_to_html, markup_to_html};
use super::quiz_frame::{AdvanceControl, QuizFrame};

/// Flow type owned by each mounted quiz widget.
pub type WidgetFlow = QuizFlow<QuizFrame, GaugeModel>;

/// Build and mount the flow for a freshly mounted widget.
#[must_use]
pub fn mount_flow(content: QuizContent) -> WidgetFlow {
    let mut flow = QuizFlow::new(
        QuizSession::new(content),
        QuizFrame::default(),
        GaugeModel::default(),
    );
    flow.mount();
    flow
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerVm {
    pub index: usize,
    pub html: String,
    pub selected: bool,
    pub mark: Option<AnswerMark>,
}

impl AnswerVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.mark {
            Some(AnswerMark::Correct) => "quiz-list-item answer-correct",
            Some(AnswerMark::Incorrect) => "quiz-list-item answer-incorrect",
            None => "quiz-list-item",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub body_html: String,
    pub visible: bool,
    pub answers: Vec<AnswerVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizWidgetVm {
    pub progress: String,
    pub questions: Vec<QuestionVm>,
    pub results_revealed: bool,
    pub gauge: GaugeModel,
    pub feedback: Vec<String>,
    pub call_to_action_html: Vec<String>,
    pub control: AdvanceControl,
}

/// Snapshot everything a widget draws from its flow.
#[must_use]
pub fn map_quiz_widget(flow: &WidgetFlow) -> QuizWidgetVm {
    let frame = flow.renderer();
    let session = flow.session();
    let current = session.current_index();
    let selection = flow.selection();

    let questions = session
        .content()
        .questions()
        .iter()
        .enumerate()
        .map(|(q, question)| {
            let recorded = session.responses().get(q).copied().flatten();
            let picked = if current == Some(q) { selection } else { recorded };
            QuestionVm {
                index: q,
                body_html: markup_to_html(question.body()),
                visible: frame.is_question_visible(q),
                answers: question
                    .answers()
                    .iter()
                    .enumerate()
                    .map(|(a, answer)| AnswerVm {
                        index: a,
                        html: inline_markup_to_html(answer),
                        selected: picked.is_some_and(|choice| choice.index() == a),
                        mark: frame.mark(q, a),
                    })
                    .collect(),
            }
        })
        .collect();

    QuizWidgetVm {
        progress: frame.progress().to_string(),
        questions,
        results_revealed: frame.results_revealed(),
        gauge: *flow.gauge(),
        feedback: frame.feedback().to_vec(),
        call_to_action_html: frame
            .call_to_action()
            .iter()
            .map(|content| markup_to_html(content))
            .collect(),
        control: frame.control(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Choice, FeedbackMessages, QuestionDraft, QuizContentDraft};

    fn content() -> QuizContent {
        QuizContentDraft::new(
            vec![
                QuestionDraft::new("**First**", vec!["a".into(), "b".into()], Some(0)),
                QuestionDraft::new("Second", vec!["c".into(), "d".into()], Some(1)),
            ],
            FeedbackMessages::new("All right!", "Not quite."),
            "[Read more](https://example.com)",
        )
        .validate()
        .unwrap()
    }

    #[test]
    fn mounted_widget_shows_only_first_question() {
        let vm = map_quiz_widget(&mount_flow(content()));
        assert_eq!(vm.progress, "1/2");
        assert!(vm.questions[0].visible);
        assert!(!vm.questions[1].visible);
        assert!(vm.questions[0].body_html.contains("<strong>First</strong>"));
        assert_eq!(vm.control, AdvanceControl::Disabled);
        assert!(!vm.gauge.is_visible());
    }

    #[test]
    fn selection_is_reflected_before_submit() {
        let mut flow = mount_flow(content());
        flow.select_choice(Choice::new(1)).unwrap();
        let vm = map_quiz_widget(&flow);
        assert!(vm.questions[0].answers[1].selected);
        assert!(!vm.questions[0].answers[0].selected);
        assert_eq!(vm.control, AdvanceControl::Enabled);
    }

    #[test]
    fn finished_widget_shows_marks_gauge_and_feedback() {
        let mut flow = mount_flow(content());
        flow.select_choice(Choice::new(1)).unwrap();
        flow.advance().unwrap();
        flow.select_choice(Choice::new(1)).unwrap();
        flow.advance().unwrap();

        let vm = map_quiz_widget(&flow);
        assert!(vm.results_revealed);
        assert!(vm.questions.iter().all(|q| q.visible));
        assert_eq!(vm.progress, "");
        assert_eq!(vm.control, AdvanceControl::Removed);
        assert_eq!(vm.feedback, vec!["Not quite.".to_string()]);
        assert_eq!(vm.gauge.label(), "50.0%");

        let first = &vm.questions[0];
        assert_eq!(first.answers[0].class(), "quiz-list-item answer-correct");
        assert_eq!(first.answers[1].class(), "quiz-list-item answer-incorrect");
        assert!(first.answers[1].selected);
        assert_eq!(vm.questions[1].answers[1].mark, Some(AnswerMark::Correct));
        assert!(vm.call_to_action_html[0].contains("Read more"));
    }
}
