use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{FeedbackMessages, QuestionDraft, QuizContent, QuizContentDraft};

use super::quiz::{QuizWidget, QuizWidgetProps, ScoreGaugeView, ScoreGaugeViewProps};
use crate::app::App;
use crate::context::build_app_context;
use crate::vm::GaugeModel;

fn sample_content() -> QuizContent {
    QuizContentDraft::new(
        vec![
            QuestionDraft::new(
                "Which is a **prime** number?",
                vec!["4".into(), "7".into(), "9".into()],
                Some(1),
            ),
            QuestionDraft::new("Second question", vec!["yes".into(), "no".into()], Some(0)),
        ],
        FeedbackMessages::new("Great job!", "Review and retry."),
        "Subscribe for more",
    )
    .validate()
    .unwrap()
}

fn render_widget(content: QuizContent) -> String {
    let mut dom = VirtualDom::new_with_props(
        QuizWidget,
        QuizWidgetProps {
            widget_id: "quiz0".to_string(),
            content: Arc::new(content),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn quiz_widget_smoke_renders_first_question() {
    let html = render_widget(sample_content());

    assert!(html.contains("question0_quiz0"), "missing first question in {html}");
    assert!(html.contains("<strong>prime</strong>"), "missing markup in {html}");
    assert!(!html.contains("Second question"), "second question visible in {html}");
    assert!(html.contains("1/2"), "missing progress in {html}");
    assert!(html.contains("nextQuestion_quiz0"), "missing next button in {html}");
    assert!(html.contains("quiz0_answer0"), "missing radio group in {html}");
    assert!(!html.contains("Great job!"), "feedback shown early in {html}");
}

#[test]
fn score_gauge_smoke_renders_label_and_fill() {
    let mut gauge = GaugeModel::default();
    services::ScoreGauge::configure(&mut gauge);
    services::ScoreGauge::render(&mut gauge);
    services::ScoreGauge::set_value(
        &mut gauge,
        quiz_core::model::ScorePercent::from_counts(3, 4).unwrap(),
    );

    let mut dom = VirtualDom::new_with_props(ScoreGaugeView, ScoreGaugeViewProps { gauge });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("75.0%"), "missing label in {html}");
    assert!(html.contains("width: 75.0%"), "missing fill in {html}");
}

#[derive(Props, Clone, PartialEq)]
struct AppHarnessProps {
    quizzes: Vec<QuizContent>,
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    use_context_provider(|| build_app_context("Science quizzes", props.quizzes.clone()));
    rsx! { App {} }
}

#[test]
fn app_smoke_mounts_one_widget_per_quiz() {
    let mut dom = VirtualDom::new_with_props(
        AppHarness,
        AppHarnessProps {
            quizzes: vec![sample_content(), sample_content()],
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Science quizzes"), "missing title in {html}");
    assert!(html.contains("question0_quiz0"), "missing first widget in {html}");
    assert!(html.contains("question0_quiz1"), "missing second widget in {html}");
}
