use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::{Choice, QuizContent};
use tracing::warn;

use crate::vm::{AdvanceControl, GaugeModel, QuestionVm, QuizWidgetVm, map_quiz_widget, mount_flow};

/// One quiz, mounted with its own flow. Nothing is shared between widgets.
#[component]
pub fn QuizWidget(widget_id: String, content: Arc<QuizContent>) -> Element {
    let mut flow = use_signal(|| mount_flow(content.as_ref().clone()));

    let QuizWidgetVm {
        progress,
        questions,
        results_revealed,
        gauge,
        feedback,
        call_to_action_html,
        control,
    } = map_quiz_widget(&flow.read());

    let on_select = move |answer: usize| {
        if let Err(err) = flow.write().select_choice(Choice::new(answer)) {
            warn!(%err, answer, "choice rejected");
        }
    };

    rsx! {
        div { class: "quiz", id: "{widget_id}",
            div { class: "gauge margin-tb-md", id: "result_{widget_id}",
                if gauge.is_visible() {
                    ScoreGaugeView { gauge }
                } else {
                    span { class: "quiz-progress", "{progress}" }
                }
                for (i, message) in feedback.iter().enumerate() {
                    div { key: "{i}",
                        strong { "{message}" }
                    }
                }
            }

            for question in questions.iter().cloned() {
                QuestionCard {
                    key: "{question.index}",
                    widget_id: widget_id.clone(),
                    question,
                    results: results_revealed,
                    on_select,
                }
            }

            if control != AdvanceControl::Removed {
                button {
                    id: "nextQuestion_{widget_id}",
                    disabled: control == AdvanceControl::Disabled,
                    onclick: move |_| {
                        if let Err(err) = flow.write().advance() {
                            warn!(%err, "advance rejected");
                        }
                    },
                    "Next"
                }
            }

            for (i, html) in call_to_action_html.iter().enumerate() {
                div { key: "{i}", class: "call-to-action", dangerous_inner_html: "{html}" }
            }
        }
    }
}

#[component]
pub fn QuestionCard(
    widget_id: String,
    question: QuestionVm,
    results: bool,
    on_select: EventHandler<usize>,
) -> Element {
    if !question.visible {
        return rsx! {};
    }

    let class = if results {
        "question-container display-results"
    } else {
        "question-container"
    };
    let group = format!("{widget_id}_answer{}", question.index);

    rsx! {
        div { id: "question{question.index}_{widget_id}", class: "{class}",
            div { class: "question-body", dangerous_inner_html: "{question.body_html}" }
            div {
                ul {
                    for answer in question.answers.iter().cloned() {
                        li { key: "{answer.index}", class: answer.class(),
                            label {
                                input {
                                    r#type: "radio",
                                    class: "quiz-choice",
                                    name: "{group}",
                                    value: "{answer.index}",
                                    checked: answer.selected,
                                    disabled: results,
                                    onclick: move |_| on_select.call(answer.index),
                                }
                                span { dangerous_inner_html: "{answer.html}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScoreGaugeView(gauge: GaugeModel) -> Element {
    let fill = gauge.fill_percent();
    let label = gauge.label();

    rsx! {
        div { class: "score-gauge",
            div { class: "gauge-track",
                div { class: "gauge-fill", style: "width: {fill}%;" }
            }
            span { class: "gauge-label", "{label}" }
        }
    }
}
