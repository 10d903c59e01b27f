use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::QuizWidget;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    rsx! {
        document::Stylesheet { href: asset!("/assets/quiz.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            h1 { "{title}" }
            if ctx.quizzes().is_empty() {
                p { "No quizzes loaded." }
            }
            for (i, content) in ctx.quizzes().iter().enumerate() {
                QuizWidget {
                    key: "{i}",
                    widget_id: format!("quiz{i}"),
                    content: content.clone(),
                }
            }
        }
    }
}
