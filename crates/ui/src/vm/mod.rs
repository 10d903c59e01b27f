mod gauge_vm;
mod markdown_vm;
mod quiz_frame;
mod quiz_vm;

pub use gauge_vm::GaugeModel;
pub use markdown_vm::{inline_markup_to_html, markup_to_html, sanitize_html};
pub use quiz_frame::{AdvanceControl, QuizFrame};
pub use quiz_vm::{AnswerVm, QuestionVm, QuizWidgetVm, WidgetFlow, map_quiz_widget, mount_flow};
