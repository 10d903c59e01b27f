pub mod app;
pub mod context;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, build_app_context};
pub use views::QuizWidget;
