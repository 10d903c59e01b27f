use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuizContent;
use services::load_quiz_content;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, build_app_context};

#[derive(Debug, Parser)]
#[command(name = "quiz")]
#[command(about = "Desktop quiz widgets", long_about = None)]
struct Cli {
    /// Quiz content JSON file. Repeat (or comma-separate) to mount several quizzes.
    #[arg(
        long = "quiz",
        value_name = "PATH",
        env = "QUIZ_CONTENT",
        value_delimiter = ',',
        required = true
    )]
    quizzes: Vec<PathBuf>,

    /// Window and page title.
    #[arg(long, default_value = "Quiz")]
    title: String,
}

fn load_all(paths: &[PathBuf]) -> anyhow::Result<Vec<QuizContent>> {
    paths
        .iter()
        .map(|path| load_one(path))
        .collect()
}

fn load_one(path: &Path) -> anyhow::Result<QuizContent> {
    let content = load_quiz_content(path)
        .with_context(|| format!("cannot load quiz {}", path.display()))?;
    info!(path = %path.display(), questions = content.len(), "quiz loaded");
    Ok(content)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    // Refuse to start with any invalid quiz rather than mounting a broken widget.
    let quizzes = load_all(&cli.quizzes)?;
    let context = build_app_context(cli.title.clone(), quizzes);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(cli.title.as_str())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_and_comma_separated_quizzes_are_collected() {
        let cli = Cli::try_parse_from([
            "quiz",
            "--quiz",
            "a.json,b.json",
            "--quiz",
            "c.json",
            "--title",
            "Lesson 3",
        ])
        .unwrap();
        assert_eq!(
            cli.quizzes,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("c.json")
            ]
        );
        assert_eq!(cli.title, "Lesson 3");
    }

    #[test]
    fn missing_quiz_file_is_reported_with_path() {
        let path = std::env::temp_dir().join("quiz-app-missing-content.json");
        let err = load_all(std::slice::from_ref(&path)).unwrap_err();
        assert!(
            format!("{err:#}").contains("quiz-app-missing-content.json"),
            "{err:#}"
        );
    }

    #[test]
    fn bundled_demo_quiz_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/science.json");
        let content = load_one(&path).unwrap();
        assert_eq!(content.len(), 4);
    }
}
