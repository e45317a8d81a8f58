//! CLI output formatting

use std::sync::Mutex;
use std::time::Duration;

use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use crate::core::state::PipelineStatus;
use crate::execution::runner::ExecutionEvent;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Create a spinner for the stage currently running
pub fn create_spinner(stage: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap(),
    );
    spinner.set_prefix(stage.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Terminal renderer for execution events.
///
/// One spinner tracks the running stage and shows its latest progress
/// message; terminal stage results print as lines.
pub fn console_event_handler() -> impl Fn(ExecutionEvent) + Send + Sync {
    let active: Mutex<Option<ProgressBar>> = Mutex::new(None);

    move |event| {
        let mut active = active.lock().unwrap();
        match event {
            ExecutionEvent::PipelineStarted { .. } => {}
            ExecutionEvent::StageStarted { stage } => {
                *active = Some(create_spinner(&stage));
            }
            ExecutionEvent::StageProgress { message, .. } => match active.as_ref() {
                Some(spinner) => spinner.set_message(message),
                None => println!("{} {}", INFO, style(message).dim()),
            },
            ExecutionEvent::StageSkipped { stage } => {
                println!("{} {} {}", INFO, style(stage).bold(), style("[skipped]").dim());
            }
            ExecutionEvent::StageCompleted { stage } => {
                if let Some(spinner) = active.take() {
                    spinner.finish_and_clear();
                }
                println!("{} {}", CHECK, style(stage).green());
            }
            ExecutionEvent::StageFailed { stage, error } => {
                if let Some(spinner) = active.take() {
                    spinner.finish_and_clear();
                }
                println!("{} {}: {}", CROSS, style(stage).red(), error);
            }
            ExecutionEvent::PipelineCompleted { status } => match status {
                PipelineStatus::Succeeded => {
                    println!("\n{} {}", CHECK, style("Deploy complete").green().bold());
                }
                PipelineStatus::Failed => {
                    println!("\n{} {}", CROSS, style("Deploy failed").red().bold());
                }
                _ => {}
            },
        }
    }
}
