//! Status dashboard
//!
//! Pure read: renders cycle progress and the current week's step checklist.
//! The only "failure" it tolerates is a missing week record, which renders as
//! an uninitialized notice.

use anyhow::Result;
use colored::Colorize;

use crate::fs::{load_state, read_week_record, DataDir};
use crate::models::{PipelineStep, ProjectState, WeekRecord};

const BAR_WIDTH: usize = 20;

pub fn execute(data: &DataDir) -> Result<()> {
    let state = load_state(data)?;
    let record = read_week_record(data, state.current_week)?;
    print!("{}", render(&state, record.as_ref()));
    Ok(())
}

/// Render the dashboard. Separated from `execute` so it stays a pure
/// function of the loaded state.
pub fn render(state: &ProjectState, record: Option<&WeekRecord>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "cadence Status Dashboard".bold().blue()));
    out.push_str(&format!("{}\n", "=".repeat(50)));

    let progress = (state.current_week - 1) as f64 / state.total_weeks as f64;
    let filled = (progress * BAR_WIDTH as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

    out.push_str(&format!(
        "  Week:     {}/{} ({})\n",
        state.current_week, state.total_weeks, state.status
    ));
    out.push_str(&format!("  Chapter:  {}\n", state.current_chapter));
    out.push_str(&format!("  Cycle:    [{bar}] {:.0}%\n", progress * 100.0));

    out.push_str(&format!("\n{}\n", "Pipeline".bold()));
    match record {
        Some(record) => {
            for step in PipelineStep::ALL {
                let mark = if record.is_step_complete(step) {
                    "✓".green().to_string()
                } else {
                    "·".dimmed().to_string()
                };
                out.push_str(&format!("  {mark} {step}\n"));
            }
            out.push_str(&format!(
                "  {} of {} steps complete\n",
                record.completed_steps.len(),
                PipelineStep::ALL.len()
            ));
        }
        None => {
            out.push_str(&format!(
                "  Week {} not initialized. Run 'cadence init-week' first.\n",
                state.current_week
            ));
        }
    }

    out
}
