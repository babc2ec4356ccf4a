//! Advance the cycle to the next week

use anyhow::Result;
use colored::Colorize;

use crate::engine::{self, AdvanceOutcome};
use crate::fs::{load_state, DataDir};
use crate::models::PipelineStep;

pub fn execute(data: &DataDir) -> Result<()> {
    let mut state = load_state(data)?;
    let closing_week = state.current_week;

    match engine::advance(data, &mut state)? {
        AdvanceOutcome::Advanced {
            week,
            chapter,
            incomplete,
        } => {
            warn_incomplete(closing_week, &incomplete);
            println!("{} Advanced to week {week}: {chapter}", "→".green().bold());
        }
        AdvanceOutcome::CycleCompleted { incomplete } => {
            warn_incomplete(closing_week, &incomplete);
            println!(
                "{} Full {}-week cycle complete!",
                "★".green().bold(),
                state.total_weeks
            );
        }
        AdvanceOutcome::AlreadyCompleted => {
            println!(
                "{} Cycle already completed at week {}; nothing to advance.",
                "→".yellow(),
                state.current_week
            );
        }
    }

    Ok(())
}

fn warn_incomplete(week: u32, incomplete: &[PipelineStep]) {
    if incomplete.is_empty() {
        return;
    }
    let names: Vec<&str> = incomplete.iter().map(|s| s.name()).collect();
    println!(
        "{} Week {week} has incomplete steps: {}",
        "⚠".yellow().bold(),
        names.join(", ")
    );
    println!("  Forcing transition anyway.");
}
