//! Initialize the current week's directory and record

use anyhow::Result;
use colored::Colorize;

use crate::engine::{self, InitOutcome};
use crate::fs::{load_state, DataDir};

pub fn execute(data: &DataDir) -> Result<()> {
    let mut state = load_state(data)?;

    match engine::init_week(data, &mut state)? {
        InitOutcome::Created { week, chapter } => {
            println!(
                "{} Week {week} initialized: {chapter}",
                "✓".green().bold()
            );
            println!("  {}", data.week_dir(week).display().to_string().dimmed());
        }
        InitOutcome::AlreadyInitialized { week } => {
            println!(
                "{} Week {week} is already initialized: {}",
                "→".yellow(),
                data.week_dir(week).display()
            );
        }
        InitOutcome::CycleCompleted => {
            println!(
                "{} Full {}-week cycle already completed; no week to initialize.",
                "→".yellow(),
                state.total_weeks
            );
        }
    }

    Ok(())
}
