//! Mark a pipeline step as complete for the current week

use anyhow::Result;
use colored::Colorize;

use crate::engine::{self, StepOutcome};
use crate::fs::{load_state, DataDir};

pub fn execute(data: &DataDir, step_name: &str) -> Result<()> {
    let mut state = load_state(data)?;

    match engine::complete_step(data, &mut state, step_name)? {
        StepOutcome::Recorded {
            step,
            completed,
            total,
            remaining,
        } => {
            let percent = completed as f64 / total as f64 * 100.0;
            println!("{} '{step}' complete ({percent:.0}%)", "✓".green().bold());
            if remaining.is_empty() {
                println!(
                    "{} Week {} pipeline fully complete!",
                    "★".green(),
                    state.current_week
                );
            } else {
                let names: Vec<&str> = remaining.iter().map(|s| s.name()).collect();
                println!("  Remaining: {}", names.join(", ").dimmed());
            }
        }
        StepOutcome::AlreadyComplete { step } => {
            println!("{} '{step}' was already complete", "→".yellow());
        }
    }

    Ok(())
}
