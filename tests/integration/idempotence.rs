//! Idempotence contracts: repeated calls never duplicate bookkeeping

use cadence::engine::{advance, complete_step, init_week, AdvanceOutcome, InitOutcome, StepOutcome};
use cadence::fs::{load_state, read_week_record};
use cadence::models::{PipelineStep, ProjectStatus};

use crate::helpers::fresh_project;

#[test]
fn double_init_appends_one_history_entry() {
    let (_temp, data, mut state) = fresh_project();

    assert!(matches!(
        init_week(&data, &mut state).unwrap(),
        InitOutcome::Created { week: 1, .. }
    ));
    assert!(matches!(
        init_week(&data, &mut state).unwrap(),
        InitOutcome::AlreadyInitialized { week: 1 }
    ));

    assert_eq!(state.history.len(), 1);
    // Persisted state agrees
    let reloaded = load_state(&data).unwrap();
    assert_eq!(reloaded.history.len(), 1);
}

#[test]
fn double_init_leaves_record_bytes_unchanged() {
    let (_temp, data, mut state) = fresh_project();

    init_week(&data, &mut state).unwrap();
    let before = std::fs::read_to_string(data.week_meta_path(1)).unwrap();

    init_week(&data, &mut state).unwrap();
    let after = std::fs::read_to_string(data.week_meta_path(1)).unwrap();

    assert_eq!(before, after);
}

#[test]
fn double_complete_reports_already_complete() {
    let (_temp, data, mut state) = fresh_project();
    init_week(&data, &mut state).unwrap();

    let first = complete_step(&data, &mut state, "ideas_generated").unwrap();
    assert!(matches!(first, StepOutcome::Recorded { completed: 1, .. }));

    let second = complete_step(&data, &mut state, "ideas_generated").unwrap();
    assert_eq!(
        second,
        StepOutcome::AlreadyComplete {
            step: PipelineStep::IdeasGenerated
        }
    );

    let record = read_week_record(&data, 1).unwrap().unwrap();
    assert_eq!(record.completed_steps, vec![PipelineStep::IdeasGenerated]);
}

#[test]
fn init_week_after_completion_stays_terminal() {
    let (_temp, data, mut state) = fresh_project();

    // Advance through the full cycle without ever initializing a week, so
    // no week record exists when the terminal state is reached.
    for _ in 1..=23 {
        advance(&data, &mut state).unwrap();
    }
    assert!(state.is_completed());
    let snapshot = std::fs::read_to_string(data.state_path()).unwrap();

    let outcome = init_week(&data, &mut state).unwrap();
    assert_eq!(outcome, InitOutcome::CycleCompleted);
    assert_eq!(state.status, ProjectStatus::Completed);
    assert!(state.history.is_empty());

    // The terminal state was not persisted over
    let after = std::fs::read_to_string(data.state_path()).unwrap();
    assert_eq!(snapshot, after);
}

#[test]
fn advance_after_completion_is_a_noop() {
    let (_temp, data, mut state) = fresh_project();

    for _ in 1..=23 {
        advance(&data, &mut state).unwrap();
    }
    assert!(state.is_completed());
    let snapshot = std::fs::read_to_string(data.state_path()).unwrap();

    let outcome = advance(&data, &mut state).unwrap();
    assert_eq!(outcome, AdvanceOutcome::AlreadyCompleted);

    // Nothing was persisted by the no-op
    let after = std::fs::read_to_string(data.state_path()).unwrap();
    assert_eq!(snapshot, after);
}
