//! Full 23-week cycle scenarios

use cadence::commands::status;
use cadence::engine::{advance, complete_step, init_week};
use cadence::fs::{load_state, read_week_record};
use cadence::models::{chapter_for_week, PipelineStep, ProjectStatus, CHAPTERS};

use crate::helpers::fresh_project;

#[test]
fn monotonic_week_progression_walks_the_catalog() {
    let (_temp, data, mut state) = fresh_project();

    for week in 1..23u32 {
        assert_eq!(state.current_week, week);
        advance(&data, &mut state).unwrap();
        assert_eq!(state.current_week, week + 1);
        assert_eq!(state.current_chapter, chapter_for_week(week + 1).unwrap());
        assert_eq!(state.status, ProjectStatus::Pending);
    }
}

#[test]
fn terminal_state_stays_on_final_week() {
    let (_temp, data, mut state) = fresh_project();

    for _ in 1..=23 {
        advance(&data, &mut state).unwrap();
    }

    assert_eq!(state.status, ProjectStatus::Completed);
    assert_eq!(state.current_week, 23);
    assert_eq!(state.current_chapter, CHAPTERS[22]);

    let persisted = load_state(&data).unwrap();
    assert_eq!(persisted.status, ProjectStatus::Completed);
    assert_eq!(persisted.current_week, 23);
}

#[test]
fn six_step_week_reports_full_completion() {
    let (_temp, data, mut state) = fresh_project();
    init_week(&data, &mut state).unwrap();

    for step in PipelineStep::ALL {
        complete_step(&data, &mut state, step.name()).unwrap();
    }

    let record = read_week_record(&data, 1).unwrap().unwrap();
    assert_eq!(record.progress(), 1.0);
    assert!(record.remaining_steps().is_empty());

    let dashboard = status::render(&state, Some(&record));
    assert!(dashboard.contains("6 of 6 steps complete"));
}

#[test]
fn full_cycle_with_initialized_weeks_closes_every_history_entry() {
    let (_temp, data, mut state) = fresh_project();

    for _ in 1..=23 {
        init_week(&data, &mut state).unwrap();
        advance(&data, &mut state).unwrap();
    }

    assert_eq!(state.history.len(), 23);
    for (i, entry) in state.history.iter().enumerate() {
        assert_eq!(entry.week, i as u32 + 1);
        assert_eq!(entry.chapter, CHAPTERS[i]);
        assert!(entry.completed_at.is_some(), "week {} left open", entry.week);
    }

    // Every week record got finalized too
    for week in 1..=23 {
        let record = read_week_record(&data, week).unwrap().unwrap();
        assert!(record.completed_at.is_some());
    }
}
