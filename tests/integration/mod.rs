//! Integration tests for the weekly pipeline state machine
//!
//! These tests verify end-to-end behavior of the core lifecycle: fresh start,
//! week initialization, step completion idempotence, forced advancement, and
//! full-cycle termination, all against real file-backed state.

pub mod full_cycle;
pub mod helpers;
pub mod idempotence;
pub mod state_machine;
