pub mod commands;
pub mod engine;
pub mod error;
pub mod fs;
pub mod models;
pub mod process;
