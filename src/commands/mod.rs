pub mod analyze;
pub mod complete_step;
pub mod context;
pub mod init_week;
pub mod next;
pub mod status;
pub mod transcript;
pub mod trends;
