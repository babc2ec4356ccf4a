pub mod config;
pub mod data_dir;
pub mod locking;
pub mod state_file;
pub mod week_files;

pub use config::{load_config, Config};
pub use data_dir::DataDir;
pub use state_file::{load_state, save_state};
pub use week_files::{read_week_record, write_week_record};
