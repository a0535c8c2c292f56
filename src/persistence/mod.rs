pub mod config;
pub mod files;
pub mod store;

pub use config::{load_config, save_config, AppConfig};
pub use files::{config_file, ensure_data_dir, init_local_data_dir, log_file, todos_file};
#[cfg(test)]
pub use store::MemoryStore;
pub use store::{JsonFileStore, Storage};
