mod config;
mod display;
mod hash;

pub use config::run_config;
pub use display::run_display;
pub use hash::run_hash;
