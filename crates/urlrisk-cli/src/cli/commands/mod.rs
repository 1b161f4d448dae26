//! CLI command handlers. Each command is in its own file.

mod check;
mod checks;
mod completions;
mod config;

pub use check::{run_check, CheckOptions};
pub use checks::run_checks;
pub use completions::run_completions;
pub use config::run_config;
