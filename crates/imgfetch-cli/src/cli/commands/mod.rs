//! CLI command handlers.

mod fetch;
mod name;

pub use fetch::run_fetch;
pub use name::run_name;
