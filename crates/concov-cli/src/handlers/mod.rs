//! Command handlers - extracted from main.rs for testability

pub mod replay;
pub mod reset;
pub mod summary;

pub use replay::execute_replay;
pub use reset::execute_reset;
pub use summary::{coverage_line, execute_summary};
