//! Command handlers for the buildnorm binary

pub mod clean;
pub mod plan;

pub use clean::cmd_clean;
pub use plan::cmd_plan;
