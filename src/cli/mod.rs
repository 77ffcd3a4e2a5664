pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{ApplyArgs, CliArgs, Commands, PlanArgs};
pub use output::{OutputFormat, OutputFormatter};
