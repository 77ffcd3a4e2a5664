//! Plugin configuration
//!
//! Settings that shape how the plugin runs, loaded from environment variables
//! with defaults. Generator options are not configured here; they travel with
//! the project (see [`crate::options::MapstructOptions`]).
//!
//! # Environment Variables
//!
//! - `MAPSTRUCT_PLUGIN_LOG_LEVEL`: trace|debug|info|warn|error - default: "info"
//! - `MAPSTRUCT_PLUGIN_COMPILE_TASK`: compile task receiving the arguments - default: "compileJava"
//! - `MAPSTRUCT_PLUGIN_ARG_PREFIX`: prefix of every compiler argument - default: "-Amapstruct"

use crate::arguments::DEFAULT_PREFIX;
use crate::project::COMPILE_JAVA_TASK;
use std::env;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";

pub const LOG_LEVEL_VAR: &str = "MAPSTRUCT_PLUGIN_LOG_LEVEL";
pub const COMPILE_TASK_VAR: &str = "MAPSTRUCT_PLUGIN_COMPILE_TASK";
pub const ARG_PREFIX_VAR: &str = "MAPSTRUCT_PLUGIN_ARG_PREFIX";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub log_level: String,
    pub compile_task: String,
    pub arg_prefix: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        let log_level = env::var(LOG_LEVEL_VAR)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let compile_task =
            env::var(COMPILE_TASK_VAR).unwrap_or_else(|_| COMPILE_JAVA_TASK.to_string());

        let arg_prefix = env::var(ARG_PREFIX_VAR).unwrap_or_else(|_| DEFAULT_PREFIX.to_string());

        Self {
            log_level,
            compile_task,
            arg_prefix,
        }
    }
}

impl PluginConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.compile_task.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Compile task name cannot be empty".to_string(),
            ));
        }

        if self.arg_prefix.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Argument prefix cannot be empty".to_string(),
            ));
        }
        if self.arg_prefix.contains('=') || self.arg_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationFailed(format!(
                "Argument prefix '{}' cannot contain '=' or whitespace",
                self.arg_prefix
            )));
        }

        Ok(())
    }
}
