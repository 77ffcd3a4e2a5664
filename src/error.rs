//! Error types for dependency resolution and compiler argument synthesis
//!
//! Every variant describes a broken build setup. None of them are recovered
//! from inside the crate: an incomplete dependency or argument set would
//! silently change what the annotation processor generates.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    /// A coordinate string did not split into exactly `group:artifact:version`
    #[error("Dependency id '{coordinate}' is invalid")]
    MalformedCoordinate { coordinate: String },

    /// Reading a generator option from the configuration record failed
    #[error("Can't fetch compiler argument for '{option}'")]
    OptionReadFailure {
        option: String,
        #[source]
        reason: OptionReadError,
    },

    /// A dependency bucket referenced by a rule does not exist in the build
    #[error("Dependency bucket '{bucket}' does not exist")]
    InvalidScopeBucket { bucket: String },

    #[error("Compile task '{task}' does not exist")]
    CompileTaskNotFound { task: String },

    #[error("Failed to {action} project manifest {}: {message}", path.display())]
    Manifest {
        action: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure reported by an option source while reading a single value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OptionReadError {
    pub message: String,
}

impl OptionReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl PluginError {
    pub fn malformed_coordinate(coordinate: impl Into<String>) -> Self {
        Self::MalformedCoordinate {
            coordinate: coordinate.into(),
        }
    }

    pub fn invalid_bucket(bucket: impl Into<String>) -> Self {
        Self::InvalidScopeBucket {
            bucket: bucket.into(),
        }
    }

    pub fn manifest(action: &'static str, path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Manifest {
            action,
            path: path.into(),
            message: message.to_string(),
        }
    }
}
