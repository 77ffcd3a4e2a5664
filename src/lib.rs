//! mapstruct-plugin - MapStruct wiring for JVM builds
//!
//! Given a snapshot of a build (dependency buckets, applied extensions, compile
//! tasks), this library decides which MapStruct artifacts the build needs and
//! which `-Amapstruct.*` annotation processor arguments to pass to the Java
//! compiler. Lombok, Spring, Camel and Quarkus are recognised and get their
//! integration artifacts added alongside the core ones.
//!
//! # Core Concepts
//!
//! - **Descriptor**: a `group:artifact:version` coordinate bound to a bucket
//! - **Rule table**: markers that detect an ecosystem and the descriptors it adds
//! - **Generator options**: the ten MapStruct processor options and their defaults
//!
//! # Example Usage
//!
//! ```
//! use mapstruct_plugin::{MapstructPlugin, Project};
//!
//! let mut project = Project::java("demo");
//! project
//!     .declare_coordinate("implementation", "org.springframework:spring-core:6.2.5")
//!     .unwrap();
//!
//! let options = project.options().clone();
//! let plan = MapstructPlugin::default().apply(&mut project, &options).unwrap();
//!
//! assert_eq!(plan.descriptors().len(), 5);
//! assert_eq!(project.compile_task("compileJava").unwrap().args().len(), 10);
//! ```
//!
//! # Project Structure
//!
//! - [`dependency`]: coordinates, scopes and the artifact catalog
//! - [`resolution`]: ecosystem detection and dependency resolution
//! - [`options`] and [`arguments`]: generator options and compiler arguments
//! - [`project`]: in-memory build model and manifest files
//! - [`plugin`]: the plan/apply orchestrator

#[macro_use]
pub mod literal_enum;

pub mod arguments;
pub mod cli;
pub mod config;
pub mod dependency;
pub mod error;
pub mod options;
pub mod plugin;
pub mod project;
pub mod resolution;
pub mod util;

pub use arguments::ArgumentSynthesizer;
pub use config::{ConfigError, PluginConfig};
pub use dependency::{Descriptor, Scope};
pub use error::{OptionReadError, PluginError, Result};
pub use options::{GeneratorOption, MapstructOptions, OptionSource, OptionValue};
pub use plugin::{ApplyPlan, ApplyReport, CompilerArgsSink, DependencySink, MapstructPlugin};
pub use project::Project;
pub use resolution::{BuildSnapshot, DependencyResolver, EcosystemResolution, RuleTable};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_exists() {
        assert_eq!(NAME, "mapstruct-plugin");
    }
}
