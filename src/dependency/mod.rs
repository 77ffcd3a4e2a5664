//! Dependency descriptors
//!
//! A [`Descriptor`] names one published component (`group:artifact:version`)
//! together with the bucket of the host build it belongs to. Descriptors
//! are value objects: built once, never mutated.
//!
//! Two notions of sameness exist and both are needed:
//!
//! - `==` compares scope, group, artifact and version.
//! - [`Descriptor::same_artifact`] compares group and artifact only. Presence
//!   checks use this one, so any declared version of an artifact satisfies a
//!   requirement for it.

pub mod catalog;

use crate::error::{PluginError, Result};
use std::fmt;

const SEPARATOR: char = ':';

crate::define_literal_enum! {
    /// Bucket of the host build a dependency is declared in
    Scope {
        /// Compile-time annotation processing path
        AnnotationProcessor => "annotationProcessor",
        /// Compile and runtime library
        Implementation => "implementation",
        /// Test-only library
        TestImplementation => "testImplementation",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    scope: Scope,
    group: String,
    artifact: String,
    version: String,
    coordinate: String,
}

impl Descriptor {
    pub fn new(
        scope: Scope,
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let group = group.into();
        let artifact = artifact.into();
        let version = version.into();
        let coordinate = [group.as_str(), artifact.as_str(), version.as_str()].join(":");

        Self {
            scope,
            group,
            artifact,
            version,
            coordinate,
        }
    }

    /// Builds a descriptor from a `group:artifact:version` literal.
    ///
    /// Segments are taken as-is: no trimming, no defaults. Anything other
    /// than exactly three segments is rejected with the offending literal.
    pub fn parse(scope: Scope, coordinate: &str) -> Result<Self> {
        let segments: Vec<&str> = coordinate.split(SEPARATOR).collect();

        match segments.as_slice() {
            [group, artifact, version] => Ok(Self {
                scope,
                group: (*group).to_string(),
                artifact: (*artifact).to_string(),
                version: (*version).to_string(),
                coordinate: coordinate.to_string(),
            }),
            _ => Err(PluginError::malformed_coordinate(coordinate)),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn coordinate(&self) -> &str {
        &self.coordinate
    }

    /// Weak match on `(group, artifact)`, ignoring version and scope
    pub fn same_artifact(&self, group: &str, artifact: &str) -> bool {
        self.group == group && self.artifact == artifact
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.scope, self.coordinate)
    }
}

impl serde::Serialize for Descriptor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Descriptor", 2)?;
        state.serialize_field("scope", &self.scope)?;
        state.serialize_field("coordinate", &self.coordinate)?;
        state.end()
    }
}
