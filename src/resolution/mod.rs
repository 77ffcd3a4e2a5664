//! Dependency resolution
//!
//! Decides which descriptors to add to a build. Required descriptors are
//! unconditional; optional ones depend on the ecosystems detected in a
//! [`BuildSnapshot`]. Resolution only reads the snapshot, so every rule of a
//! pass sees the build as it was before the pass.

pub mod rules;

pub use rules::{Action, Ecosystem, EcosystemRule, Marker, RuleTable, Signal};

use crate::dependency::Descriptor;
use crate::error::Result;
use tracing::debug;

/// Read-only view of the host build
pub trait BuildSnapshot {
    fn has_bucket(&self, name: &str) -> bool;

    fn has_extension(&self, name: &str) -> bool;

    /// Whether `bucket` (including buckets it inherits from) declares an
    /// artifact with this group and name, any version.
    ///
    /// A bucket that does not exist is an error, an empty one is not.
    fn contains(&self, bucket: &str, group: &str, artifact: &str) -> Result<bool>;
}

/// Descriptors contributed by one detected ecosystem
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EcosystemResolution {
    pub ecosystem: Ecosystem,
    pub descriptors: Vec<Descriptor>,
}

#[derive(Debug, Clone, Default)]
pub struct DependencyResolver {
    rules: RuleTable,
}

impl DependencyResolver {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn resolve_required(&self) -> Vec<Descriptor> {
        self.rules.required().to_vec()
    }

    /// Optional descriptors in rule order, flattened
    pub fn resolve_optional(&self, snapshot: &dyn BuildSnapshot) -> Result<Vec<Descriptor>> {
        Ok(self
            .resolve_ecosystems(snapshot)?
            .into_iter()
            .flat_map(|resolution| resolution.descriptors)
            .collect())
    }

    /// Optional descriptors grouped by the ecosystem that fired.
    ///
    /// Ecosystems are evaluated independently; several may fire in one
    /// pass. An ecosystem that fires but has nothing left to add is omitted.
    pub fn resolve_ecosystems(
        &self,
        snapshot: &dyn BuildSnapshot,
    ) -> Result<Vec<EcosystemResolution>> {
        let mut resolutions = Vec::new();

        for rule in self.rules.ecosystems() {
            if !rule.trigger.detect(snapshot)? {
                debug!(ecosystem = %rule.ecosystem, "Ecosystem not detected");
                continue;
            }

            let descriptors = rule.action.evaluate(snapshot)?;
            debug!(
                ecosystem = %rule.ecosystem,
                count = descriptors.len(),
                "Ecosystem detected"
            );

            if !descriptors.is_empty() {
                resolutions.push(EcosystemResolution {
                    ecosystem: rule.ecosystem,
                    descriptors,
                });
            }
        }

        Ok(resolutions)
    }
}
