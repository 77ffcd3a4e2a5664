//! Rule table for optional ecosystem detection
//!
//! Rules are plain data: each ecosystem pairs a [`Marker`] (any of several
//! signals) with an [`Action`] describing what to add when it fires. The
//! table is built once and never mutated.

use super::BuildSnapshot;
use crate::dependency::catalog::{self, CatalogEntry};
use crate::dependency::Descriptor;
use crate::error::Result;
use std::fmt;

/// Optional ecosystem the plugin adapts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Ecosystem {
    Lombok,
    Spring,
    Camel,
}

impl Ecosystem {
    pub fn name(&self) -> &'static str {
        match self {
            Ecosystem::Lombok => "Lombok",
            Ecosystem::Spring => "Spring",
            Ecosystem::Camel => "Camel",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single observable indicator in the host build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A dependency bucket with this name exists
    Bucket(String),
    /// A build extension with this name is installed
    Extension(String),
    /// An artifact with the same group and name is declared in the
    /// descriptor's bucket, any version
    Library(Descriptor),
}

impl Signal {
    pub fn library(entry: &CatalogEntry) -> Self {
        Signal::Library(entry.descriptor())
    }

    pub fn is_present(&self, snapshot: &dyn BuildSnapshot) -> Result<bool> {
        match self {
            Signal::Bucket(name) => Ok(snapshot.has_bucket(name)),
            Signal::Extension(name) => Ok(snapshot.has_extension(name)),
            Signal::Library(descriptor) => snapshot.contains(
                descriptor.scope().as_str(),
                descriptor.group(),
                descriptor.artifact(),
            ),
        }
    }
}

/// Named disjunction of signals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub name: &'static str,
    pub signals: Vec<Signal>,
}

impl Marker {
    pub fn new(name: &'static str, signals: Vec<Signal>) -> Self {
        Self { name, signals }
    }

    /// True when any signal is present. Signals are checked in order and
    /// checking stops at the first hit.
    pub fn detect(&self, snapshot: &dyn BuildSnapshot) -> Result<bool> {
        for signal in &self.signals {
            if signal.is_present(snapshot)? {
                tracing::debug!(marker = self.name, ?signal, "Marker detected");
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add the descriptor unless its artifact is already declared in its bucket
    AddMissing(Descriptor),
    /// Add every descriptor, in order
    AddAll(Vec<Descriptor>),
    /// Add the descriptor of the first variant whose marker is detected,
    /// or the fallback when none is
    FirstMatch {
        variants: Vec<(Marker, Descriptor)>,
        fallback: Descriptor,
    },
}

impl Action {
    pub fn evaluate(&self, snapshot: &dyn BuildSnapshot) -> Result<Vec<Descriptor>> {
        match self {
            Action::AddMissing(descriptor) => {
                let declared = snapshot.contains(
                    descriptor.scope().as_str(),
                    descriptor.group(),
                    descriptor.artifact(),
                )?;
                if declared {
                    tracing::debug!(coordinate = descriptor.coordinate(), "Already declared");
                    Ok(Vec::new())
                } else {
                    Ok(vec![descriptor.clone()])
                }
            }
            Action::AddAll(descriptors) => Ok(descriptors.clone()),
            Action::FirstMatch { variants, fallback } => {
                for (marker, descriptor) in variants {
                    if marker.detect(snapshot)? {
                        return Ok(vec![descriptor.clone()]);
                    }
                }
                Ok(vec![fallback.clone()])
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemRule {
    pub ecosystem: Ecosystem,
    pub trigger: Marker,
    pub action: Action,
}

/// Immutable set of required dependencies and ecosystem rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    required: Vec<Descriptor>,
    ecosystems: Vec<EcosystemRule>,
}

impl RuleTable {
    pub fn new(required: Vec<Descriptor>, ecosystems: Vec<EcosystemRule>) -> Self {
        Self {
            required,
            ecosystems,
        }
    }

    /// Rules for MapStruct with Lombok, Spring and Camel integrations
    pub fn mapstruct() -> Self {
        let lombok = EcosystemRule {
            ecosystem: Ecosystem::Lombok,
            trigger: Marker::new(
                "lombok",
                vec![
                    Signal::Bucket(catalog::LOMBOK_BUCKET.to_string()),
                    Signal::library(&catalog::LOMBOK),
                ],
            ),
            action: Action::AddMissing(catalog::LOMBOK_MAPSTRUCT_BINDING.descriptor()),
        };

        let mut spring_signals = spring_boot_marker().signals;
        spring_signals.push(Signal::library(&catalog::SPRING_CORE));

        let spring = EcosystemRule {
            ecosystem: Ecosystem::Spring,
            trigger: Marker::new("spring", spring_signals),
            action: Action::AddAll(vec![
                catalog::MAPSTRUCT_SPRING_EXTENSIONS.descriptor(),
                catalog::MAPSTRUCT_SPRING_ANNOTATIONS.descriptor(),
                catalog::MAPSTRUCT_SPRING_TEST_EXTENSIONS.descriptor(),
            ]),
        };

        let camel = EcosystemRule {
            ecosystem: Ecosystem::Camel,
            trigger: Marker::new("camel", vec![Signal::library(&catalog::CAMEL_CORE)]),
            action: Action::FirstMatch {
                variants: vec![
                    (
                        spring_boot_marker(),
                        catalog::CAMEL_MAPSTRUCT_STARTER.descriptor(),
                    ),
                    (quarkus_marker(), catalog::CAMEL_QUARKUS_MAPSTRUCT.descriptor()),
                ],
                fallback: catalog::CAMEL_MAPSTRUCT.descriptor(),
            },
        };

        Self::new(
            vec![
                catalog::MAPSTRUCT.descriptor(),
                catalog::MAPSTRUCT_PROCESSOR.descriptor(),
            ],
            vec![lombok, spring, camel],
        )
    }

    pub fn required(&self) -> &[Descriptor] {
        &self.required
    }

    pub fn ecosystems(&self) -> &[EcosystemRule] {
        &self.ecosystems
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::mapstruct()
    }
}

fn spring_boot_marker() -> Marker {
    Marker::new(
        "spring-boot",
        vec![
            Signal::Bucket(catalog::SPRING_BOOT_BUCKET.to_string()),
            Signal::library(&catalog::SPRING_BOOT),
        ],
    )
}

fn quarkus_marker() -> Marker {
    Marker::new(
        "quarkus",
        vec![
            Signal::Extension(catalog::QUARKUS_EXTENSION.to_string()),
            Signal::library(&catalog::QUARKUS_CORE),
        ],
    )
}
