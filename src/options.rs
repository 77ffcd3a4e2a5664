//! Generator options
//!
//! [`MapstructOptions`] is the configuration record handed to the
//! annotation processor. [`GeneratorOption`] enumerates its fields in
//! declaration order; that order is the order compiler arguments are emitted
//! in. Option names match the processor's `SupportedOptions`, see
//! <https://mapstruct.org/documentation/stable/reference/html/#configuration-options>.

use crate::error::OptionReadError;
use serde::{Deserialize, Serialize};
use std::fmt;

crate::define_literal_enum! {
    /// Component model of generated mappers
    ComponentModel {
        Default => "default",
        Cdi => "cdi",
        Spring => "spring",
        Jsr330 => "jsr330",
        Jakarta => "jakarta",
        JakartaCdi => "jakarta-cdi",
    }
}

crate::define_literal_enum! {
    InjectionStrategy {
        Field => "field",
        Constructor => "constructor",
        Setter => "setter",
    }
}

crate::define_literal_enum! {
    /// How unmapped properties are reported
    ReportingPolicy {
        Ignore => "IGNORE",
        Warn => "WARN",
        Error => "ERROR",
    }
}

crate::define_literal_enum! {
    NullValueMappingStrategy {
        ReturnNull => "RETURN_NULL",
        ReturnDefault => "RETURN_DEFAULT",
    }
}

impl Default for ComponentModel {
    fn default() -> Self {
        ComponentModel::Default
    }
}

impl Default for InjectionStrategy {
    fn default() -> Self {
        InjectionStrategy::Field
    }
}

impl Default for ReportingPolicy {
    fn default() -> Self {
        ReportingPolicy::Warn
    }
}

impl Default for NullValueMappingStrategy {
    fn default() -> Self {
        NullValueMappingStrategy::ReturnNull
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapstructOptions {
    pub suppress_generator_timestamp: bool,
    pub verbose: bool,
    pub suppress_generator_version_info_comment: bool,
    pub default_component_model: ComponentModel,
    pub default_injection_strategy: InjectionStrategy,
    pub unmapped_target_policy: ReportingPolicy,
    pub unmapped_source_policy: ReportingPolicy,
    pub disable_builders: bool,
    pub null_value_iterable_mapping_strategy: NullValueMappingStrategy,
    pub null_value_map_mapping_strategy: NullValueMappingStrategy,
}

/// One field of [`MapstructOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorOption {
    SuppressGeneratorTimestamp,
    Verbose,
    SuppressGeneratorVersionInfoComment,
    DefaultComponentModel,
    DefaultInjectionStrategy,
    UnmappedTargetPolicy,
    UnmappedSourcePolicy,
    DisableBuilders,
    NullValueIterableMappingStrategy,
    NullValueMapMappingStrategy,
}

impl GeneratorOption {
    /// Every option, in declaration order
    pub const ALL: [GeneratorOption; 10] = [
        GeneratorOption::SuppressGeneratorTimestamp,
        GeneratorOption::Verbose,
        GeneratorOption::SuppressGeneratorVersionInfoComment,
        GeneratorOption::DefaultComponentModel,
        GeneratorOption::DefaultInjectionStrategy,
        GeneratorOption::UnmappedTargetPolicy,
        GeneratorOption::UnmappedSourcePolicy,
        GeneratorOption::DisableBuilders,
        GeneratorOption::NullValueIterableMappingStrategy,
        GeneratorOption::NullValueMapMappingStrategy,
    ];

    /// Name as understood by the annotation processor
    pub fn name(self) -> &'static str {
        match self {
            GeneratorOption::SuppressGeneratorTimestamp => "suppressGeneratorTimestamp",
            GeneratorOption::Verbose => "verbose",
            GeneratorOption::SuppressGeneratorVersionInfoComment => {
                "suppressGeneratorVersionInfoComment"
            }
            GeneratorOption::DefaultComponentModel => "defaultComponentModel",
            GeneratorOption::DefaultInjectionStrategy => "defaultInjectionStrategy",
            GeneratorOption::UnmappedTargetPolicy => "unmappedTargetPolicy",
            GeneratorOption::UnmappedSourcePolicy => "unmappedSourcePolicy",
            GeneratorOption::DisableBuilders => "disableBuilders",
            GeneratorOption::NullValueIterableMappingStrategy => {
                "nullValueIterableMappingStrategy"
            }
            GeneratorOption::NullValueMapMappingStrategy => "nullValueMapMappingStrategy",
        }
    }
}

impl fmt::Display for GeneratorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of an option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag(bool),
    Literal(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag(value) => write!(f, "{}", value),
            OptionValue::Literal(value) => f.write_str(value),
        }
    }
}

/// Anything the generator options can be read from.
///
/// Reads may fail, e.g. when values come from a lazily evaluated or
/// external configuration object.
pub trait OptionSource {
    fn read(&self, option: GeneratorOption) -> Result<OptionValue, OptionReadError>;
}

impl MapstructOptions {
    pub fn value(&self, option: GeneratorOption) -> OptionValue {
        match option {
            GeneratorOption::SuppressGeneratorTimestamp => {
                OptionValue::Flag(self.suppress_generator_timestamp)
            }
            GeneratorOption::Verbose => OptionValue::Flag(self.verbose),
            GeneratorOption::SuppressGeneratorVersionInfoComment => {
                OptionValue::Flag(self.suppress_generator_version_info_comment)
            }
            GeneratorOption::DefaultComponentModel => {
                literal(&self.default_component_model)
            }
            GeneratorOption::DefaultInjectionStrategy => {
                literal(&self.default_injection_strategy)
            }
            GeneratorOption::UnmappedTargetPolicy => literal(&self.unmapped_target_policy),
            GeneratorOption::UnmappedSourcePolicy => literal(&self.unmapped_source_policy),
            GeneratorOption::DisableBuilders => OptionValue::Flag(self.disable_builders),
            GeneratorOption::NullValueIterableMappingStrategy => {
                literal(&self.null_value_iterable_mapping_strategy)
            }
            GeneratorOption::NullValueMapMappingStrategy => {
                literal(&self.null_value_map_mapping_strategy)
            }
        }
    }
}

impl OptionSource for MapstructOptions {
    fn read(&self, option: GeneratorOption) -> Result<OptionValue, OptionReadError> {
        Ok(self.value(option))
    }
}

fn literal(value: &impl fmt::Display) -> OptionValue {
    OptionValue::Literal(value.to_string())
}
