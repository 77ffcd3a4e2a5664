//! Compiler argument synthesis
//!
//! Turns generator options into `-A<prefix>.<name>=<value>` style arguments,
//! one per option, in declaration order.

use crate::error::{PluginError, Result};
use crate::options::{GeneratorOption, OptionSource, OptionValue};

pub const DEFAULT_PREFIX: &str = "-Amapstruct";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSynthesizer {
    prefix: String,
}

impl ArgumentSynthesizer {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Renders every option of `source`.
    ///
    /// Stops at the first option that cannot be read; nothing is returned
    /// for the options before it.
    pub fn synthesize(&self, source: &dyn OptionSource) -> Result<Vec<String>> {
        let mut arguments = Vec::with_capacity(GeneratorOption::ALL.len());

        for option in GeneratorOption::ALL {
            let value = source
                .read(option)
                .map_err(|reason| PluginError::OptionReadFailure {
                    option: option.name().to_string(),
                    reason,
                })?;
            arguments.push(self.render(option, &value));
        }

        Ok(arguments)
    }

    pub fn render(&self, option: GeneratorOption, value: &OptionValue) -> String {
        format!("{}.{}={}", self.prefix, option.name(), value)
    }
}

impl Default for ArgumentSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
