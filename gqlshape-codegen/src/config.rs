//! Generation configuration.

use crate::error::CodegenError;
use gqlshape_schema::{ScalarMap, default_scalar_map};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options recognized by the generator.
///
/// Unknown keys are ignored when deserializing, so host configuration that
/// carries emission-only options (such as formatting toggles) can be passed
/// through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodegenConfig {
    /// Scalar name to target type expression. Entries overlay the defaults.
    pub scalars: BTreeMap<String, String>,
    /// Restrict emitted input objects to those reachable from operations.
    pub filter_input_types: bool,
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the JSON is malformed or mistyped.
    pub fn from_json(json: &str) -> Result<Self, CodegenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds or overrides a scalar mapping.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.scalars.insert(name.into(), target.into());
        self
    }

    /// Enables or disables input type filtering.
    #[must_use]
    pub fn filter_input_types(mut self, enabled: bool) -> Self {
        self.filter_input_types = enabled;
        self
    }

    /// Returns the default scalar map overlaid with the configured scalars.
    #[must_use]
    pub fn scalar_map(&self) -> ScalarMap {
        let mut map = default_scalar_map();
        map.extend(self.scalars.iter().map(|(k, v)| (k.clone(), v.clone())));
        map
    }
}
