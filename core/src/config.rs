#![deny(missing_docs)]

//! # Builder Configuration
//!
//! Policies that decide how repeated registrations merge into a document.
//! A config can be built in code or loaded from YAML / JSON.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Tag applied to routes registered without one.
pub const DEFAULT_TAG: &str = "default";

/// How `add_route` treats a tag already present on the operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagPolicy {
    /// Keep each tag at most once per operation.
    #[default]
    Deduplicate,
    /// Append on every registration, duplicates included.
    Accumulate,
}

/// How `add_param` treats a parameter name already present on the operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamPolicy {
    /// Upsert by name: the new parameter replaces the old one in place.
    #[default]
    Replace,
    /// Fail with `AppError::DuplicateParameter`.
    Reject,
    /// Keep both entries.
    Append,
}

/// Settings for a document build session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Tag used when a route is registered with an empty tag.
    pub default_tag: String,
    /// Tag merge policy.
    pub tag_policy: TagPolicy,
    /// Parameter merge policy.
    pub param_policy: ParamPolicy,
    /// Copy example values into the emitted `example` fields.
    pub emit_examples: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            tag_policy: TagPolicy::default(),
            param_policy: ParamPolicy::default(),
            emit_examples: false,
        }
    }
}

impl BuilderConfig {
    /// Loads a config from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> AppResult<Self> {
        let config: BuilderConfig = serde_yaml::from_str(yaml)?;
        config.validated()
    }

    /// Loads a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: BuilderConfig = serde_json::from_str(json)?;
        config.validated()
    }

    fn validated(self) -> AppResult<Self> {
        if self.default_tag.trim().is_empty() {
            return Err(AppError::Config("default_tag cannot be empty".into()));
        }
        Ok(self)
    }
}
