use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::presets;

/// `terraform-validator.yaml` schema, and the resolved policy handed to validators.
///
/// The container-level `#[serde(default)]` seeds every field the document leaves out from
/// [`Policy::default`], which is the built-in default policy. A field present in the document
/// replaces the default wholesale; for `files` that means the whole category map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Policy {
    /// Require a `terraform { required_version = ... }` declaration.
    #[serde(rename = "ensure_terraform_version")]
    pub ensure_terraform_version_declared: bool,

    /// Require every provider to pin a version.
    #[serde(rename = "ensure_providers_version")]
    pub ensure_providers_version_pinned: bool,

    /// Require the README to be newer than the Terraform files.
    pub ensure_readme_updated: bool,

    /// Naming pattern used by validators when matching declaration kinds to file names.
    pub block_pattern_name: String,

    /// File category name -> rules for files of that category.
    #[serde(rename = "files")]
    pub categories: BTreeMap<String, FileCategoryPolicy>,
}

impl Default for Policy {
    fn default() -> Self {
        presets::default_policy()
    }
}

impl Policy {
    pub fn category(&self, name: &str) -> Option<&FileCategoryPolicy> {
        self.categories.get(name)
    }

    /// Names of the categories that require at least one file, in key order.
    pub fn mandatory_categories(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter(|(_, c)| c.mandatory)
            .map(|(name, _)| name.as_str())
    }
}

/// Rules for one class of definition file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FileCategoryPolicy {
    /// At least one file of this category must exist.
    pub mandatory: bool,

    /// The only top-level declaration kinds allowed. Empty means none are.
    #[serde(rename = "authorized_blocks")]
    pub authorized_kinds: Vec<String>,
}

impl FileCategoryPolicy {
    pub fn authorizes(&self, kind: &str) -> bool {
        self.authorized_kinds.iter().any(|k| k == kind)
    }
}
