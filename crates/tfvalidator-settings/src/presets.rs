use std::collections::BTreeMap;
use tfvalidator_types::ids;

use crate::model::{FileCategoryPolicy, Policy};

/// Declaration kinds the default category accepts.
pub const DEFAULT_AUTHORIZED_KINDS: [&str; 8] = [
    "variable",
    "output",
    "provider",
    "terraform",
    "resource",
    "module",
    "data",
    "locals",
];

/// The built-in, safe-by-default policy.
///
/// Built fresh on every call: callers own the value and can never reach a shared instance.
pub fn default_policy() -> Policy {
    Policy {
        ensure_terraform_version_declared: true,
        ensure_providers_version_pinned: true,
        ensure_readme_updated: true,
        block_pattern_name: ids::DEFAULT_BLOCK_PATTERN_NAME.to_string(),
        categories: default_categories(),
    }
}

fn default_categories() -> BTreeMap<String, FileCategoryPolicy> {
    let mut m = BTreeMap::new();
    m.insert(
        ids::DEFAULT_CATEGORY.to_string(),
        FileCategoryPolicy {
            mandatory: true,
            authorized_kinds: DEFAULT_AUTHORIZED_KINDS.map(String::from).to_vec(),
        },
    );
    m
}
