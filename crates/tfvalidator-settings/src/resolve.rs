use camino::Utf8Path;
use serde_yaml::Value;
use tfvalidator_repo::LoadedDirectory;
use tfvalidator_types::{Error, Result, ids};

use crate::{model::Policy, presets::default_policy};

/// Resolve the effective policy for a loaded directory.
///
/// Without a `terraform-validator.yaml` entry this is [`default_policy`] and nothing is parsed.
pub fn resolve_policy(directory: &LoadedDirectory) -> Result<Policy> {
    let Some(file) = directory.entry(ids::OVERRIDE_FILE_NAME) else {
        tracing::debug!(dir = %directory.path(), "no override file, using default policy");
        return Ok(default_policy());
    };

    tracing::debug!(file = %file.path(), "applying override file");
    parse_override(file.path(), file.content())
}

/// Decode override bytes onto the default policy.
///
/// `path` only names the file in errors. A blank or null document is treated like a missing
/// one, and a key whose value is null is treated like an absent key.
pub fn parse_override(path: &Utf8Path, content: &[u8]) -> Result<Policy> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(default_policy());
    }
    let mut document: Value =
        serde_yaml::from_slice(content).map_err(|e| Error::config_parse(path, e))?;
    if document.is_null() {
        return Ok(default_policy());
    }
    drop_null_keys(&mut document);
    serde_yaml::from_value(document).map_err(|e| Error::config_parse(path, e))
}

/// Remove null-valued keys from every mapping, so the seed value applies to them.
fn drop_null_keys(value: &mut Value) {
    if let Value::Mapping(map) = value {
        map.retain(|_, v| !v.is_null());
        for (_, v) in map.iter_mut() {
            drop_null_keys(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileCategoryPolicy;
    use std::collections::BTreeMap;
    use tfvalidator_repo::LoadedFile;

    fn parse(yaml: &str) -> Result<Policy> {
        parse_override(Utf8Path::new(ids::OVERRIDE_FILE_NAME), yaml.as_bytes())
    }

    fn dir_with(files: &[(&str, &str)]) -> LoadedDirectory {
        LoadedDirectory::new(
            "infra",
            files
                .iter()
                .map(|(name, body)| {
                    LoadedFile::new(*name, format!("infra/{name}"), body.as_bytes().to_vec())
                })
                .collect(),
        )
    }

    #[test]
    fn scalar_booleans_only_keep_everything_else() {
        let policy = parse("ensure_providers_version: false\nensure_readme_updated: false\n")
            .expect("parse");

        let mut expected = default_policy();
        expected.ensure_providers_version_pinned = false;
        expected.ensure_readme_updated = false;
        assert_eq!(policy, expected);
    }

    #[test]
    fn block_pattern_name_only_keeps_everything_else() {
        let policy = parse("block_pattern_name: 'foo'").expect("parse");

        let mut expected = default_policy();
        expected.block_pattern_name = "foo".to_string();
        assert_eq!(policy, expected);
    }

    #[test]
    fn files_replaces_the_whole_category_map() {
        let policy = parse(
            r#"
files:
  variables:
    mandatory: true
    authorized_blocks: [variable]
"#,
        )
        .expect("parse");

        let keys: Vec<&str> = policy.categories.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["variables"]);
        assert!(policy.category("default").is_none());
        assert!(policy.ensure_terraform_version_declared);
        assert_eq!(policy.block_pattern_name, "block");
    }

    #[test]
    fn category_fields_are_not_merged_with_default_entry() {
        // Only `mandatory` given: the entry replaces the default one, so no kinds are inherited.
        let policy = parse("files:\n  default:\n    mandatory: false\n").expect("parse");
        assert_eq!(
            policy.categories,
            BTreeMap::from([("default".to_string(), FileCategoryPolicy::default())])
        );
    }

    #[test]
    fn empty_files_map_clears_categories() {
        let policy = parse("files: {}").expect("parse");
        assert!(policy.categories.is_empty());
    }

    #[test]
    fn explicit_empty_authorized_blocks_is_kept_empty() {
        let policy =
            parse("files:\n  docs:\n    mandatory: false\n    authorized_blocks: []\n").expect("parse");
        let docs = policy.category("docs").expect("docs category");
        assert!(docs.authorized_kinds.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let policy = parse("ensure_readme_updated: false\nfuture_option: 3\n").expect("parse");
        let mut expected = default_policy();
        expected.ensure_readme_updated = false;
        assert_eq!(policy, expected);
    }

    #[test]
    fn blank_document_is_default() {
        assert_eq!(parse("").expect("parse"), default_policy());
        assert_eq!(parse("  \n\t\n").expect("parse"), default_policy());
    }

    #[test]
    fn null_values_keep_the_default() {
        assert_eq!(parse("~").expect("parse"), default_policy());
        assert_eq!(parse("# only a comment\n").expect("parse"), default_policy());
        assert_eq!(parse("files:\n").expect("parse"), default_policy());
        assert_eq!(parse("files: ~\n").expect("parse"), default_policy());

        let policy = parse("ensure_readme_updated: ~\nensure_providers_version: false\n")
            .expect("parse");
        let mut expected = default_policy();
        expected.ensure_providers_version_pinned = false;
        assert_eq!(policy, expected);
    }

    #[test]
    fn null_category_fields_are_left_at_category_default() {
        let policy = parse("files:\n  docs:\n    mandatory: ~\n    authorized_blocks: [output]\n")
            .expect("parse");
        let docs = policy.category("docs").expect("docs category");
        assert!(!docs.mandatory);
        assert!(docs.authorizes("output"));
        assert_eq!(policy.categories.len(), 1);
    }

    #[test]
    fn wrong_shape_is_config_parse_error_naming_file() {
        let err = parse("files:\n  default:\n    mandatory: \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(
            err.to_string().contains(ids::OVERRIDE_FILE_NAME),
            "message: {err}"
        );
    }

    #[test]
    fn scalar_document_is_config_parse_error() {
        let err = parse("just a string").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn malformed_yaml_is_config_parse_error() {
        let err = parse("ensure_readme_updated: [false\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn resolve_without_override_is_default() {
        let dir = dir_with(&[("main.tf", "terraform {}")]);
        assert_eq!(resolve_policy(&dir).expect("resolve"), default_policy());
    }

    #[test]
    fn resolve_does_not_parse_other_yaml_files() {
        // Only the well-known name counts, even if another file would fail to parse.
        let dir = dir_with(&[
            ("main.tf", ""),
            ("terraform-validator.yml", "ensure_readme_updated: nope: ["),
        ]);
        assert_eq!(resolve_policy(&dir).expect("resolve"), default_policy());
    }

    #[test]
    fn resolve_error_uses_entry_path() {
        let dir = dir_with(&[(ids::OVERRIDE_FILE_NAME, "ensure_terraform_version: [1, 2]")]);
        let err = resolve_policy(&dir).unwrap_err();
        assert_eq!(
            err.path().map(|p| p.as_str()),
            Some("infra/terraform-validator.yaml")
        );
    }
}
