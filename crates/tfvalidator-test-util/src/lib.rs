//! Shared test utilities for the terraform-validator workspace.
//!
//! Every crate's tests resolve fixtures the same way (repo root / tests / fixtures) and build
//! scratch Terraform folders in temp dirs. Keeping the helpers here avoids one copy per crate.

use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use tempfile::TempDir;

/// Workspace root, derived from this crate's manifest dir (crates/tfvalidator-test-util).
pub fn workspace_root() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir
        .parent()
        .and_then(|crates| crates.parent())
        .expect("test-util should live two levels below the workspace root");
    Utf8PathBuf::from_path_buf(root.to_path_buf()).expect("workspace path should be valid UTF-8")
}

/// The shared fixtures directory (repo root / tests / fixtures).
pub fn fixtures_dir() -> Utf8PathBuf {
    workspace_root().join("tests").join("fixtures")
}

/// Path of a named fixture folder, e.g. `fixture("custom_config")`.
pub fn fixture(name: &str) -> Utf8PathBuf {
    fixtures_dir().join(name)
}

/// UTF-8 view of a temp dir path.
pub fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

/// A scratch Terraform folder with a `main.tf` and, optionally, an override file.
pub fn terraform_folder(override_yaml: Option<&str>) -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_file(&root.join("main.tf"), "terraform {}\n");
    if let Some(yaml) = override_yaml {
        write_file(&root.join("terraform-validator.yaml"), yaml);
    }
    (tmp, root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_dir_points_at_shared_fixtures() {
        let dir = fixtures_dir();
        assert!(dir.ends_with("tests/fixtures"));
        assert!(fixture("default_config").join("main.tf").is_file());
    }

    #[test]
    fn terraform_folder_writes_override_when_given() {
        let (_tmp, root) = terraform_folder(Some("ensure_readme_updated: false\n"));
        assert!(root.join("main.tf").is_file());
        assert_eq!(
            std::fs::read_to_string(root.join("terraform-validator.yaml")).expect("read"),
            "ensure_readme_updated: false\n"
        );

        let (_tmp, bare) = terraform_folder(None);
        assert!(!bare.join("terraform-validator.yaml").exists());
    }
}
