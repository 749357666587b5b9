use camino::{Utf8Path, Utf8PathBuf};
use globset::Glob;
use tfvalidator_types::{Error, Result, ids};

/// A single file read fully into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedFile {
    name: String,
    path: Utf8PathBuf,
    content: Vec<u8>,
}

impl LoadedFile {
    pub fn new(name: impl Into<String>, path: impl Into<Utf8PathBuf>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content,
        }
    }

    /// File name without its directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8, or `None` if the file is not valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Whether the file name ends in `.<extension>`.
    pub fn has_extension(&self, extension: &str) -> bool {
        Utf8Path::new(&self.name).extension() == Some(extension)
    }
}

/// The immediate files of a scanned directory, ordered by file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDirectory {
    path: Utf8PathBuf,
    entries: Vec<LoadedFile>,
}

impl LoadedDirectory {
    pub fn new(path: impl Into<Utf8PathBuf>, entries: Vec<LoadedFile>) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn entries(&self) -> &[LoadedFile] {
        &self.entries
    }

    /// Look up an entry by exact file name.
    pub fn entry(&self, name: &str) -> Option<&LoadedFile> {
        self.entries.iter().find(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Entries with the `.tf` extension.
    pub fn terraform_files(&self) -> impl Iterator<Item = &LoadedFile> {
        self.entries
            .iter()
            .filter(|f| f.has_extension(ids::TERRAFORM_FILE_EXTENSION))
    }

    /// Entries whose file name matches `pattern` (glob syntax, e.g. `*.tfvars`).
    pub fn files_matching(&self, pattern: &str) -> Result<Vec<&LoadedFile>> {
        let matcher = Glob::new(pattern)
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        Ok(self
            .entries
            .iter()
            .filter(|f| matcher.is_match(f.name()))
            .collect())
    }
}
