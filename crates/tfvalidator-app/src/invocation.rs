//! Working-directory resolution from raw process arguments.

use camino::Utf8PathBuf;
use tfvalidator_types::ids;

/// A successful run that stops before any directory is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EarlyExit {
    /// Print this version string and exit 0.
    Version(String),
    /// Print usage and exit 0.
    Help,
}

/// What the arguments ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Validate this directory. Not checked for existence yet.
    Directory(Utf8PathBuf),
    Exit(EarlyExit),
}

/// Derive the working directory from `raw_arguments` (program name first).
///
/// Only the first argument after the program name is looked at; anything after it is ignored.
pub fn resolve_working_directory<S: AsRef<str>>(raw_arguments: &[S], version: &str) -> Invocation {
    let Some(first) = raw_arguments.get(1).map(|arg| arg.as_ref()) else {
        return Invocation::Directory(Utf8PathBuf::from(ids::DEFAULT_WORKING_DIRECTORY));
    };

    match first {
        ids::FLAG_VERSION_LONG | ids::FLAG_VERSION_SHORT => {
            Invocation::Exit(EarlyExit::Version(version.to_string()))
        }
        ids::FLAG_HELP_LONG | ids::FLAG_HELP_SHORT => Invocation::Exit(EarlyExit::Help),
        dir => Invocation::Directory(Utf8PathBuf::from(dir)),
    }
}
