//! The global-context use case: arguments -> loaded directory + resolved policy.

use camino::Utf8Path;
use tfvalidator_repo::LoadedDirectory;
use tfvalidator_settings::Policy;
use tfvalidator_types::Result;

use crate::invocation::{EarlyExit, Invocation, resolve_working_directory};

/// Everything validators need for one run. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalContext {
    working_directory: LoadedDirectory,
    policy: Policy,
}

impl GlobalContext {
    pub fn new(working_directory: LoadedDirectory, policy: Policy) -> Self {
        Self {
            working_directory,
            policy,
        }
    }

    pub fn working_directory(&self) -> &LoadedDirectory {
        &self.working_directory
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

/// Outcome of context generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Startup {
    Ready(GlobalContext),
    Exit(EarlyExit),
}

/// Build the context for the current process arguments.
pub fn generate_global_context(version: &str) -> Result<Startup> {
    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    generate_global_context_from(&args, version)
}

/// Build the context for `raw_arguments` (program name first).
pub fn generate_global_context_from<S: AsRef<str>>(
    raw_arguments: &[S],
    version: &str,
) -> Result<Startup> {
    match resolve_working_directory(raw_arguments, version) {
        Invocation::Exit(exit) => Ok(Startup::Exit(exit)),
        Invocation::Directory(dir) => load_global_context(&dir).map(Startup::Ready),
    }
}

/// Load `dir` and resolve its policy.
pub fn load_global_context(dir: &Utf8Path) -> Result<GlobalContext> {
    let working_directory = tfvalidator_repo::load_directory(dir)?;
    let policy = tfvalidator_settings::resolve_policy(&working_directory)?;

    tracing::info!(
        dir = %working_directory.path(),
        entries = working_directory.entries().len(),
        categories = policy.categories.len(),
        "global context ready"
    );
    Ok(GlobalContext::new(working_directory, policy))
}
