//! Policy model, built-in default policy, and override-file resolution.
//!
//! This crate is intentionally IO-free: it works on an already loaded directory and on raw
//! override bytes. Reading the filesystem is `tfvalidator-repo`'s job.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{FileCategoryPolicy, Policy};
pub use presets::{DEFAULT_AUTHORIZED_KINDS, default_policy};
pub use resolve::{parse_override, resolve_policy};
