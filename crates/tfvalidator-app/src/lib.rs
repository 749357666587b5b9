//! Use case orchestration for terraform-validator.
//!
//! This crate provides the application layer: it turns process arguments into a working
//! directory, loads it, resolves its policy, and hands validators one immutable
//! [`GlobalContext`]. It is intentionally thin and delegates to the repo and settings layers.
//!
//! The CLI crate depends on this; it only handles logging setup, printing, and exit codes.

#![forbid(unsafe_code)]

mod context;
mod invocation;

pub use context::{
    GlobalContext, Startup, generate_global_context, generate_global_context_from,
    load_global_context,
};
pub use invocation::{EarlyExit, Invocation, resolve_working_directory};
