//! Stable types and IDs shared across the terraform-validator workspace.
//!
//! This crate is intentionally boring:
//! - the error type every library crate returns
//! - well-known file names, flags, and default values

#![forbid(unsafe_code)]

pub mod error;
pub mod ids;

pub use error::{Error, Result};
