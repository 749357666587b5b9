//! Repository adapters: load a Terraform folder and its files into memory.
//!
//! This is the only crate in the workspace that touches the filesystem. Everything downstream
//! (policy resolution, validators) works on the in-memory [`LoadedDirectory`].

#![forbid(unsafe_code)]

mod load;
mod model;

pub use load::{load_directory, load_file};
pub use model::{LoadedDirectory, LoadedFile};
