//! Structure files: the TOML description of a molecule the commands operate on.

pub mod assemble;
pub mod file;

pub use assemble::{Structure, assemble};
pub use file::StructureFile;
