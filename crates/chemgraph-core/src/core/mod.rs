//! # Core Module
//!
//! The structural object model and the pieces it is built from.
//!
//! ## Overview
//!
//! A caller obtains a [`builder::Builder`] (or takes one from any existing object),
//! manufactures atoms, bonds, lone pairs, rings, monomers and mappings with it,
//! and assembles them into containers. Structures can then be deep-cloned,
//! walked ring by ring, or referenced indirectly through borrowing wrappers.
//!
//! ## Architecture
//!
//! - **Construction** ([`builder`]) - The abstract factory and its bundled backends
//! - **Object Graph** ([`models`]) - Atoms, bonds, containers, rings, monomers, mappings
//! - **Failures** ([`error`]) - Domain, not-found, timeout and traversal errors
//! - **Reference Data** ([`utils`]) - Element symbol lookup
//!
//! The model is single-threaded: handles are reference counted without
//! atomics, so a structure cannot be sent to another thread. Use
//! [`models::clone::DeepClone`] to obtain an independent copy.

pub mod builder;
pub mod error;
pub mod models;
pub mod utils;
