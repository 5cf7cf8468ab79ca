//! # chemgraph Core Library
//!
//! A strongly-typed chemical structure object model: atoms, bonds, rings, lone
//! pairs, monomers and atom-to-atom mappings, plus the machinery to build,
//! deep-clone, traverse and indirectly reference them.
//!
//! ## Architectural Philosophy
//!
//! - **Abstract construction.** Every object is manufactured by a
//!   [`Builder`](core::builder::Builder) and remembers it, so code holding any
//!   object can create compatible siblings without naming concrete backends.
//!
//! - **Identity-based graph.** Atoms, bonds and lone pairs are shared handles;
//!   containers, rings and mappings refer to the same nodes. Equality of handles
//!   is identity, never attribute comparison.
//!
//! - **Explicit copies.** Cloning a handle aliases the node. Independent copies
//!   come only from [`DeepClone`](core::models::clone::DeepClone), which keeps
//!   the copied graph isomorphic to the original without sharing any node.
//!
//! Chemistry semantics beyond structural bookkeeping (valence, aromaticity,
//! coordinates, file formats) are out of scope and belong in layers built on
//! top of this crate.

pub mod core;
