//! # Core Models Module
//!
//! Data structures that represent a chemical structure as a graph of shared
//! objects.
//!
//! ## Overview
//!
//! Every object in the model is manufactured by a [`Builder`](crate::core::builder::Builder)
//! and remembers it, so any object can be used to create compatible siblings.
//! The leaf objects ([`atom::Atom`], [`topology::Bond`], [`lone_pair::LonePair`]) are
//! cheap handles with identity semantics: cloning a handle yields another reference
//! to the same node, and two handles compare equal only when they refer to the same
//! node. Composite objects ([`container::AtomContainer`], [`ring::Ring`],
//! [`monomer::Monomer`], [`monomer::PdbMonomer`], [`mapping::Mapping`]) own ordered
//! lists of those handles.
//!
//! ## Key Components
//!
//! - [`atom`] - Atoms identified by an element symbol
//! - [`topology`] - Bonds and bond orders
//! - [`lone_pair`] - Non-bonding electron pairs
//! - [`container`] - Ordered collections of atoms, bonds and lone pairs
//! - [`ring`] - Containers whose bonds form one closed cycle, with traversal
//! - [`monomer`] - Named substructures with optional PDB residue metadata
//! - [`mapping`] - Ordered correspondences between two objects
//! - [`refs`] - Borrowing reference wrappers and their dereference
//! - [`clone`] - Deep cloning without aliasing
//!
//! ## Usage
//!
//! ```ignore
//! use chemgraph::core::builder::Builder;
//! use chemgraph::core::models::topology::BondOrder;
//!
//! let builder = Builder::default();
//! let c1 = builder.create_atom("C");
//! let c2 = builder.create_atom("C");
//! let bond = builder.create_bond(&c1, &c2, BondOrder::Single);
//!
//! let mut molecule = c1.builder().new_atom_container();
//! molecule.add_atom(c1);
//! molecule.add_atom(c2);
//! molecule.add_bond(bond);
//! ```

pub mod atom;
pub mod clone;
pub mod container;
pub mod lone_pair;
pub mod mapping;
pub mod monomer;
pub mod refs;
pub mod ring;
pub mod topology;

use crate::core::builder::Builder;
use std::fmt;

/// Capabilities shared by every object in the model.
///
/// Implementors render themselves on a single line: user-supplied text is
/// escaped so the output never contains a line feed or carriage return.
pub trait ChemObject: fmt::Display {
    /// The builder that manufactured this object.
    fn builder(&self) -> &Builder;
}

/// Implements identity-based equality and hashing for an `Rc`-backed handle.
macro_rules! handle_identity {
    ($handle:ident) => {
        impl PartialEq for $handle {
            fn eq(&self, other: &Self) -> bool {
                std::rc::Rc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $handle {}

        impl std::hash::Hash for $handle {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::ptr::hash(std::rc::Rc::as_ptr(&self.0), state);
            }
        }
    };
}

pub(crate) use handle_identity;

/// Displays optional user text on a single line, `-` when absent.
pub(crate) struct OptText<'a>(pub &'a Option<String>);

impl fmt::Display for OptText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(text) => write!(f, "\"{}\"", text.escape_debug()),
            None => f.write_str("-"),
        }
    }
}
