use super::models::atom::Atom;
use super::models::container::AtomContainer;
use super::models::lone_pair::LonePair;
use super::models::mapping::{ChemNode, Mapping};
use super::models::monomer::{Monomer, PdbMonomer};
use super::models::ring::Ring;
use super::models::topology::{Bond, BondOrder};
use serde::Deserialize;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A backend that manufactures every kind of object in the model.
///
/// Each method receives `owner`, the [`Builder`] handle the caller invoked,
/// and must store it in the manufactured object so the object can later
/// create siblings through the same backend.
pub trait ChemObjectBuilder: fmt::Debug {
    /// A short name identifying the backend (e.g., "default").
    fn name(&self) -> &'static str;

    fn new_atom(&self, owner: &Builder) -> Atom;
    fn create_atom(&self, owner: &Builder, symbol: &str) -> Atom;

    fn new_bond(&self, owner: &Builder) -> Bond;
    fn create_bond(&self, owner: &Builder, begin: &Atom, end: &Atom, order: BondOrder) -> Bond;

    fn new_lone_pair(&self, owner: &Builder) -> LonePair;
    fn create_lone_pair(&self, owner: &Builder, atom: &Atom) -> LonePair;

    fn new_atom_container(&self, owner: &Builder) -> AtomContainer;

    fn new_ring(&self, owner: &Builder) -> Ring;
    fn create_ring(&self, owner: &Builder, size: usize, symbol: &str) -> Ring;

    fn new_mapping(&self, owner: &Builder, first: ChemNode, second: ChemNode) -> Mapping;

    fn new_monomer(&self, owner: &Builder) -> Monomer;
    fn new_pdb_monomer(&self, owner: &Builder) -> PdbMonomer;
}

/// Plain construction with no side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultBuilder;

impl ChemObjectBuilder for DefaultBuilder {
    fn name(&self) -> &'static str {
        "default"
    }

    fn new_atom(&self, owner: &Builder) -> Atom {
        Atom::new(owner.clone(), None)
    }

    fn create_atom(&self, owner: &Builder, symbol: &str) -> Atom {
        Atom::new(owner.clone(), Some(symbol))
    }

    fn new_bond(&self, owner: &Builder) -> Bond {
        Bond::new(owner.clone(), None, BondOrder::Unset)
    }

    fn create_bond(&self, owner: &Builder, begin: &Atom, end: &Atom, order: BondOrder) -> Bond {
        Bond::new(owner.clone(), Some([begin.clone(), end.clone()]), order)
    }

    fn new_lone_pair(&self, owner: &Builder) -> LonePair {
        LonePair::new(owner.clone(), None)
    }

    fn create_lone_pair(&self, owner: &Builder, atom: &Atom) -> LonePair {
        LonePair::new(owner.clone(), Some(atom.clone()))
    }

    fn new_atom_container(&self, owner: &Builder) -> AtomContainer {
        AtomContainer::new(owner.clone())
    }

    fn new_ring(&self, owner: &Builder) -> Ring {
        Ring::new(owner.clone())
    }

    fn create_ring(&self, owner: &Builder, size: usize, symbol: &str) -> Ring {
        Ring::with_size(owner, size, symbol)
    }

    fn new_mapping(&self, owner: &Builder, first: ChemNode, second: ChemNode) -> Mapping {
        Mapping::new(owner.clone(), first, second)
    }

    fn new_monomer(&self, owner: &Builder) -> Monomer {
        Monomer::new(owner.clone())
    }

    fn new_pdb_monomer(&self, owner: &Builder) -> PdbMonomer {
        PdbMonomer::new(owner.clone())
    }
}

/// Same objects as [`DefaultBuilder`], with a `debug` event for every one
/// manufactured. Useful to trace where structures are assembled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBuilder {
    inner: DefaultBuilder,
}

impl ChemObjectBuilder for TracingBuilder {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn new_atom(&self, owner: &Builder) -> Atom {
        debug!("Manufacturing an atom without symbol.");
        self.inner.new_atom(owner)
    }

    fn create_atom(&self, owner: &Builder, symbol: &str) -> Atom {
        debug!(symbol = %symbol.escape_debug(), "Manufacturing an atom.");
        self.inner.create_atom(owner, symbol)
    }

    fn new_bond(&self, owner: &Builder) -> Bond {
        debug!("Manufacturing an unconnected bond.");
        self.inner.new_bond(owner)
    }

    fn create_bond(&self, owner: &Builder, begin: &Atom, end: &Atom, order: BondOrder) -> Bond {
        debug!(%begin, %end, %order, "Manufacturing a bond.");
        self.inner.create_bond(owner, begin, end, order)
    }

    fn new_lone_pair(&self, owner: &Builder) -> LonePair {
        debug!("Manufacturing an unattached lone pair.");
        self.inner.new_lone_pair(owner)
    }

    fn create_lone_pair(&self, owner: &Builder, atom: &Atom) -> LonePair {
        debug!(%atom, "Manufacturing a lone pair.");
        self.inner.create_lone_pair(owner, atom)
    }

    fn new_atom_container(&self, owner: &Builder) -> AtomContainer {
        debug!("Manufacturing an atom container.");
        self.inner.new_atom_container(owner)
    }

    fn new_ring(&self, owner: &Builder) -> Ring {
        debug!("Manufacturing an empty ring.");
        self.inner.new_ring(owner)
    }

    fn create_ring(&self, owner: &Builder, size: usize, symbol: &str) -> Ring {
        debug!(size, symbol = %symbol.escape_debug(), "Manufacturing a ring.");
        self.inner.create_ring(owner, size, symbol)
    }

    fn new_mapping(&self, owner: &Builder, first: ChemNode, second: ChemNode) -> Mapping {
        debug!(%first, %second, "Manufacturing a mapping.");
        self.inner.new_mapping(owner, first, second)
    }

    fn new_monomer(&self, owner: &Builder) -> Monomer {
        debug!("Manufacturing a monomer.");
        self.inner.new_monomer(owner)
    }

    fn new_pdb_monomer(&self, owner: &Builder) -> PdbMonomer {
        debug!("Manufacturing a PDB monomer.");
        self.inner.new_pdb_monomer(owner)
    }
}

/// Selects one of the bundled backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum BackendKind {
    #[default]
    Default,
    Tracing,
}

#[derive(Debug, Error)]
#[error("Invalid builder backend string")]
pub struct ParseBackendKindError;

impl FromStr for BackendKind {
    type Err = ParseBackendKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "standard" => Ok(Self::Default),
            "tracing" | "debug" => Ok(Self::Tracing),
            _ => Err(ParseBackendKindError),
        }
    }
}

impl TryFrom<String> for BackendKind {
    type Error = ParseBackendKindError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Default => "default",
                Self::Tracing => "tracing",
            }
        )
    }
}

/// Shared handle to a [`ChemObjectBuilder`] backend.
///
/// Callers only ever hold a `Builder`; which concrete backend does the work is
/// decided when the handle is created. Cloning the handle is cheap and every
/// clone compares equal to the original.
#[derive(Clone)]
pub struct Builder {
    backend: Rc<dyn ChemObjectBuilder>,
}

impl Builder {
    pub fn new(backend: impl ChemObjectBuilder + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    pub fn for_backend(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Default => Self::new(DefaultBuilder),
            BackendKind::Tracing => Self::new(TracingBuilder::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn new_atom(&self) -> Atom {
        self.backend.new_atom(self)
    }

    pub fn create_atom(&self, symbol: &str) -> Atom {
        self.backend.create_atom(self, symbol)
    }

    pub fn new_bond(&self) -> Bond {
        self.backend.new_bond(self)
    }

    pub fn create_bond(&self, begin: &Atom, end: &Atom, order: BondOrder) -> Bond {
        self.backend.create_bond(self, begin, end, order)
    }

    pub fn new_lone_pair(&self) -> LonePair {
        self.backend.new_lone_pair(self)
    }

    pub fn create_lone_pair(&self, atom: &Atom) -> LonePair {
        self.backend.create_lone_pair(self, atom)
    }

    pub fn new_atom_container(&self) -> AtomContainer {
        self.backend.new_atom_container(self)
    }

    pub fn new_ring(&self) -> Ring {
        self.backend.new_ring(self)
    }

    /// Creates a ring of `size` new atoms with `symbol`, joined by single bonds.
    pub fn create_ring(&self, size: usize, symbol: &str) -> Ring {
        self.backend.create_ring(self, size, symbol)
    }

    pub fn new_mapping(&self, first: impl Into<ChemNode>, second: impl Into<ChemNode>) -> Mapping {
        self.backend.new_mapping(self, first.into(), second.into())
    }

    pub fn new_monomer(&self) -> Monomer {
        self.backend.new_monomer(self)
    }

    pub fn new_pdb_monomer(&self) -> PdbMonomer {
        self.backend.new_pdb_monomer(self)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(DefaultBuilder)
    }
}

impl PartialEq for Builder {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl Eq for Builder {}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Builder").field(&self.backend.name()).finish()
    }
}
