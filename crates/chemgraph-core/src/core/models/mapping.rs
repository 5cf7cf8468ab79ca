use super::ChemObject;
use super::atom::Atom;
use super::lone_pair::LonePair;
use super::topology::Bond;
use crate::core::builder::Builder;
use std::fmt;
use std::ops::Index;

/// Any graph member that can take part in a [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChemNode {
    Atom(Atom),
    Bond(Bond),
    LonePair(LonePair),
}

impl ChemNode {
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            ChemNode::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_bond(&self) -> Option<&Bond> {
        match self {
            ChemNode::Bond(bond) => Some(bond),
            _ => None,
        }
    }

    pub fn as_lone_pair(&self) -> Option<&LonePair> {
        match self {
            ChemNode::LonePair(lone_pair) => Some(lone_pair),
            _ => None,
        }
    }
}

impl From<Atom> for ChemNode {
    fn from(atom: Atom) -> Self {
        ChemNode::Atom(atom)
    }
}

impl From<Bond> for ChemNode {
    fn from(bond: Bond) -> Self {
        ChemNode::Bond(bond)
    }
}

impl From<LonePair> for ChemNode {
    fn from(lone_pair: LonePair) -> Self {
        ChemNode::LonePair(lone_pair)
    }
}

impl ChemObject for ChemNode {
    fn builder(&self) -> &Builder {
        match self {
            ChemNode::Atom(atom) => atom.builder(),
            ChemNode::Bond(bond) => bond.builder(),
            ChemNode::LonePair(lone_pair) => lone_pair.builder(),
        }
    }
}

impl fmt::Display for ChemNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChemNode::Atom(atom) => fmt::Display::fmt(atom, f),
            ChemNode::Bond(bond) => fmt::Display::fmt(bond, f),
            ChemNode::LonePair(lone_pair) => fmt::Display::fmt(lone_pair, f),
        }
    }
}

/// An ordered correspondence between two objects, typically an atom in a
/// reactant and the matching atom in a product.
///
/// Slot order is fixed at creation: iteration, indexing and cloning all keep
/// slot 0 before slot 1.
#[derive(Debug)]
pub struct Mapping {
    builder: Builder,
    slots: [ChemNode; 2],
}

impl Mapping {
    pub(crate) fn new(builder: Builder, first: ChemNode, second: ChemNode) -> Self {
        Self {
            builder,
            slots: [first, second],
        }
    }

    pub fn get(&self, index: usize) -> Option<&ChemNode> {
        self.slots.get(index)
    }

    pub fn first(&self) -> &ChemNode {
        &self.slots[0]
    }

    pub fn second(&self) -> &ChemNode {
        &self.slots[1]
    }

    /// Iterates the mapped objects: slot 0, then slot 1.
    ///
    /// Every call starts a fresh traversal.
    pub fn related_objects(&self) -> std::slice::Iter<'_, ChemNode> {
        self.slots.iter()
    }
}

impl Index<usize> for Mapping {
    type Output = ChemNode;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a ChemNode;
    type IntoIter = std::slice::Iter<'a, ChemNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.related_objects()
    }
}

impl ChemObject for Mapping {
    fn builder(&self) -> &Builder {
        &self.builder
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mapping({}, {})", self.slots[0], self.slots[1])
    }
}
