use super::ChemObject;
use super::atom::Atom;
use super::container::AtomContainer;
use super::lone_pair::LonePair;
use super::mapping::{ChemNode, Mapping};
use super::monomer::{Monomer, PdbMonomer};
use super::ring::Ring;
use super::topology::Bond;
use std::collections::HashMap;
use tracing::instrument;

/// Records, for one clone operation, which copy was made for each original.
///
/// Shared sub-objects must stay shared in the copy: a bond's cloned endpoints
/// have to be the very atoms the cloned container holds. Looking every
/// original up here before copying it guarantees that, and also terminates
/// on cyclic references.
#[derive(Debug, Default)]
pub struct CloneMap {
    atoms: HashMap<Atom, Atom>,
    bonds: HashMap<Bond, Bond>,
    lone_pairs: HashMap<LonePair, LonePair>,
}

impl CloneMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The copy made for `original` so far, if any.
    pub fn atom(&self, original: &Atom) -> Option<&Atom> {
        self.atoms.get(original)
    }

    pub fn bond(&self, original: &Bond) -> Option<&Bond> {
        self.bonds.get(original)
    }

    pub fn lone_pair(&self, original: &LonePair) -> Option<&LonePair> {
        self.lone_pairs.get(original)
    }

    pub fn len(&self) -> usize {
        self.atoms.len() + self.bonds.len() + self.lone_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structural copy with no aliasing between the original and the copy.
///
/// Every handle reachable from the copy is a new object, attribute values
/// are equal, and the builder is shared.
pub trait DeepClone: Sized {
    fn deep_clone(&self) -> Self {
        self.deep_clone_with(&mut CloneMap::new())
    }

    /// Clones using (and extending) an existing map, so several objects can
    /// be copied as one consistent graph.
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self;
}

impl DeepClone for Atom {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        if let Some(copy) = map.atoms.get(self) {
            return copy.clone();
        }
        let copy = Atom::new(self.builder().clone(), self.symbol().as_deref());
        map.atoms.insert(self.clone(), copy.clone());
        copy
    }
}

impl DeepClone for Bond {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        if let Some(copy) = map.bonds.get(self) {
            return copy.clone();
        }
        let atoms = self
            .atoms()
            .map(|(a, b)| [a.deep_clone_with(map), b.deep_clone_with(map)]);
        let copy = Bond::new(self.builder().clone(), atoms, self.order());
        map.bonds.insert(self.clone(), copy.clone());
        copy
    }
}

impl DeepClone for LonePair {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        if let Some(copy) = map.lone_pairs.get(self) {
            return copy.clone();
        }
        let atom = self.atom().map(|atom| atom.deep_clone_with(map));
        let copy = LonePair::new(self.builder().clone(), atom);
        map.lone_pairs.insert(self.clone(), copy.clone());
        copy
    }
}

impl DeepClone for ChemNode {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        match self {
            ChemNode::Atom(atom) => ChemNode::Atom(atom.deep_clone_with(map)),
            ChemNode::Bond(bond) => ChemNode::Bond(bond.deep_clone_with(map)),
            ChemNode::LonePair(lp) => ChemNode::LonePair(lp.deep_clone_with(map)),
        }
    }
}

impl DeepClone for AtomContainer {
    #[instrument(skip_all, fields(atoms = self.atom_count(), bonds = self.bond_count()))]
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        let atoms = self
            .atoms()
            .iter()
            .map(|atom| atom.deep_clone_with(map))
            .collect();
        let bonds = self
            .bonds()
            .iter()
            .map(|bond| bond.deep_clone_with(map))
            .collect();
        let lone_pairs = self
            .lone_pairs()
            .iter()
            .map(|lp| lp.deep_clone_with(map))
            .collect();
        AtomContainer::from_parts(self.builder().clone(), atoms, bonds, lone_pairs)
    }
}

impl DeepClone for Ring {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        Ring::from_container(self.as_container().deep_clone_with(map))
    }
}

impl DeepClone for Monomer {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        Monomer::from_parts(
            self.as_container().deep_clone_with(map),
            self.monomer_name.clone(),
            self.monomer_type.clone(),
        )
    }
}

impl DeepClone for PdbMonomer {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        PdbMonomer::from_parts(
            self.as_monomer().deep_clone_with(map),
            self.icode.clone(),
            self.chain_id.clone(),
            self.res_seq.clone(),
        )
    }
}

impl DeepClone for Mapping {
    fn deep_clone_with(&self, map: &mut CloneMap) -> Self {
        let first = self.first().deep_clone_with(map);
        let second = self.second().deep_clone_with(map);
        Mapping::new(self.builder().clone(), first, second)
    }
}
