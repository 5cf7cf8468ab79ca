use super::ChemObject;
use super::atom::Atom;
use super::lone_pair::LonePair;
use super::topology::Bond;
use crate::core::builder::Builder;
use std::fmt;
use tracing::{debug, trace};

/// An ordered collection of atoms, bonds and lone pairs.
///
/// The three sequences preserve insertion order. Each member is held by
/// handle, so the same atom may also appear in other containers, rings or
/// mappings. Adding an object that is already present is a no-op.
///
/// Bonds and lone pairs are expected to reference atoms of the same
/// container, but this is only checked (and logged) when they are added.
#[derive(Debug)]
pub struct AtomContainer {
    builder: Builder,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    lone_pairs: Vec<LonePair>,
}

impl AtomContainer {
    pub(crate) fn new(builder: Builder) -> Self {
        Self {
            builder,
            atoms: Vec::new(),
            bonds: Vec::new(),
            lone_pairs: Vec::new(),
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn lone_pairs(&self) -> &[LonePair] {
        &self.lone_pairs
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn bond(&self, index: usize) -> Option<&Bond> {
        self.bonds.get(index)
    }

    pub fn lone_pair(&self, index: usize) -> Option<&LonePair> {
        self.lone_pairs.get(index)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn lone_pair_count(&self) -> usize {
        self.lone_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.bonds.is_empty() && self.lone_pairs.is_empty()
    }

    pub fn contains_atom(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn contains_bond(&self, bond: &Bond) -> bool {
        self.bonds.contains(bond)
    }

    pub fn contains_lone_pair(&self, lone_pair: &LonePair) -> bool {
        self.lone_pairs.contains(lone_pair)
    }

    pub fn atom_index(&self, atom: &Atom) -> Option<usize> {
        self.atoms.iter().position(|a| a == atom)
    }

    pub fn bond_index(&self, bond: &Bond) -> Option<usize> {
        self.bonds.iter().position(|b| b == bond)
    }

    /// Appends an atom.
    ///
    /// # Return
    ///
    /// `true` if the atom was inserted, `false` if it was already present.
    pub fn add_atom(&mut self, atom: Atom) -> bool {
        if self.contains_atom(&atom) {
            return false;
        }
        self.atoms.push(atom);
        true
    }

    /// Appends a bond.
    ///
    /// # Return
    ///
    /// `true` if the bond was inserted, `false` if it was already present.
    pub fn add_bond(&mut self, bond: Bond) -> bool {
        if self.contains_bond(&bond) {
            return false;
        }
        match bond.atoms() {
            Some((a, b)) if !self.contains_atom(&a) || !self.contains_atom(&b) => {
                debug!("Adding {bond} whose endpoints are not all members of the container.");
            }
            None => debug!("Adding an unconnected bond to the container."),
            _ => {}
        }
        self.bonds.push(bond);
        true
    }

    /// Appends a lone pair.
    ///
    /// # Return
    ///
    /// `true` if the lone pair was inserted, `false` if it was already present.
    pub fn add_lone_pair(&mut self, lone_pair: LonePair) -> bool {
        if self.contains_lone_pair(&lone_pair) {
            return false;
        }
        if lone_pair.atom().is_some_and(|atom| !self.contains_atom(&atom)) {
            debug!("Adding {lone_pair} whose atom is not a member of the container.");
        }
        self.lone_pairs.push(lone_pair);
        true
    }

    /// Appends every member of `other` that is not already present.
    ///
    /// The members are shared, not copied.
    pub fn add_all(&mut self, other: &AtomContainer) {
        for atom in &other.atoms {
            self.add_atom(atom.clone());
        }
        for bond in &other.bonds {
            self.add_bond(bond.clone());
        }
        for lone_pair in &other.lone_pairs {
            self.add_lone_pair(lone_pair.clone());
        }
    }

    /// Removes an atom together with every bond and lone pair attached to it.
    ///
    /// # Return
    ///
    /// Returns `Some(Atom)` if the atom was a member, otherwise `None`.
    pub fn remove_atom(&mut self, atom: &Atom) -> Option<Atom> {
        let index = self.atom_index(atom)?;
        let removed = self.atoms.remove(index);

        let bonds_before = self.bonds.len();
        self.bonds.retain(|bond| !bond.contains(&removed));
        let lone_pairs_before = self.lone_pairs.len();
        self.lone_pairs.retain(|lp| !lp.contains(&removed));

        trace!(
            bonds = bonds_before - self.bonds.len(),
            lone_pairs = lone_pairs_before - self.lone_pairs.len(),
            "Removed {removed} and its attached electron containers."
        );
        Some(removed)
    }

    pub fn remove_bond(&mut self, bond: &Bond) -> Option<Bond> {
        let index = self.bond_index(bond)?;
        Some(self.bonds.remove(index))
    }

    pub fn remove_lone_pair(&mut self, lone_pair: &LonePair) -> Option<LonePair> {
        let index = self.lone_pairs.iter().position(|lp| lp == lone_pair)?;
        Some(self.lone_pairs.remove(index))
    }

    pub fn clear(&mut self) {
        self.atoms.clear();
        self.bonds.clear();
        self.lone_pairs.clear();
    }

    /// Finds the bond connecting two atoms, in either direction.
    pub fn bond_between(&self, a: &Atom, b: &Atom) -> Option<&Bond> {
        self.bonds
            .iter()
            .find(|bond| bond.contains(a) && bond.other(a).as_ref() == Some(b))
    }

    pub fn connected_bonds<'a>(&'a self, atom: &'a Atom) -> impl Iterator<Item = &'a Bond> + 'a {
        self.bonds.iter().filter(move |bond| bond.contains(atom))
    }

    /// Atoms bonded to `atom`, in bond order.
    pub fn connected_atoms<'a>(&'a self, atom: &'a Atom) -> impl Iterator<Item = Atom> + 'a {
        self.connected_bonds(atom)
            .filter_map(move |bond| bond.other(atom))
    }

    pub fn connected_lone_pairs<'a>(
        &'a self,
        atom: &'a Atom,
    ) -> impl Iterator<Item = &'a LonePair> + 'a {
        self.lone_pairs.iter().filter(move |lp| lp.contains(atom))
    }

    /// Sum of the numeric orders of all bonds attached to `atom`.
    pub fn bond_order_sum_of(&self, atom: &Atom) -> u32 {
        self.connected_bonds(atom)
            .map(|bond| u32::from(bond.order().numeric()))
            .sum()
    }

    pub(crate) fn from_parts(
        builder: Builder,
        atoms: Vec<Atom>,
        bonds: Vec<Bond>,
        lone_pairs: Vec<LonePair>,
    ) -> Self {
        Self {
            builder,
            atoms,
            bonds,
            lone_pairs,
        }
    }

    /// Writes the counts and members, shared by every container-like variant.
    pub(crate) fn write_contents(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#A:{}, #B:{}, #LP:{}",
            self.atoms.len(),
            self.bonds.len(),
            self.lone_pairs.len()
        )?;
        for atom in &self.atoms {
            write!(f, ", {atom}")?;
        }
        for bond in &self.bonds {
            write!(f, ", {bond}")?;
        }
        for lone_pair in &self.lone_pairs {
            write!(f, ", {lone_pair}")?;
        }
        Ok(())
    }
}

impl ChemObject for AtomContainer {
    fn builder(&self) -> &Builder {
        &self.builder
    }
}

impl fmt::Display for AtomContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AtomContainer(")?;
        self.write_contents(f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::test_support::assert_single_line;
    use crate::core::models::topology::BondOrder;

    struct TestRefs {
        c1: Atom,
        c2: Atom,
        o: Atom,
        c1_c2: Bond,
        c2_o: Bond,
        o_lp: LonePair,
    }

    fn create_standard_test_container() -> (AtomContainer, TestRefs) {
        let builder = Builder::default();
        let mut container = builder.new_atom_container();

        let c1 = builder.create_atom("C");
        let c2 = builder.create_atom("C");
        let o = builder.create_atom("O");
        container.add_atom(c1.clone());
        container.add_atom(c2.clone());
        container.add_atom(o.clone());

        let c1_c2 = builder.create_bond(&c1, &c2, BondOrder::Single);
        let c2_o = builder.create_bond(&c2, &o, BondOrder::Double);
        container.add_bond(c1_c2.clone());
        container.add_bond(c2_o.clone());

        let o_lp = builder.create_lone_pair(&o);
        container.add_lone_pair(o_lp.clone());

        let refs = TestRefs {
            c1,
            c2,
            o,
            c1_c2,
            c2_o,
            o_lp,
        };
        (container, refs)
    }

    #[test]
    fn container_creation_and_access() {
        let (container, refs) = create_standard_test_container();

        assert_eq!(container.atom_count(), 3);
        assert_eq!(container.bond_count(), 2);
        assert_eq!(container.lone_pair_count(), 1);
        assert_eq!(container.atom(0), Some(&refs.c1));
        assert_eq!(container.atom(2), Some(&refs.o));
        assert_eq!(container.bond(1), Some(&refs.c2_o));
        assert_eq!(container.lone_pair(0), Some(&refs.o_lp));
        assert_eq!(container.atom_index(&refs.c2), Some(1));
        assert_eq!(container.bond_index(&refs.c1_c2), Some(0));
        assert!(!container.is_empty());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let builder = Builder::default();
        let mut container = builder.new_atom_container();
        let atoms: Vec<Atom> = ["N", "C", "O", "S"]
            .iter()
            .map(|s| builder.create_atom(s))
            .collect();
        for atom in atoms.iter().rev() {
            container.add_atom(atom.clone());
        }
        let symbols: Vec<String> = container
            .atoms()
            .iter()
            .filter_map(|a| a.symbol())
            .collect();
        assert_eq!(symbols, ["S", "O", "C", "N"]);
    }

    #[test]
    fn lone_pair_count_is_independent_of_atoms_and_bonds() {
        let builder = Builder::default();
        let mut container = builder.new_atom_container();
        let n = builder.create_atom("N");
        let c = builder.create_atom("C");
        container.add_atom(n.clone());
        container.add_atom(c.clone());
        container.add_bond(builder.create_bond(&n, &c, BondOrder::Triple));

        container.add_lone_pair(builder.create_lone_pair(&n));
        container.add_lone_pair(builder.new_lone_pair());

        assert_eq!(container.lone_pair_count(), 2);
        assert_eq!(container.atom_count(), 2);
        assert_eq!(container.bond_count(), 1);
    }

    #[test]
    fn adding_a_member_twice_is_a_no_op() {
        let (mut container, refs) = create_standard_test_container();
        assert!(!container.add_atom(refs.c1.clone()));
        assert!(!container.add_bond(refs.c1_c2.clone()));
        assert!(!container.add_lone_pair(refs.o_lp.clone()));
        assert_eq!(container.atom_count(), 3);
        assert_eq!(container.bond_count(), 2);
        assert_eq!(container.lone_pair_count(), 1);
    }

    #[test]
    fn atom_removal_removes_attached_bonds_and_lone_pairs() {
        let (mut container, refs) = create_standard_test_container();

        let removed = container.remove_atom(&refs.o).unwrap();

        assert_eq!(removed, refs.o);
        assert_eq!(container.atom_count(), 2);
        assert!(!container.contains_atom(&refs.o));
        assert_eq!(container.bonds(), &[refs.c1_c2.clone()]);
        assert_eq!(container.lone_pair_count(), 0);
        assert!(container.remove_atom(&refs.o).is_none());
    }

    #[test]
    fn bond_and_lone_pair_removal() {
        let (mut container, refs) = create_standard_test_container();

        assert_eq!(container.remove_bond(&refs.c2_o), Some(refs.c2_o.clone()));
        assert!(container.remove_bond(&refs.c2_o).is_none());
        assert_eq!(container.atom_count(), 3);

        assert_eq!(
            container.remove_lone_pair(&refs.o_lp),
            Some(refs.o_lp.clone())
        );
        assert_eq!(container.lone_pair_count(), 0);
    }

    #[test]
    fn bond_between_finds_bond_in_either_direction() {
        let (container, refs) = create_standard_test_container();
        assert_eq!(container.bond_between(&refs.c2, &refs.c1), Some(&refs.c1_c2));
        assert_eq!(container.bond_between(&refs.o, &refs.c2), Some(&refs.c2_o));
        assert!(container.bond_between(&refs.c1, &refs.o).is_none());
    }

    #[test]
    fn connected_queries_return_neighbours() {
        let (container, refs) = create_standard_test_container();

        let neighbours: Vec<Atom> = container.connected_atoms(&refs.c2).collect();
        assert_eq!(neighbours, [refs.c1.clone(), refs.o.clone()]);

        assert_eq!(container.connected_bonds(&refs.o).count(), 1);
        assert_eq!(container.connected_lone_pairs(&refs.o).count(), 1);
        assert_eq!(container.connected_lone_pairs(&refs.c1).count(), 0);
    }

    #[test]
    fn bond_order_sum_of_atom_follows_order_changes() {
        let (container, refs) = create_standard_test_container();
        assert_eq!(container.bond_order_sum_of(&refs.c2), 3);
        refs.c1_c2.increase_order();
        assert_eq!(container.bond_order_sum_of(&refs.c2), 4);
        assert_eq!(container.bond_order_sum_of(&refs.o), 2);
    }

    #[test]
    fn add_all_shares_members_without_duplicates() {
        let (source, refs) = create_standard_test_container();
        let mut target = source.builder().new_atom_container();
        target.add_atom(refs.c1.clone());

        target.add_all(&source);

        assert_eq!(target.atom_count(), 3);
        assert_eq!(target.bond_count(), 2);
        assert_eq!(target.lone_pair_count(), 1);
        assert_eq!(target.atom(0), Some(&refs.c1));
    }

    #[test]
    fn clear_empties_all_sequences() {
        let (mut container, _) = create_standard_test_container();
        container.clear();
        assert!(container.is_empty());
    }

    #[test]
    fn display_is_single_line() {
        let (container, _) = create_standard_test_container();
        let shown = container.to_string();
        assert_single_line(&shown);
        assert!(shown.starts_with("AtomContainer(#A:3, #B:2, #LP:1, Atom(C)"));
    }
}
