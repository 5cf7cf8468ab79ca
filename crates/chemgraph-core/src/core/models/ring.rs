use super::ChemObject;
use super::atom::Atom;
use super::container::AtomContainer;
use super::topology::{Bond, BondOrder};
use crate::core::builder::Builder;
use crate::core::error::TraversalError;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::instrument;

/// An atom container whose bonds form a single closed cycle.
///
/// `Ring` dereferences to [`AtomContainer`], so every container query is
/// available on it directly. For a well-formed ring every atom has exactly two
/// incident ring bonds; [`Ring::is_closed_cycle`] checks this.
#[derive(Debug)]
pub struct Ring {
    container: AtomContainer,
}

impl Ring {
    pub(crate) fn new(builder: Builder) -> Self {
        Self {
            container: AtomContainer::new(builder),
        }
    }

    /// Builds a ring of `size` fresh atoms with the given symbol, joined
    /// cyclically by single bonds.
    ///
    /// Sizes below three produce the atoms without any bonds, since no simple
    /// cycle exists for them.
    pub(crate) fn with_size(builder: &Builder, size: usize, symbol: &str) -> Self {
        let mut ring = Self::new(builder.clone());
        let atoms: Vec<Atom> = (0..size).map(|_| builder.create_atom(symbol)).collect();
        for atom in &atoms {
            ring.add_atom(atom.clone());
        }
        if size >= 3 {
            for (i, atom) in atoms.iter().enumerate() {
                let next = &atoms[(i + 1) % size];
                ring.add_bond(builder.create_bond(atom, next, BondOrder::Single));
            }
        }
        ring
    }

    pub(crate) fn from_container(container: AtomContainer) -> Self {
        Self { container }
    }

    /// Number of atoms in the ring.
    pub fn ring_size(&self) -> usize {
        self.container.atom_count()
    }

    /// Returns the other ring bond incident on `atom`.
    ///
    /// Starting from any bond and one of its atoms, alternately calling this
    /// and moving to the far atom of the returned bond walks the whole ring.
    ///
    /// # Errors
    ///
    /// - [`TraversalError::BondNotInRing`] if `bond` is not a ring member.
    /// - [`TraversalError::AtomNotOnBond`] if `atom` is not an endpoint of `bond`.
    /// - [`TraversalError::NoNextBond`] if no other ring bond touches `atom`.
    pub fn next_bond(&self, bond: &Bond, atom: &Atom) -> Result<Bond, TraversalError> {
        if !self.container.contains_bond(bond) {
            return Err(TraversalError::BondNotInRing);
        }
        if !bond.contains(atom) {
            return Err(TraversalError::AtomNotOnBond);
        }
        self.container
            .bonds()
            .iter()
            .find(|candidate| *candidate != bond && candidate.contains(atom))
            .cloned()
            .ok_or(TraversalError::NoNextBond)
    }

    /// Sum of the numeric orders of the ring bonds, computed from their current orders.
    pub fn bond_order_sum(&self) -> u32 {
        self.container
            .bonds()
            .iter()
            .map(|bond| u32::from(bond.order().numeric()))
            .sum()
    }

    /// Walks the ring starting at `start`, leaving it through `pivot`.
    ///
    /// # Return
    ///
    /// The bonds in visiting order, beginning with `start`; each ring bond
    /// appears exactly once.
    ///
    /// # Errors
    ///
    /// Propagates [`Ring::next_bond`] failures, and returns
    /// [`TraversalError::NotClosed`] if the walk does not come back to `start`.
    #[instrument(skip_all, fields(ring_size = self.ring_size()))]
    pub fn walk(&self, start: &Bond, pivot: &Atom) -> Result<Vec<Bond>, TraversalError> {
        let mut path = vec![start.clone()];
        let mut current = start.clone();
        let mut pivot = pivot.clone();

        loop {
            let next = self.next_bond(&current, &pivot)?;
            if &next == start {
                return Ok(path);
            }
            if path.len() >= self.container.bond_count() {
                return Err(TraversalError::NotClosed);
            }
            pivot = next.other(&pivot).ok_or(TraversalError::AtomNotOnBond)?;
            path.push(next.clone());
            current = next;
        }
    }

    /// Checks the ring invariant: at least three atoms, as many bonds as
    /// atoms, every atom on exactly two ring bonds, and all bonds on one cycle.
    pub fn is_closed_cycle(&self) -> bool {
        let container = &self.container;
        if container.atom_count() < 3 || container.atom_count() != container.bond_count() {
            return false;
        }
        let every_atom_has_two_bonds = container
            .atoms()
            .iter()
            .all(|atom| container.connected_bonds(atom).count() == 2);
        if !every_atom_has_two_bonds {
            return false;
        }
        let Some(start) = container.bond(0) else {
            return false;
        };
        let Some(pivot) = start.end() else {
            return false;
        };
        self.walk(start, &pivot)
            .is_ok_and(|path| path.len() == container.bond_count())
    }

    pub fn as_container(&self) -> &AtomContainer {
        &self.container
    }

    pub fn into_container(self) -> AtomContainer {
        self.container
    }
}

impl Deref for Ring {
    type Target = AtomContainer;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for Ring {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}

impl ChemObject for Ring {
    fn builder(&self) -> &Builder {
        self.container.builder()
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ring(")?;
        self.container.write_contents(f)?;
        f.write_str(")")
    }
}
