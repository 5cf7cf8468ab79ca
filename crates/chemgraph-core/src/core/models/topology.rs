use super::atom::Atom;
use super::{ChemObject, handle_identity};
use crate::core::builder::Builder;
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum BondOrder {
    Unset,
    Single,
    Double,
    Triple,
    Quadruple,
    Quintuple,
    Sextuple,
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Single
    }
}

impl BondOrder {
    /// The numeric weight of the order (`Unset` counts as zero).
    pub fn numeric(self) -> u8 {
        self as u8
    }

    pub fn from_numeric(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unset),
            1 => Some(Self::Single),
            2 => Some(Self::Double),
            3 => Some(Self::Triple),
            4 => Some(Self::Quadruple),
            5 => Some(Self::Quintuple),
            6 => Some(Self::Sextuple),
            _ => None,
        }
    }

    /// The next higher order, saturating at `Sextuple`.
    pub fn increased(self) -> Self {
        Self::from_numeric(self.numeric() + 1).unwrap_or(Self::Sextuple)
    }

    /// The next lower order, saturating at `Single`. `Unset` stays `Unset`.
    pub fn decreased(self) -> Self {
        match self {
            Self::Unset | Self::Single => self,
            other => Self::from_numeric(other.numeric() - 1).unwrap_or(Self::Single),
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid bond order string")]
pub struct ParseBondOrderError;

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "unset" => Ok(Self::Unset),
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            "4" | "q" | "quadruple" => Ok(Self::Quadruple),
            "5" | "quintuple" => Ok(Self::Quintuple),
            "6" | "sextuple" => Ok(Self::Sextuple),
            _ => Err(ParseBondOrderError),
        }
    }
}

impl TryFrom<String> for BondOrder {
    type Error = ParseBondOrderError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Unset => "Unset",
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Quadruple => "Quadruple",
                Self::Quintuple => "Quintuple",
                Self::Sextuple => "Sextuple",
            }
        )
    }
}

#[derive(Debug)]
struct BondData {
    builder: Builder,
    atoms: RefCell<Option<[Atom; 2]>>, // Endpoints, assigned at creation or later
    order: Cell<BondOrder>,
}

/// A graph edge connecting two atoms, carrying a mutable order.
///
/// Like [`Atom`], `Bond` is a shared handle compared by identity. Changing the
/// order through any handle is visible through every other handle, including
/// the ones stored in containers and rings.
#[derive(Clone)]
pub struct Bond(Rc<BondData>);

handle_identity!(Bond);

impl Bond {
    pub(crate) fn new(builder: Builder, atoms: Option<[Atom; 2]>, order: BondOrder) -> Self {
        Self(Rc::new(BondData {
            builder,
            atoms: RefCell::new(atoms),
            order: Cell::new(order),
        }))
    }

    /// Both endpoints, or `None` for a bond that has not been connected yet.
    pub fn atoms(&self) -> Option<(Atom, Atom)> {
        self.0
            .atoms
            .borrow()
            .as_ref()
            .map(|[a, b]| (a.clone(), b.clone()))
    }

    pub fn begin(&self) -> Option<Atom> {
        self.atoms().map(|(a, _)| a)
    }

    pub fn end(&self) -> Option<Atom> {
        self.atoms().map(|(_, b)| b)
    }

    pub fn set_atoms(&self, begin: &Atom, end: &Atom) {
        *self.0.atoms.borrow_mut() = Some([begin.clone(), end.clone()]);
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.0
            .atoms
            .borrow()
            .as_ref()
            .is_some_and(|endpoints| endpoints.contains(atom))
    }

    /// The endpoint opposite `atom`, or `None` if `atom` is not an endpoint.
    pub fn other(&self, atom: &Atom) -> Option<Atom> {
        let (a, b) = self.atoms()?;
        if &a == atom {
            Some(b)
        } else if &b == atom {
            Some(a)
        } else {
            None
        }
    }

    pub fn order(&self) -> BondOrder {
        self.0.order.get()
    }

    pub fn set_order(&self, order: BondOrder) {
        self.0.order.set(order);
    }

    pub fn increase_order(&self) {
        self.0.order.set(self.order().increased());
    }

    pub fn decrease_order(&self) {
        self.0.order.set(self.order().decreased());
    }

    /// Returns `true` if both handles refer to the same bond.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl ChemObject for Bond {
    fn builder(&self) -> &Builder {
        &self.0.builder
    }
}

impl fmt::Debug for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bond")
            .field("order", &self.order())
            .field("atoms", &self.0.atoms.borrow())
            .finish()
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.atoms() {
            Some((a, b)) => write!(f, "Bond({}, {}, {})", self.order(), a, b),
            None => write!(f, "Bond({})", self.order()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::test_support::assert_single_line;

    #[test]
    fn bond_order_from_str_parses_valid_strings() {
        assert_eq!("1".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("single".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("S".parse::<BondOrder>().unwrap(), BondOrder::Single);
        assert_eq!("2".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("D".parse::<BondOrder>().unwrap(), BondOrder::Double);
        assert_eq!("triple".parse::<BondOrder>().unwrap(), BondOrder::Triple);
        assert_eq!("Q".parse::<BondOrder>().unwrap(), BondOrder::Quadruple);
        assert_eq!("6".parse::<BondOrder>().unwrap(), BondOrder::Sextuple);
        assert_eq!("unset".parse::<BondOrder>().unwrap(), BondOrder::Unset);
    }

    #[test]
    fn bond_order_from_str_rejects_invalid_strings() {
        assert!("".parse::<BondOrder>().is_err());
        assert!("aromatic".parse::<BondOrder>().is_err());
        assert!("7".parse::<BondOrder>().is_err());
    }

    #[test]
    fn bond_order_display_outputs_expected_strings() {
        assert_eq!(BondOrder::Single.to_string(), "Single");
        assert_eq!(BondOrder::Double.to_string(), "Double");
        assert_eq!(BondOrder::Sextuple.to_string(), "Sextuple");
        assert_eq!(BondOrder::Unset.to_string(), "Unset");
    }

    #[test]
    fn bond_order_default_is_single() {
        assert_eq!(BondOrder::default(), BondOrder::Single);
    }

    #[test]
    fn bond_order_numeric_weights() {
        assert_eq!(BondOrder::Unset.numeric(), 0);
        assert_eq!(BondOrder::Single.numeric(), 1);
        assert_eq!(BondOrder::Triple.numeric(), 3);
        assert_eq!(BondOrder::from_numeric(2), Some(BondOrder::Double));
        assert_eq!(BondOrder::from_numeric(9), None);
    }

    #[test]
    fn bond_order_stepping_saturates() {
        assert_eq!(BondOrder::Unset.increased(), BondOrder::Single);
        assert_eq!(BondOrder::Single.increased(), BondOrder::Double);
        assert_eq!(BondOrder::Sextuple.increased(), BondOrder::Sextuple);
        assert_eq!(BondOrder::Triple.decreased(), BondOrder::Double);
        assert_eq!(BondOrder::Single.decreased(), BondOrder::Single);
        assert_eq!(BondOrder::Unset.decreased(), BondOrder::Unset);
    }

    #[test]
    fn create_bond_initializes_fields_correctly() {
        let builder = Builder::default();
        let a1 = builder.create_atom("C");
        let a2 = builder.create_atom("O");
        let bond = builder.create_bond(&a1, &a2, BondOrder::Double);
        assert_eq!(bond.atoms(), Some((a1.clone(), a2.clone())));
        assert_eq!(bond.begin(), Some(a1));
        assert_eq!(bond.end(), Some(a2));
        assert_eq!(bond.order(), BondOrder::Double);
    }

    #[test]
    fn new_bond_is_unconnected_and_unset() {
        let bond = Builder::default().new_bond();
        assert_eq!(bond.atoms(), None);
        assert_eq!(bond.order(), BondOrder::Unset);
        assert_eq!(bond.to_string(), "Bond(Unset)");
    }

    #[test]
    fn set_atoms_connects_a_new_bond() {
        let builder = Builder::default();
        let bond = builder.new_bond();
        let a1 = builder.create_atom("C");
        let a2 = builder.create_atom("N");
        bond.set_atoms(&a1, &a2);
        assert!(bond.contains(&a1));
        assert!(bond.contains(&a2));
    }

    #[test]
    fn bond_contains_returns_false_for_unrelated_atom() {
        let builder = Builder::default();
        let a1 = builder.create_atom("C");
        let a2 = builder.create_atom("C");
        let unrelated = builder.create_atom("C");
        let bond = builder.create_bond(&a1, &a2, BondOrder::Single);
        assert!(!bond.contains(&unrelated));
        assert!(!builder.new_bond().contains(&a1));
    }

    #[test]
    fn other_returns_the_opposite_endpoint() {
        let builder = Builder::default();
        let a1 = builder.create_atom("C");
        let a2 = builder.create_atom("N");
        let bond = builder.create_bond(&a1, &a2, BondOrder::Single);
        assert_eq!(bond.other(&a1), Some(a2.clone()));
        assert_eq!(bond.other(&a2), Some(a1));
        assert_eq!(bond.other(&builder.create_atom("C")), None);
    }

    #[test]
    fn order_changes_are_visible_through_every_handle() {
        let builder = Builder::default();
        let bond = builder.create_bond(
            &builder.create_atom("C"),
            &builder.create_atom("C"),
            BondOrder::Single,
        );
        let alias = bond.clone();
        alias.increase_order();
        assert_eq!(bond.order(), BondOrder::Double);
        bond.decrease_order();
        assert_eq!(alias.order(), BondOrder::Single);
        bond.set_order(BondOrder::Triple);
        assert_eq!(alias.order(), BondOrder::Triple);
    }

    #[test]
    fn display_is_single_line() {
        let builder = Builder::default();
        let bond = builder.create_bond(
            &builder.create_atom("C"),
            &builder.create_atom("O\n"),
            BondOrder::Double,
        );
        let shown = bond.to_string();
        assert_single_line(&shown);
        assert!(shown.starts_with("Bond(Double, Atom(C), "));
    }
}
