use super::atom::Atom;
use super::{ChemObject, handle_identity};
use crate::core::builder::Builder;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

const LONE_PAIR_ELECTRON_COUNT: u8 = 2;

#[derive(Debug)]
struct LonePairData {
    builder: Builder,
    atom: RefCell<Option<Atom>>,
}

/// A non-bonding electron pair sitting on one atom.
#[derive(Clone)]
pub struct LonePair(Rc<LonePairData>);

handle_identity!(LonePair);

impl LonePair {
    pub(crate) fn new(builder: Builder, atom: Option<Atom>) -> Self {
        Self(Rc::new(LonePairData {
            builder,
            atom: RefCell::new(atom),
        }))
    }

    pub fn atom(&self) -> Option<Atom> {
        self.0.atom.borrow().clone()
    }

    pub fn set_atom(&self, atom: &Atom) {
        *self.0.atom.borrow_mut() = Some(atom.clone());
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.0.atom.borrow().as_ref() == Some(atom)
    }

    pub fn electron_count(&self) -> u8 {
        LONE_PAIR_ELECTRON_COUNT
    }

    /// Returns `true` if both handles refer to the same lone pair.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl ChemObject for LonePair {
    fn builder(&self) -> &Builder {
        &self.0.builder
    }
}

impl fmt::Debug for LonePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LonePair")
            .field("atom", &self.0.atom.borrow())
            .finish()
    }
}

impl fmt::Display for LonePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.atom.borrow().as_ref() {
            Some(atom) => write!(f, "LonePair({atom})"),
            None => f.write_str("LonePair()"),
        }
    }
}
