use super::{ChemObject, handle_identity};
use crate::core::builder::Builder;
use crate::core::error::NoSuchAtomError;
use crate::core::utils::elements;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct AtomData {
    builder: Builder,
    symbol: RefCell<Option<String>>,
}

/// Represents an atom: a graph node standing for one occurrence of an element.
///
/// `Atom` is a shared handle. Cloning it produces another reference to the same
/// atom, and equality compares identity rather than attributes. Use
/// [`DeepClone`](super::clone::DeepClone) to obtain an independent copy.
#[derive(Clone)]
pub struct Atom(Rc<AtomData>);

handle_identity!(Atom);

impl Atom {
    pub(crate) fn new(builder: Builder, symbol: Option<&str>) -> Self {
        Self(Rc::new(AtomData {
            builder,
            symbol: RefCell::new(symbol.map(str::to_string)),
        }))
    }

    /// The element symbol (e.g., "C", "Cl"), if one has been assigned.
    pub fn symbol(&self) -> Option<String> {
        self.0.symbol.borrow().clone()
    }

    pub fn set_symbol(&self, symbol: &str) {
        *self.0.symbol.borrow_mut() = Some(symbol.to_string());
    }

    /// Resolves the atomic number of this atom's element.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchAtomError`] if no symbol is set or the symbol does not
    /// name a known element.
    pub fn atomic_number(&self) -> Result<u8, NoSuchAtomError> {
        let guard = self.0.symbol.borrow();
        let symbol = guard
            .as_deref()
            .ok_or_else(|| NoSuchAtomError::new("Atom has no element symbol"))?;
        elements::atomic_number(symbol)
            .ok_or_else(|| NoSuchAtomError::new(format!("Unknown element symbol '{symbol}'")))
    }

    /// Returns `true` if both handles refer to the same atom.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl ChemObject for Atom {
    fn builder(&self) -> &Builder {
        &self.0.builder
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Atom")
            .field("symbol", &self.0.symbol.borrow())
            .finish()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.symbol.borrow().as_deref() {
            Some(symbol) => write!(f, "Atom({})", symbol.escape_debug()),
            None => f.write_str("Atom()"),
        }
    }
}
