//! Borrowing reference wrappers.
//!
//! An [`ObjectRef`] stands in for an atom or bond without being one: it
//! forwards to the object it wraps, which may itself be another wrapper.
//! Wrappers only borrow their target, so they can never outlive it or keep it
//! alive. [`deref`] resolves any chain of wrappers to the underlying object.

use super::atom::Atom;
use super::topology::Bond;
use std::fmt;
use std::ops::Deref;

/// What a reference wrapper points at: the object itself or another wrapper.
pub enum RefTarget<'a, T> {
    Object(&'a T),
    Wrapper(&'a ObjectRef<'a, T>),
}

impl<T> Clone for RefTarget<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RefTarget<'_, T> {}

impl<'a, T> RefTarget<'a, T> {
    /// Follows wrappers until a plain object is reached.
    pub fn resolve(self) -> &'a T {
        let mut target = self;
        loop {
            match target {
                RefTarget::Object(object) => return object,
                RefTarget::Wrapper(wrapper) => target = wrapper.target,
            }
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self, RefTarget::Wrapper(_))
    }
}

impl<'a, T> From<&'a ObjectRef<'a, T>> for RefTarget<'a, T> {
    fn from(wrapper: &'a ObjectRef<'a, T>) -> Self {
        RefTarget::Wrapper(wrapper)
    }
}

impl<'a> From<&'a Atom> for RefTarget<'a, Atom> {
    fn from(atom: &'a Atom) -> Self {
        RefTarget::Object(atom)
    }
}

impl<'a> From<&'a Bond> for RefTarget<'a, Bond> {
    fn from(bond: &'a Bond) -> Self {
        RefTarget::Object(bond)
    }
}

/// A wrapper that forwards to an atom, a bond, or another wrapper.
///
/// Through [`Deref`] the wrapper can be used wherever the target's methods are
/// needed: `bond_ref.order()` reads the order of the wrapped bond.
pub struct ObjectRef<'a, T> {
    target: RefTarget<'a, T>,
}

pub type AtomRef<'a> = ObjectRef<'a, Atom>;
pub type BondRef<'a> = ObjectRef<'a, Bond>;

impl<'a, T> ObjectRef<'a, T> {
    pub fn new(target: impl Into<RefTarget<'a, T>>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// The directly wrapped target, without unwrapping further.
    pub fn target(&self) -> RefTarget<'a, T> {
        self.target
    }

    /// The underlying object after unwrapping every layer.
    pub fn resolve(&self) -> &'a T {
        self.target.resolve()
    }
}

impl<T> Deref for ObjectRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.resolve()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObjectRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef").field(self.resolve()).finish()
    }
}

/// Resolves a possibly indirect reference to the object it stands for.
///
/// `None` stays `None`, a plain object is returned as is, and a wrapper is
/// unwrapped through any number of layers. The result always borrows an
/// existing object; nothing is allocated.
pub fn deref<'a, T, R>(reference: Option<R>) -> Option<&'a T>
where
    R: Into<RefTarget<'a, T>>,
{
    reference.map(|r| r.into().resolve())
}
