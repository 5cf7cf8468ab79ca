use std::error::Error as StdError;
use thiserror::Error;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// General failure raised by chemistry logic built on top of the object model.
///
/// The message shown to the user is always the explanation the error was
/// created with; an attached cause is only reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ChemError {
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl ChemError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error that wraps an underlying cause.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxedSource>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Raised when an atom or element cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct NoSuchAtomError(pub String);

impl NoSuchAtomError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Raised by algorithms that give up after exceeding a time budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{} did not finish after {} ms.",
    .description.as_deref().unwrap_or("Operation"),
    .elapsed_ms
)]
pub struct IntractableError {
    elapsed_ms: u64,
    description: Option<String>,
}

impl IntractableError {
    pub fn new(elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms,
            description: None,
        }
    }

    /// Creates a timeout error naming the operation that ran out of time.
    pub fn timeout(description: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms,
            description: Some(description.into()),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Malformed input to a ring walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error("Bond is not a member of the ring")]
    BondNotInRing,

    #[error("Atom is not an endpoint of the bond")]
    AtomNotOnBond,

    #[error("No other ring bond is incident on the atom")]
    NoNextBond,

    #[error("Walk did not return to the starting bond")]
    NotClosed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn chem_error_message_is_the_explanation() {
        let err = ChemError::new("Some exception message");
        assert_eq!(err.to_string(), "Some exception message");
        assert_eq!(err.message(), "Some exception message");
        assert!(err.source().is_none());
    }

    #[test]
    fn chem_error_message_is_unchanged_by_a_cause() {
        let cause = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let err = ChemError::with_source("Some exception message", cause);
        assert_eq!(err.to_string(), "Some exception message");
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }

    #[test]
    fn no_such_atom_error_passes_message_through() {
        let err = NoSuchAtomError::new("Some exception message");
        assert_eq!(err.to_string(), "Some exception message");
    }

    #[test]
    fn intractable_error_without_description() {
        let err = IntractableError::new(12);
        assert_eq!(err.to_string(), "Operation did not finish after 12 ms.");
        assert_eq!(err.elapsed_ms(), 12);
        assert_eq!(err.description(), None);
    }

    #[test]
    fn intractable_error_with_description() {
        let err = IntractableError::timeout("MCS", 200);
        assert_eq!(err.to_string(), "MCS did not finish after 200 ms.");
        assert_eq!(err.description(), Some("MCS"));
    }

    #[test]
    fn traversal_error_messages_are_distinct() {
        assert_ne!(
            TraversalError::BondNotInRing.to_string(),
            TraversalError::AtomNotOnBond.to_string()
        );
    }
}
