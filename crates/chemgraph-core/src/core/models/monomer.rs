use super::container::AtomContainer;
use super::{ChemObject, OptText};
use crate::core::builder::Builder;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A named substructure, such as an amino acid residue or a nucleotide.
///
/// Both attributes are optional and independent of each other.
#[derive(Debug)]
pub struct Monomer {
    container: AtomContainer,
    /// The name of the monomer (e.g., "TRP279").
    pub monomer_name: Option<String>,
    /// The type of the monomer (e.g., "TRP").
    pub monomer_type: Option<String>,
}

impl Monomer {
    pub(crate) fn new(builder: Builder) -> Self {
        Self {
            container: AtomContainer::new(builder),
            monomer_name: None,
            monomer_type: None,
        }
    }

    pub(crate) fn from_parts(
        container: AtomContainer,
        monomer_name: Option<String>,
        monomer_type: Option<String>,
    ) -> Self {
        Self {
            container,
            monomer_name,
            monomer_type,
        }
    }

    pub fn as_container(&self) -> &AtomContainer {
        &self.container
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name={}, type={}, ",
            OptText(&self.monomer_name),
            OptText(&self.monomer_type)
        )?;
        self.container.write_contents(f)
    }
}

impl Deref for Monomer {
    type Target = AtomContainer;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

impl DerefMut for Monomer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.container
    }
}

impl ChemObject for Monomer {
    fn builder(&self) -> &Builder {
        self.container.builder()
    }
}

impl fmt::Display for Monomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Monomer(")?;
        self.write_fields(f)?;
        f.write_str(")")
    }
}

/// A monomer carrying the residue fields of a PDB `ATOM` record.
///
/// All three PDB fields are absent until set.
#[derive(Debug)]
pub struct PdbMonomer {
    monomer: Monomer,
    /// Insertion code.
    pub icode: Option<String>,
    pub chain_id: Option<String>,
    /// Residue sequence number, kept as text as it appears in the record.
    pub res_seq: Option<String>,
}

impl PdbMonomer {
    pub(crate) fn new(builder: Builder) -> Self {
        Self {
            monomer: Monomer::new(builder),
            icode: None,
            chain_id: None,
            res_seq: None,
        }
    }

    pub(crate) fn from_parts(
        monomer: Monomer,
        icode: Option<String>,
        chain_id: Option<String>,
        res_seq: Option<String>,
    ) -> Self {
        Self {
            monomer,
            icode,
            chain_id,
            res_seq,
        }
    }

    pub fn as_monomer(&self) -> &Monomer {
        &self.monomer
    }
}

impl Deref for PdbMonomer {
    type Target = Monomer;

    fn deref(&self) -> &Self::Target {
        &self.monomer
    }
}

impl DerefMut for PdbMonomer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.monomer
    }
}

impl ChemObject for PdbMonomer {
    fn builder(&self) -> &Builder {
        self.monomer.builder()
    }
}

impl fmt::Display for PdbMonomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PDBMonomer(chain={}, resSeq={}, iCode={}, ",
            OptText(&self.chain_id),
            OptText(&self.res_seq),
            OptText(&self.icode)
        )?;
        self.monomer.write_fields(f)?;
        f.write_str(")")
    }
}
