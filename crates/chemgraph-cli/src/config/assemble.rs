use super::file::{FileMonomer, FileRing, StructureFile};
use crate::error::{CliError, Result};
use chemgraph::core::builder::Builder;
use chemgraph::core::models::atom::Atom;
use chemgraph::core::models::container::AtomContainer;
use chemgraph::core::models::monomer::PdbMonomer;
use chemgraph::core::models::ring::Ring;
use std::collections::HashMap;
use tracing::{debug, info};

/// Objects built from a structure file, all created through one builder.
#[derive(Debug)]
pub struct Structure {
    pub builder: Builder,
    pub molecule: AtomContainer,
    pub monomer: Option<PdbMonomer>,
    pub rings: Vec<Ring>,
}

pub fn assemble(file: &StructureFile) -> Result<Structure> {
    let builder = Builder::for_backend(file.backend);
    info!("Assembling structure with the '{}' backend.", builder.name());

    let mut molecule = builder.new_atom_container();
    let mut ids: HashMap<&str, Atom> = HashMap::new();

    for entry in &file.atoms {
        let atom = match &entry.symbol {
            Some(symbol) => builder.create_atom(symbol),
            None => builder.new_atom(),
        };
        if ids.insert(entry.id.as_str(), atom.clone()).is_some() {
            return Err(CliError::Config(format!(
                "Duplicate atom id '{}'",
                entry.id
            )));
        }
        molecule.add_atom(atom);
    }

    let lookup = |id: &str| -> Result<Atom> {
        ids.get(id)
            .cloned()
            .ok_or_else(|| CliError::Config(format!("Unknown atom id '{}'", id)))
    };

    for entry in &file.bonds {
        let [begin, end] = &entry.atoms;
        if begin == end {
            return Err(CliError::Config(format!(
                "Bond joins atom '{}' to itself",
                begin
            )));
        }
        let (a, b) = (lookup(begin.as_str())?, lookup(end.as_str())?);
        if molecule.bond_between(&a, &b).is_some() {
            return Err(CliError::Config(format!(
                "Atoms '{}' and '{}' are bonded twice",
                begin, end
            )));
        }
        molecule.add_bond(builder.create_bond(&a, &b, entry.order));
    }

    for entry in &file.lone_pairs {
        let atom = lookup(entry.atom.as_str())?;
        molecule.add_lone_pair(builder.create_lone_pair(&atom));
    }

    let rings = file
        .rings
        .iter()
        .enumerate()
        .map(|(index, ring)| assemble_ring(&builder, &molecule, &lookup, index, ring))
        .collect::<Result<Vec<_>>>()?;

    let monomer = file
        .monomer
        .as_ref()
        .map(|spec| assemble_monomer(&builder, &molecule, spec));

    debug!(
        "Assembled {} atoms, {} bonds, {} lone pairs and {} rings.",
        molecule.atom_count(),
        molecule.bond_count(),
        molecule.lone_pair_count(),
        rings.len()
    );

    Ok(Structure {
        builder,
        molecule,
        monomer,
        rings,
    })
}

fn assemble_ring(
    builder: &Builder,
    molecule: &AtomContainer,
    lookup: &impl Fn(&str) -> Result<Atom>,
    index: usize,
    spec: &FileRing,
) -> Result<Ring> {
    if spec.atoms.len() < 3 {
        return Err(CliError::Config(format!(
            "Ring {} needs at least 3 atoms, found {}",
            index,
            spec.atoms.len()
        )));
    }

    let atoms = spec
        .atoms
        .iter()
        .map(|id| lookup(id.as_str()))
        .collect::<Result<Vec<_>>>()?;

    let mut ring = builder.new_ring();
    for atom in &atoms {
        if !ring.add_atom(atom.clone()) {
            return Err(CliError::Config(format!(
                "Ring {} lists an atom more than once",
                index
            )));
        }
    }
    for (i, atom) in atoms.iter().enumerate() {
        let next = &atoms[(i + 1) % atoms.len()];
        let bond = molecule.bond_between(atom, next).ok_or_else(|| {
            CliError::Config(format!(
                "Ring {}: atoms '{}' and '{}' are not bonded",
                index,
                spec.atoms[i],
                spec.atoms[(i + 1) % atoms.len()]
            ))
        })?;
        ring.add_bond(bond.clone());
    }
    Ok(ring)
}

fn assemble_monomer(builder: &Builder, molecule: &AtomContainer, spec: &FileMonomer) -> PdbMonomer {
    let mut monomer = builder.new_pdb_monomer();
    monomer.monomer_name = spec.name.clone();
    monomer.monomer_type = spec.kind.clone();
    monomer.chain_id = spec.chain_id.clone();
    monomer.res_seq = spec.res_seq.clone();
    monomer.icode = spec.icode.clone();
    monomer.add_all(molecule);
    monomer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{FileAtom, FileBond, FileLonePair};
    use chemgraph::core::models::ChemObject;
    use chemgraph::core::models::topology::BondOrder;

    fn atom(id: &str, symbol: &str) -> FileAtom {
        FileAtom {
            id: id.to_string(),
            symbol: Some(symbol.to_string()),
        }
    }

    fn bond(a: &str, b: &str, order: BondOrder) -> FileBond {
        FileBond {
            atoms: [a.to_string(), b.to_string()],
            order,
        }
    }

    fn cyclopropene() -> StructureFile {
        StructureFile {
            atoms: vec![atom("c1", "C"), atom("c2", "C"), atom("c3", "C")],
            bonds: vec![
                bond("c1", "c2", BondOrder::Double),
                bond("c2", "c3", BondOrder::Single),
                bond("c3", "c1", BondOrder::Single),
            ],
            rings: vec![FileRing {
                atoms: vec!["c1".into(), "c2".into(), "c3".into()],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn assembles_atoms_bonds_and_rings() {
        let structure = assemble(&cyclopropene()).unwrap();
        assert_eq!(structure.molecule.atom_count(), 3);
        assert_eq!(structure.molecule.bond_count(), 3);
        assert_eq!(structure.rings.len(), 1);

        let ring = &structure.rings[0];
        assert!(ring.is_closed_cycle());
        assert_eq!(ring.bond_order_sum(), 4);
        assert!(structure.molecule.contains_bond(ring.bond(0).unwrap()));
        assert!(structure.monomer.is_none());
    }

    #[test]
    fn every_object_shares_the_configured_builder() {
        let mut file = cyclopropene();
        file.backend = chemgraph::core::builder::BackendKind::Tracing;
        let structure = assemble(&file).unwrap();
        assert_eq!(structure.builder.name(), "tracing");
        assert_eq!(structure.molecule.builder(), &structure.builder);
        assert_eq!(structure.rings[0].builder(), &structure.builder);
    }

    #[test]
    fn monomer_receives_fields_and_members() {
        let mut file = cyclopropene();
        file.lone_pairs.push(FileLonePair {
            atom: "c1".to_string(),
        });
        file.monomer = Some(FileMonomer {
            name: Some("CPR1".into()),
            kind: Some("CPR".into()),
            chain_id: Some("B".into()),
            ..Default::default()
        });

        let structure = assemble(&file).unwrap();
        let monomer = structure.monomer.unwrap();
        assert_eq!(monomer.monomer_type.as_deref(), Some("CPR"));
        assert_eq!(monomer.chain_id.as_deref(), Some("B"));
        assert_eq!(monomer.res_seq, None);
        assert_eq!(monomer.atom_count(), 3);
        assert_eq!(monomer.lone_pair_count(), 1);
        assert_eq!(monomer.atom(0), structure.molecule.atom(0));
    }

    #[test]
    fn unknown_atom_ids_are_reported() {
        let mut file = cyclopropene();
        file.bonds.push(bond("c1", "x9", BondOrder::Single));
        let err = assemble(&file).unwrap_err();
        assert!(matches!(&err, CliError::Config(msg) if msg.contains("'x9'")));
    }

    #[test]
    fn duplicate_atom_ids_are_reported() {
        let mut file = cyclopropene();
        file.atoms.push(atom("c2", "N"));
        assert!(matches!(assemble(&file), Err(CliError::Config(_))));
    }

    #[test]
    fn rings_must_follow_existing_bonds() {
        let mut file = cyclopropene();
        file.bonds.pop();
        let err = assemble(&file).unwrap_err();
        assert!(matches!(&err, CliError::Config(msg) if msg.contains("not bonded")));
    }

    #[test]
    fn rings_need_three_atoms() {
        let mut file = cyclopropene();
        file.rings[0].atoms.truncate(2);
        assert!(matches!(assemble(&file), Err(CliError::Config(_))));
    }

    #[test]
    fn self_bonds_and_repeated_bonds_are_rejected() {
        let mut file = cyclopropene();
        file.bonds.push(bond("c1", "c1", BondOrder::Single));
        assert!(matches!(assemble(&file), Err(CliError::Config(_))));

        let mut file = cyclopropene();
        file.bonds.push(bond("c2", "c1", BondOrder::Single));
        assert!(matches!(assemble(&file), Err(CliError::Config(_))));
    }
}
