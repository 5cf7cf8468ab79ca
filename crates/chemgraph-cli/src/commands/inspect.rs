use super::load;
use crate::cli::InspectArgs;
use crate::config::Structure;
use crate::error::Result;
use std::fmt::Write;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let structure = load(&args.structure)?;
    info!("Summarizing structure.");
    print!("{}", report(&structure));
    Ok(())
}

/// Renders the summary printed by `inspect`, one fact per line.
pub fn report(structure: &Structure) -> String {
    let mut out = String::new();
    let molecule = &structure.molecule;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Backend: {}", structure.builder.name());
    let _ = writeln!(out, "{}", molecule);
    let _ = writeln!(
        out,
        "Atoms: {}, Bonds: {}, Lone pairs: {}",
        molecule.atom_count(),
        molecule.bond_count(),
        molecule.lone_pair_count()
    );

    for atom in molecule.atoms() {
        if let Err(e) = atom.atomic_number() {
            let _ = writeln!(out, "Warning: {} ({})", e, atom);
        }
    }

    if let Some(monomer) = &structure.monomer {
        let _ = writeln!(out, "{}", monomer);
    }

    for (index, ring) in structure.rings.iter().enumerate() {
        let _ = writeln!(
            out,
            "Ring {}: size {}, bond order sum {}, closed cycle: {}",
            index,
            ring.ring_size(),
            ring.bond_order_sum(),
            if ring.is_closed_cycle() { "yes" } else { "no" }
        );
    }
    out
}
