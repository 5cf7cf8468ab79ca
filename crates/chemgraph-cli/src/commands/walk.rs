use super::load;
use crate::cli::WalkArgs;
use crate::config::Structure;
use crate::error::{CliError, Result};
use chemgraph::core::error::TraversalError;
use chemgraph::core::models::topology::Bond;
use tracing::{debug, info};

pub fn run(args: WalkArgs) -> Result<()> {
    let structure = load(&args.structure)?;
    let path = walk(&structure, args.ring, args.bond, args.reverse)?;

    info!("Ring {} visited {} bonds.", args.ring, path.len());
    for (step, bond) in path.iter().enumerate() {
        println!("{:>3}. {}", step + 1, bond);
    }
    Ok(())
}

/// Walks ring `ring` starting at its bond `bond`, leaving through the bond's
/// second atom (its first when `reverse` is set).
pub fn walk(structure: &Structure, ring: usize, bond: usize, reverse: bool) -> Result<Vec<Bond>> {
    let target = structure.rings.get(ring).ok_or_else(|| {
        CliError::Argument(format!(
            "Ring index {} is out of range; the structure has {} ring(s)",
            ring,
            structure.rings.len()
        ))
    })?;
    let start = target.bond(bond).ok_or_else(|| {
        CliError::Argument(format!(
            "Bond index {} is out of range; ring {} has {} bond(s)",
            bond,
            ring,
            target.bond_count()
        ))
    })?;

    let pivot = if reverse { start.begin() } else { start.end() };
    let pivot = pivot.ok_or(TraversalError::AtomNotOnBond)?;
    debug!("Starting walk at {} through {}.", start, pivot);

    Ok(target.walk(start, &pivot)?)
}
