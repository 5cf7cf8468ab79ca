pub mod inspect;
pub mod walk;

use crate::cli::StructureArgs;
use crate::config::{self, Structure, StructureFile};
use crate::error::Result;
use tracing::info;

/// Loads the structure named on the command line, applying the backend
/// override if one was given.
pub fn load(args: &StructureArgs) -> Result<Structure> {
    info!("Loading structure from {:?}", &args.input);
    let mut file = StructureFile::load(&args.input)?;
    if let Some(backend) = args.backend {
        info!("Overriding builder backend with '{}'.", backend);
        file.backend = backend;
    }
    config::assemble(&file)
}
