use crate::error::{CliError, Result};
use chemgraph::core::builder::BackendKind;
use chemgraph::core::models::topology::BondOrder;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct StructureFile {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub atoms: Vec<FileAtom>,
    #[serde(default)]
    pub bonds: Vec<FileBond>,
    #[serde(default)]
    pub lone_pairs: Vec<FileLonePair>,
    pub monomer: Option<FileMonomer>,
    #[serde(default)]
    pub rings: Vec<FileRing>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileAtom {
    pub id: String,
    pub symbol: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileBond {
    pub atoms: [String; 2],
    #[serde(default)]
    pub order: BondOrder,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileLonePair {
    pub atom: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileMonomer {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub chain_id: Option<String>,
    pub res_seq: Option<String>,
    pub icode: Option<String>,
}

/// Atom ids listed in cycle order; consecutive atoms (and the last with the
/// first) must already be bonded.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileRing {
    pub atoms: Vec<String>,
}

impl StructureFile {
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading structure file from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
