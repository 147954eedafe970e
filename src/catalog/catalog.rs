// Read-only after construction:
// no insert
// no remove
// no refresh

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::catalog::entry::Entry;
use crate::types::identifiers::{CatalogVersion, EntryId, ModelType};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate entry ID: {0}")]
    DuplicateEntryId(EntryId),
}

/// The canonical, ordered list of entries for a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
    version: CatalogVersion,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Fails on the first id that appears twice.
    pub fn new(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            if !seen.insert(entry.id()) {
                return Err(CatalogError::DuplicateEntryId(entry.id().clone()));
            }
        }

        let catalog = Self::from_unique(entries);
        debug!(
            entries = catalog.len(),
            version = catalog.version.as_str(),
            "catalog built"
        );

        Ok(catalog)
    }

    fn from_unique(entries: Vec<Entry>) -> Self {
        let records: Vec<Vec<u8>> = entries.iter().map(Entry::canonical_record).collect();
        let version = CatalogVersion::from_records(records.iter().map(Vec::as_slice));
        Catalog { entries, version }
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let f = fs::File::open(path)?;
        let entries: Vec<Entry> = serde_json::from_reader(f)?;
        debug!(path = %path.display(), "catalog file read");
        Self::new(entries)
    }

    /// The three reference models the directory ships with.
    pub fn seed() -> Self {
        let entries = vec![
            Entry::new(
                1u64,
                "GPT-3",
                ModelType::gpt(),
                175_000_000_000,
                "OpenAI's powerful language model.",
            ),
            Entry::new(
                2u64,
                "BERT",
                ModelType::bert(),
                340_000_000,
                "Google's bidirectional transformer model.",
            ),
            Entry::new(
                3u64,
                "T5",
                ModelType::t5(),
                11_000_000_000,
                "Google's Text-to-Text Transfer Transformer.",
            ),
        ];
        Self::from_unique(entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    /// Largest parameter count in the catalog, `None` when empty.
    pub fn max_parameters(&self) -> Option<u64> {
        self.entries.iter().map(Entry::parameters).max()
    }

    /// Distinct model types, in order of first appearance.
    pub fn present_types(&self) -> Vec<&ModelType> {
        let mut seen = BTreeSet::new();
        self.entries
            .iter()
            .map(Entry::model_type)
            .filter(|t| seen.insert(*t))
            .collect()
    }
}
