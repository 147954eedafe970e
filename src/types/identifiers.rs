use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identity of a catalog entry.
///
/// Catalog files may use either JSON integers or strings for ids, so both are
/// accepted. Two ids are equal only if they have the same variant and value:
/// `1` and `"1"` are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(u64),
    Text(String),
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        EntryId::Number(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId::Text(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId::Text(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{n}"),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

/// Architecture family label of a model.
///
/// Matching is exact and case-sensitive: `"gpt"` is not `"GPT"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelType(String);

impl ModelType {
    /// The fixed type enumeration offered by the type selector.
    pub const KNOWN: [&'static str; 3] = ["GPT", "BERT", "T5"];

    pub fn new(label: impl Into<String>) -> Self {
        ModelType(label.into())
    }

    pub fn gpt() -> Self {
        ModelType::new("GPT")
    }

    pub fn bert() -> Self {
        ModelType::new("BERT")
    }

    pub fn t5() -> Self {
        ModelType::new("T5")
    }

    /// All members of [`ModelType::KNOWN`], in selector order.
    pub fn known() -> Vec<ModelType> {
        Self::KNOWN.iter().map(|label| ModelType::new(*label)).collect()
    }

    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content fingerprint of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    /// Hash a sequence of canonical entry encodings, in order.
    ///
    /// Each record is length-prefixed so that `["ab", "c"]` and `["a", "bc"]`
    /// hash differently.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut hasher = Sha256::new();
        for record in records {
            hasher.update((record.len() as u64).to_be_bytes());
            hasher.update(record);
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
