use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::types::identifiers::{EntryId, ModelType};

/// A single model record in the catalog.
///
/// Entries are read-only once built. Identity is carried by `id` alone; two
/// entries with identical fields but different ids are different entries.
/// Entries do not implement `PartialEq`; compare them with [`Entry::same_identity`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    name: String,
    #[serde(rename = "type")]
    model_type: ModelType,
    #[serde(deserialize_with = "deserialize_parameters")]
    parameters: u64,
    description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParameters {
    Whole(u64),
    Float(f64),
}

/// 2^64, the first float past `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Accept `175000000000` as well as `175e9` or `1.75e11`.
/// Fractional, negative and non-finite magnitudes are rejected.
fn deserialize_parameters<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawParameters::deserialize(deserializer)? {
        RawParameters::Whole(n) => Ok(n),
        RawParameters::Float(f) => {
            if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f < U64_LIMIT {
                Ok(f as u64)
            } else {
                Err(D::Error::custom(format!(
                    "parameters must be a whole non-negative count, got {f}"
                )))
            }
        }
    }
}

impl Entry {
    pub fn new(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        model_type: ModelType,
        parameters: u64,
        description: impl Into<String>,
    ) -> Self {
        Entry {
            id: id.into(),
            name: name.into(),
            model_type,
            parameters,
            description: description.into(),
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_type(&self) -> &ModelType {
        &self.model_type
    }

    pub fn parameters(&self) -> u64 {
        self.parameters
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Canonical JSON encoding used for catalog fingerprinting.
    ///
    /// Keys are sorted and strings are JSON-escaped, so no field value can
    /// bleed into its neighbour. A numeric id stays a JSON number and a text
    /// id a JSON string.
    pub(crate) fn canonical_record(&self) -> Vec<u8> {
        let id = match &self.id {
            EntryId::Number(n) => Value::from(*n),
            EntryId::Text(s) => Value::from(s.as_str()),
        };

        let mut record = Map::new();
        record.insert("description".into(), Value::from(self.description.as_str()));
        record.insert("id".into(), id);
        record.insert("name".into(), Value::from(self.name.as_str()));
        record.insert("parameters".into(), Value::from(self.parameters));
        record.insert("type".into(), Value::from(self.model_type.as_str()));

        Value::Object(record).to_string().into_bytes()
    }

    /// Identity comparison. Field values are ignored.
    pub fn same_identity(&self, other: &Entry) -> bool {
        self.id == other.id
    }
}
