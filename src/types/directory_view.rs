use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Entry;
use crate::comparison::SelectionAction;
use crate::filtering::FilterCriteria;
use crate::types::identifiers::{CatalogVersion, EntryId, ModelType};

/// One row of the side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub id: EntryId,
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    pub parameters: u64,
    /// Rendering of `parameters`; never compared against.
    pub parameters_display: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub const COLUMNS: [&'static str; 4] = ["Name", "Type", "Parameters", "Description"];
}

/// A visible catalog card and the toggle it offers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibleEntry {
    pub entry: Entry,
    pub parameters_display: String,
    pub action: SelectionAction,
    pub action_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewMetadata {
    pub catalog_version: CatalogVersion,
    pub entries_considered: usize,
    pub entries_visible: usize,
    pub entries_selected: usize,
    pub generated_at: DateTime<Utc>, // informational only
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryView {
    pub criteria: FilterCriteria,
    pub visible: Vec<VisibleEntry>,
    pub comparison: Option<ComparisonTable>,
    pub metadata: ViewMetadata,
}
