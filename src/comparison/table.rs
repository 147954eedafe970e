use crate::comparison::set::ComparisonSet;
use crate::format::format_parameters;
use crate::types::directory_view::{ComparisonRow, ComparisonTable};

/// Project the comparison set into table rows, in selection order.
///
/// `None` for an empty set: there is no table to show.
pub fn build_table(set: &ComparisonSet) -> Option<ComparisonTable> {
    if set.is_empty() {
        return None;
    }

    let rows = set
        .entries()
        .iter()
        .map(|entry| ComparisonRow {
            id: entry.id().clone(),
            name: entry.name().to_string(),
            model_type: entry.model_type().clone(),
            parameters: entry.parameters(),
            parameters_display: format_parameters(entry.parameters()),
            description: entry.description().to_string(),
        })
        .collect();

    Some(ComparisonTable {
        columns: ComparisonTable::COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    })
}
