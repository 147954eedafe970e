use tracing::trace;

use crate::catalog::Entry;
use crate::filtering::criteria::{FilterCriteria, ParameterRange, SearchTerm, TypeFilter};

pub trait EntryFilter {
    fn matches(&self, entry: &Entry) -> bool;
}

impl EntryFilter for SearchTerm {
    fn matches(&self, entry: &Entry) -> bool {
        // Empty needle is a substring of every name.
        entry.name().to_lowercase().contains(self.needle())
    }
}

impl EntryFilter for TypeFilter {
    fn matches(&self, entry: &Entry) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Exactly(t) => entry.model_type() == t,
        }
    }
}

impl EntryFilter for ParameterRange {
    fn matches(&self, entry: &Entry) -> bool {
        self.contains(entry.parameters())
    }
}

/// Conjunction of the three criteria.
impl EntryFilter for FilterCriteria {
    fn matches(&self, entry: &Entry) -> bool {
        self.search().matches(entry)
            && self.selected_type().matches(entry)
            && self.parameter_range().matches(entry)
    }
}

/// The entries of `catalog` that pass every criterion, in catalog order.
///
/// Pure: the same catalog and criteria always produce the same slice of
/// references. An empty result is a normal outcome.
pub fn apply_filters<'a>(catalog: &'a [Entry], criteria: &FilterCriteria) -> Vec<&'a Entry> {
    let visible: Vec<&Entry> = catalog.iter().filter(|e| criteria.matches(e)).collect();

    trace!(
        considered = catalog.len(),
        visible = visible.len(),
        search = criteria.search().as_str(),
        selected_type = criteria.selected_type().label(),
        "filters applied"
    );

    visible
}
