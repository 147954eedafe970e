use serde::{Deserialize, Serialize};

use crate::config::ParameterBounds;
use crate::types::identifiers::ModelType;

/// Case-insensitive name search.
/// Normalization rules:
/// - Lowercased once at construction
/// - No trimming; surrounding spaces are part of the needle
/// - Empty term matches every name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<String> for SearchTerm {
    fn from(raw: String) -> Self {
        SearchTerm::new(raw)
    }
}

impl From<SearchTerm> for String {
    fn from(term: SearchTerm) -> Self {
        term.raw
    }
}

/// Type constraint. Serialized as its selector label, `""` meaning any type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    Any,
    Exactly(ModelType),
}

impl TypeFilter {
    pub const ANY_LABEL: &'static str = "";

    /// Map a selector value to a filter. Labels outside the known enumeration
    /// are kept as-is and simply match nothing in a well-formed catalog.
    pub fn from_label(label: &str) -> Self {
        if label == Self::ANY_LABEL {
            TypeFilter::Any
        } else {
            TypeFilter::Exactly(ModelType::new(label))
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TypeFilter::Any => Self::ANY_LABEL,
            TypeFilter::Exactly(t) => t.as_str(),
        }
    }

    /// Text shown for this option in a type selector.
    pub fn display_name(&self) -> &str {
        match self {
            TypeFilter::Any => "All Types",
            TypeFilter::Exactly(t) => t.as_str(),
        }
    }

    /// The selector options: "All Types" followed by each known type.
    pub fn options() -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::Any)
            .chain(ModelType::known().into_iter().map(TypeFilter::Exactly))
            .collect()
    }
}

impl From<String> for TypeFilter {
    fn from(label: String) -> Self {
        TypeFilter::from_label(&label)
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.label().to_string()
    }
}

impl From<ModelType> for TypeFilter {
    fn from(t: ModelType) -> Self {
        TypeFilter::Exactly(t)
    }
}

/// Inclusive `[min, max]` bound on parameter count.
///
/// Construction does not reorder or clamp. An inverted range is representable
/// and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u64; 2]", into = "[u64; 2]")]
pub struct ParameterRange {
    pub min: u64,
    pub max: u64,
}

impl ParameterRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, parameters: u64) -> bool {
        self.min <= parameters && parameters <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// `[0, u64::MAX]`: every entry passes, whatever the slider bounds.
impl Default for ParameterRange {
    fn default() -> Self {
        ParameterRange::new(0, u64::MAX)
    }
}

impl From<[u64; 2]> for ParameterRange {
    fn from([min, max]: [u64; 2]) -> Self {
        ParameterRange::new(min, max)
    }
}

impl From<ParameterRange> for [u64; 2] {
    fn from(range: ParameterRange) -> Self {
        [range.min, range.max]
    }
}

/// One snapshot of the user's filter inputs.
///
/// Snapshots are never edited in place: every `with_*` call returns a new
/// value and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    search: SearchTerm,
    selected_type: TypeFilter,
    parameter_range: ParameterRange,
}

impl FilterCriteria {
    pub fn new(search: SearchTerm, selected_type: TypeFilter, parameter_range: ParameterRange) -> Self {
        Self {
            search,
            selected_type,
            parameter_range,
        }
    }

    /// Empty search, any type, full range of `bounds`.
    pub fn permissive(bounds: &ParameterBounds) -> Self {
        Self::new(SearchTerm::default(), TypeFilter::Any, bounds.full_range())
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn selected_type(&self) -> &TypeFilter {
        &self.selected_type
    }

    pub fn parameter_range(&self) -> ParameterRange {
        self.parameter_range
    }

    pub fn with_search(&self, term: impl Into<String>) -> Self {
        Self {
            search: SearchTerm::new(term),
            ..self.clone()
        }
    }

    pub fn with_type(&self, selected_type: TypeFilter) -> Self {
        Self {
            selected_type,
            ..self.clone()
        }
    }

    pub fn with_range(&self, parameter_range: ParameterRange) -> Self {
        Self {
            parameter_range,
            ..self.clone()
        }
    }
}

pub fn update_search(criteria: &FilterCriteria, term: impl Into<String>) -> FilterCriteria {
    criteria.with_search(term)
}

pub fn update_type(criteria: &FilterCriteria, selected_type: TypeFilter) -> FilterCriteria {
    criteria.with_type(selected_type)
}

pub fn update_range(criteria: &FilterCriteria, range: ParameterRange) -> FilterCriteria {
    criteria.with_range(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_term_lowercases_needle_only() {
        let term = SearchTerm::new("GpT");
        assert_eq!(term.as_str(), "GpT");
        assert_eq!(term.needle(), "gpt");
    }

    #[test]
    fn type_filter_label_mapping() {
        assert_eq!(TypeFilter::from_label(""), TypeFilter::Any);
        assert_eq!(TypeFilter::from_label("T5"), TypeFilter::Exactly(ModelType::t5()));
        assert_eq!(TypeFilter::Any.display_name(), "All Types");

        let options = TypeFilter::options();
        let labels: Vec<&str> = options.iter().map(TypeFilter::label).collect();
        assert_eq!(labels, vec!["", "GPT", "BERT", "T5"]);
    }

    #[test]
    fn range_serializes_as_pair() {
        let json = serde_json::to_string(&ParameterRange::new(3, 9)).unwrap();
        assert_eq!(json, "[3,9]");
    }

    #[test]
    fn updates_touch_one_field() {
        let base = FilterCriteria::default();
        let next = base.with_search("bert");

        assert_eq!(base.search().as_str(), "");
        assert_eq!(next.search().as_str(), "bert");
        assert_eq!(next.selected_type(), base.selected_type());
        assert_eq!(next.parameter_range(), base.parameter_range());
    }
}
