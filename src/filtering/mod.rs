pub mod criteria;
pub mod predicates;

pub use criteria::{
    update_range, update_search, update_type, FilterCriteria, ParameterRange, SearchTerm,
    TypeFilter,
};
pub use predicates::{apply_filters, EntryFilter};
