pub mod directory_view;
pub mod identifiers;

pub use directory_view::{ComparisonRow, ComparisonTable, DirectoryView, ViewMetadata, VisibleEntry};
pub use identifiers::{CatalogVersion, EntryId, ModelType};
