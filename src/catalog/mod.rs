pub mod catalog;
pub mod entry;

pub use crate::types::identifiers::{CatalogVersion, EntryId, ModelType};
pub use catalog::{Catalog, CatalogError};
pub use entry::Entry;
