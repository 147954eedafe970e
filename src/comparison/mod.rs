pub mod set;
pub mod table;

pub use set::{is_selected, toggle_selection, ComparisonSet, SelectionAction};
pub use table::build_table;
