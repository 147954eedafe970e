use chrono::Utc;
use tracing::debug;

use crate::catalog::{Catalog, Entry};
use crate::comparison::{build_table, toggle_selection, ComparisonSet, SelectionAction};
use crate::config::DirectoryConfig;
use crate::filtering::{
    apply_filters, update_range, update_search, update_type, FilterCriteria, ParameterRange,
    TypeFilter,
};
use crate::format::format_parameters;
use crate::types::directory_view::{ComparisonTable, DirectoryView, ViewMetadata, VisibleEntry};
use crate::types::identifiers::EntryId;

/// A browsing session over one catalog.
///
/// Holds the current criteria and comparison snapshots. Every event replaces
/// the relevant snapshot with a fresh one and recomputes the visible ids.
/// Not synchronized; drive it from a single event loop.
#[derive(Debug, Clone)]
pub struct Directory {
    catalog: Catalog,
    config: DirectoryConfig,
    criteria: FilterCriteria,
    comparison: ComparisonSet,
    visible: Vec<EntryId>,
}

impl Directory {
    /// Start with every catalog entry visible. The initial range is the
    /// configured slider range, widened if the catalog holds a larger model.
    pub fn new(catalog: Catalog, config: DirectoryConfig) -> Self {
        let largest = catalog.max_parameters().unwrap_or(0);
        let criteria = FilterCriteria::permissive(&config.bounds)
            .with_range(config.bounds.covering(largest));
        if largest > config.bounds.max {
            debug!(largest, slider_max = config.bounds.max, "initial range widened past slider maximum");
        }
        let visible = visible_ids(&catalog, &criteria);
        Self {
            catalog,
            config,
            criteria,
            comparison: ComparisonSet::new(),
            visible,
        }
    }

    /// The seed catalog with the reference configuration.
    pub fn seeded() -> Self {
        Self::new(Catalog::seed(), DirectoryConfig::v0())
    }

    pub fn search(&mut self, term: impl Into<String>) {
        let next = update_search(&self.criteria, term);
        self.replace_criteria(next);
    }

    pub fn select_type(&mut self, selected_type: TypeFilter) {
        let next = update_type(&self.criteria, selected_type);
        self.replace_criteria(next);
    }

    pub fn set_range(&mut self, range: ParameterRange) {
        if range.is_inverted() {
            debug!(min = range.min, max = range.max, "inverted parameter range");
        }
        let next = update_range(&self.criteria, range);
        self.replace_criteria(next);
    }

    /// Toggle the catalog entry with this id, visible or not.
    ///
    /// Returns `false` without touching the selection when the id is not in
    /// the catalog.
    pub fn toggle(&mut self, id: &EntryId) -> bool {
        let Some(entry) = self.catalog.get(id) else {
            debug!(%id, "toggle ignored: unknown entry");
            return false;
        };
        self.comparison = toggle_selection(&self.comparison, entry);
        true
    }

    fn replace_criteria(&mut self, criteria: FilterCriteria) {
        self.visible = visible_ids(&self.catalog, &criteria);
        debug!(
            search = criteria.search().as_str(),
            selected_type = criteria.selected_type().label(),
            min = criteria.parameter_range().min,
            max = criteria.parameter_range().max,
            visible = self.visible.len(),
            "criteria replaced"
        );
        self.criteria = criteria;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    /// Visible entries in catalog order.
    pub fn visible(&self) -> Vec<&Entry> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    pub fn is_selected(&self, id: &EntryId) -> bool {
        self.comparison.contains(id)
    }

    pub fn action_for(&self, entry: &Entry) -> SelectionAction {
        SelectionAction::for_entry(&self.comparison, entry)
    }

    pub fn comparison_table(&self) -> Option<ComparisonTable> {
        build_table(&self.comparison)
    }

    pub fn view(&self) -> DirectoryView {
        let visible: Vec<VisibleEntry> = self
            .visible()
            .into_iter()
            .map(|entry| {
                let action = self.action_for(entry);
                VisibleEntry {
                    entry: entry.clone(),
                    parameters_display: format_parameters(entry.parameters()),
                    action,
                    action_label: action.label().to_string(),
                }
            })
            .collect();

        let metadata = ViewMetadata {
            catalog_version: self.catalog.version().clone(),
            entries_considered: self.catalog.len(),
            entries_visible: visible.len(),
            entries_selected: self.comparison.len(),
            generated_at: Utc::now(),
        };

        DirectoryView {
            criteria: self.criteria.clone(),
            visible,
            comparison: self.comparison_table(),
            metadata,
        }
    }
}

fn visible_ids(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<EntryId> {
    apply_filters(catalog.entries(), criteria)
        .into_iter()
        .map(|e| e.id().clone())
        .collect()
}
