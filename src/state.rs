use std::collections::HashMap;

use crate::data::filter::{BudgetRange, FilterCriteria, filtered_indices};
use crate::data::model::{Catalog, DegreeLevel, LocationCategory, University};
use crate::data::sort::{SortKey, sort_indices};

/// Upper end of the budget slider when the catalog has no pricier entry.
pub const SLIDER_MAX: u64 = 6_000_000;
pub const SLIDER_STEP: u64 = 100_000;

/// Fields offered in the dropdown even when no program uses them yet.
pub const FIELDS: [&str; 10] = [
    "Engineering",
    "Computer Science",
    "Medicine",
    "Business",
    "Arts",
    "Sciences",
    "Law",
    "Education",
    "Agriculture",
    "Psychology",
];

/// Fields shown as one-click badges under the search bar.
pub const QUICK_FIELDS: [&str; 4] = ["Engineering", "Computer Science", "Medicine", "Business"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTab {
    #[default]
    Programs,
    Fees,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Catalog being browsed.
    pub catalog: Catalog,

    /// Current filter selections.
    pub criteria: FilterCriteria,

    /// Indices of universities passing the filter, in display order (cached).
    pub visible_indices: Vec<usize>,

    pub sort_key: SortKey,

    /// Whether the advanced filter panel is open.
    pub show_filters: bool,

    pub view_mode: ViewMode,

    /// Selected tab per university card, keyed by university id.
    pub card_tabs: HashMap<String, CardTab>,

    /// Id of the university shown in the details window.
    pub details: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let mut state = AppState::default();
        state.set_catalog(catalog);
        state
    }

    /// Swap in a newly loaded catalog and reset the selections.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.criteria = FilterCriteria {
            budget: self.full_budget(),
            ..FilterCriteria::default()
        };
        self.card_tabs.clear();
        self.details = None;
        self.status_message = None;
        self.refilter();
    }

    /// Largest value the budget slider can reach. Kept on a step boundary
    /// so the stepped slider can always select the most expensive entry.
    pub fn budget_ceiling(&self) -> u64 {
        let top_fee = self.catalog.max_local_fee.div_ceil(SLIDER_STEP) * SLIDER_STEP;
        SLIDER_MAX.max(top_fee)
    }

    fn full_budget(&self) -> BudgetRange {
        BudgetRange::new(0, self.budget_ceiling())
    }

    /// Recompute `visible_indices` from scratch after any change.
    pub fn refilter(&mut self) {
        let mut indices = filtered_indices(&self.catalog, &self.criteria);
        sort_indices(&self.catalog, &mut indices, self.sort_key);
        log::debug!(
            "{} of {} universities match {:?}",
            indices.len(),
            self.catalog.len(),
            self.criteria
        );
        self.visible_indices = indices;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria.search = text.into();
        self.refilter();
    }

    pub fn set_field(&mut self, field: Option<String>) {
        self.criteria.field = field;
        self.refilter();
    }

    /// Badge click: select the field, or clear it when already selected.
    pub fn quick_field(&mut self, field: &str) {
        if self.criteria.active_field() == Some(field) {
            self.set_field(None);
        } else {
            self.set_field(Some(field.to_string()));
        }
    }

    pub fn set_degree(&mut self, degree: Option<DegreeLevel>) {
        self.criteria.degree = degree;
        self.refilter();
    }

    pub fn set_location(&mut self, location: Option<LocationCategory>) {
        self.criteria.location = location;
        self.refilter();
    }

    pub fn set_budget(&mut self, budget: BudgetRange) {
        self.criteria.budget = budget;
        self.refilter();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.sort_key = key;
        self.refilter();
    }

    /// Reset dropdowns and budget. The search text is kept.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria {
            search: std::mem::take(&mut self.criteria.search),
            budget: self.full_budget(),
            ..FilterCriteria::default()
        };
        self.refilter();
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    /// Visible universities in display order.
    pub fn visible(&self) -> impl Iterator<Item = &University> + '_ {
        self.visible_indices
            .iter()
            .map(move |&i| &self.catalog.universities[i])
    }

    pub fn result_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Dropdown entries: the fixed field list followed by any other field
    /// found in the catalog.
    pub fn field_options(&self) -> Vec<String> {
        let mut options: Vec<String> = FIELDS.iter().map(|f| f.to_string()).collect();
        for field in &self.catalog.fields {
            if !FIELDS.contains(&field.as_str()) {
                options.push(field.clone());
            }
        }
        options
    }

    pub fn card_tab(&self, id: &str) -> CardTab {
        self.card_tabs.get(id).copied().unwrap_or_default()
    }

    pub fn set_card_tab(&mut self, id: &str, tab: CardTab) {
        self.card_tabs.insert(id.to_string(), tab);
    }

    pub fn open_details(&mut self, id: &str) {
        self.details = Some(id.to_string());
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    /// The university whose details window is open, if it still exists.
    pub fn details(&self) -> Option<&University> {
        let id = self.details.as_deref()?;
        self.catalog.find(id).map(|(_, u)| u)
    }
}
