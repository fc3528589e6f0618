// src/browser/mod.rs

//! Audit browser state container.
//!
//! Holds the transient selection and filter state of the audit page and
//! derives the visible module list and the selected result from a
//! [`Catalog`]. Every change goes through [`AuditBrowser::dispatch`]; derived
//! values are recomputed on each call and never cached.
//!
//! No operation here can fail. An empty module list and an unknown
//! selection are ordinary states that the renderers display as such.

mod filter;

use crate::catalog::Catalog;
use crate::models::{AuditModule, AuditResult, Recommendation};

pub use filter::CategoryFilter;

/// Raw UI state of the audit page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub selected_module: Option<String>,
    pub search_query: String,
    pub category: CategoryFilter,
    pub expanded_recommendation: Option<String>,
}

/// State transitions accepted by [`AuditBrowser::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    SetSearchQuery(String),
    SetCategory(CategoryFilter),
    SelectModule(String),
    SetExpandedRecommendation(Option<String>),
    ToggleRecommendation(String),
}

impl BrowserState {
    /// Apply one action.
    pub fn reduce(&mut self, action: BrowserAction) {
        match action {
            BrowserAction::SetSearchQuery(query) => self.search_query = query,
            BrowserAction::SetCategory(category) => self.category = category,
            BrowserAction::SelectModule(id) => {
                if self.selected_module.as_deref() != Some(id.as_str()) {
                    self.expanded_recommendation = None;
                }
                self.selected_module = Some(id);
            }
            BrowserAction::SetExpandedRecommendation(id) => self.expanded_recommendation = id,
            BrowserAction::ToggleRecommendation(id) => {
                self.expanded_recommendation =
                    if self.expanded_recommendation.as_deref() == Some(id.as_str()) {
                        None
                    } else {
                        Some(id)
                    };
            }
        }
    }
}

/// Browser over a borrowed catalog.
#[derive(Debug, Clone)]
pub struct AuditBrowser<'a> {
    catalog: &'a Catalog,
    state: BrowserState,
}

impl<'a> AuditBrowser<'a> {
    /// Browser with no selection, no search text and category "all".
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_state(catalog, BrowserState::default())
    }

    pub fn with_state(catalog: &'a Catalog, state: BrowserState) -> Self {
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn dispatch(&mut self, action: BrowserAction) {
        log::debug!("audit browser: {:?}", action);
        self.state.reduce(action);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(BrowserAction::SetSearchQuery(query.into()));
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.dispatch(BrowserAction::SetCategory(category));
    }

    /// Select a module. Unknown ids are kept and simply resolve to no details.
    pub fn select_module(&mut self, id: impl Into<String>) {
        self.dispatch(BrowserAction::SelectModule(id.into()));
    }

    pub fn set_expanded_recommendation(&mut self, id: Option<String>) {
        self.dispatch(BrowserAction::SetExpandedRecommendation(id));
    }

    /// Expand `id`, or collapse it when it is already the expanded one.
    pub fn toggle_recommendation(&mut self, id: impl Into<String>) {
        self.dispatch(BrowserAction::ToggleRecommendation(id.into()));
    }

    /// Modules matching the search text and category, in table order.
    pub fn filtered_modules(&self) -> Vec<&'a AuditModule> {
        let needle = self.state.search_query.to_lowercase();
        let category = self.state.category;
        self.catalog
            .modules
            .iter()
            .filter(|m| m.matches_lowercase(&needle) && category.accepts(m))
            .collect()
    }

    pub fn selected_module(&self) -> Option<&'a AuditModule> {
        let catalog = self.catalog;
        self.state
            .selected_module
            .as_deref()
            .and_then(|id| catalog.module(id))
    }

    /// Result for the selected module; `None` when nothing matches.
    pub fn selected_result(&self) -> Option<&'a AuditResult> {
        let catalog = self.catalog;
        self.state
            .selected_module
            .as_deref()
            .and_then(|id| catalog.result(id))
    }

    pub fn is_selected(&self, module_id: &str) -> bool {
        self.state.selected_module.as_deref() == Some(module_id)
    }

    pub fn is_expanded(&self, recommendation_id: &str) -> bool {
        self.state.expanded_recommendation.as_deref() == Some(recommendation_id)
    }

    /// The expanded recommendation, if it belongs to the selected result.
    pub fn expanded_recommendation(&self) -> Option<&'a Recommendation> {
        let id = self.state.expanded_recommendation.as_deref()?;
        self.selected_result()?.recommendation(id)
    }
}
