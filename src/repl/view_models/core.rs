//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! The ViewModel exclusively owns the displayed set, the filter selection
//! and the search text; the taxonomy is set once and shared read-only.

use crate::repl::events::{ViewEvent, ViewState};
use crate::repl::models::{Card, DisplayedSet, FilterSelection, FilterTaxonomy};
use std::sync::Arc;

pub struct ViewModel {
    pub(super) state: ViewState,
    pub(super) displayed: DisplayedSet,
    pub(super) filter: FilterSelection,
    pub(super) taxonomy: Option<Arc<FilterTaxonomy>>,
    pub(super) search_text: String,
    pub(super) generation: u64,
    pub(super) status_message: Option<String>,
    pub(super) pending_view_events: Vec<ViewEvent>,
    pub(super) compact: bool,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            state: ViewState::InitialLoad,
            displayed: DisplayedSet::new(),
            filter: FilterSelection::new(),
            taxonomy: None,
            search_text: String::new(),
            generation: 0,
            status_message: None,
            pending_view_events: Vec::new(),
            compact: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn displayed(&self) -> &DisplayedSet {
        &self.displayed
    }

    pub fn cards(&self) -> &[Card] {
        self.displayed.cards()
    }

    /// Card at a 1-based display position
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.displayed.get(position)
    }

    pub fn taxonomy(&self) -> Option<&FilterTaxonomy> {
        self.taxonomy.as_deref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.trim().to_string();
    }

    pub fn clear_search_text(&mut self) {
        self.search_text.clear();
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
        tracing::debug!("Compact cards set to: {}", compact);
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
