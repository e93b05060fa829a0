//! # Sort Management
//!
//! Sort changes reorder the displayed cards in place; they never refetch
//! and never pass through the loading state.

use crate::repl::events::ViewEvent;
use crate::repl::models::{SortDirection, SortField};
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    pub fn sort_field(&self) -> SortField {
        self.displayed.field()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.displayed.direction()
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        if self.displayed.set_field(field) {
            tracing::debug!("Sorted {} cards by {}", self.displayed.len(), field);
            self.emit_view_event(ViewEvent::CardsReordered);
        }
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        if self.displayed.set_direction(direction) {
            tracing::debug!("Sort direction set to {}", direction);
            self.emit_view_event(ViewEvent::CardsReordered);
        }
    }
}
