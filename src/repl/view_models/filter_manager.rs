//! # Filter Management
//!
//! Updates the filter selection. Each change is followed by a refetch of
//! the current search, which the controller dispatches.

use crate::repl::models::{FilterDimension, FilterSelection};
use crate::repl::view_models::core::ViewModel;
use anyhow::Result;

impl ViewModel {
    pub fn filter_selection(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn set_filter_enabled(&mut self, enabled: bool) {
        self.filter.set_enabled(enabled);
        tracing::debug!("Filter enabled set to: {}", enabled);
    }

    pub fn set_filter_dimension(&mut self, dimension: FilterDimension) {
        self.filter.set_dimension(dimension);
        tracing::debug!("Filter dimension set to: {}", dimension);
    }

    /// Select a value for the active dimension
    ///
    /// The value must be one of the taxonomy's options for that dimension;
    /// it is matched case-insensitively and stored in its canonical form.
    pub fn select_filter_value(&mut self, value: &str) -> Result<()> {
        let dimension = self.filter.dimension();
        let taxonomy = self
            .taxonomy()
            .ok_or_else(|| anyhow::anyhow!("Filter options are not loaded yet"))?;

        let wanted = value.trim();
        let canonical = taxonomy
            .values(dimension)
            .iter()
            .find(|option| option.as_str() == wanted)
            .or_else(|| {
                taxonomy
                    .values(dimension)
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(wanted))
            })
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "'{wanted}' is not a {dimension} option. Type 'options {dimension}' to list them"
                )
            })?;

        tracing::debug!("Filter value for {} set to: {}", dimension, canonical);
        self.filter.select_value(dimension, canonical);
        Ok(())
    }

    /// The value the filter would apply right now, if any
    pub fn active_filter_value(&self) -> Option<&str> {
        match self.taxonomy() {
            Some(taxonomy) => self.filter.effective_value(taxonomy),
            None => self.filter.selected_value(self.filter.dimension()),
        }
    }
}
