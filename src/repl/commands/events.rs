//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

use crate::repl::models::{FilterDimension, SortDirection, SortField};

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    /// Show countries whose common name starts with the letter
    LetterRequested { letter: char },

    /// Clear the search text and show every country
    AllRequested,

    /// Run a free-text search (empty text shows every country)
    SearchRequested { text: String },

    /// Reorder the displayed cards by a field
    SortFieldRequested { field: SortField },

    /// Switch the displayed order direction
    SortDirectionRequested { direction: SortDirection },

    /// Turn filtering on or off
    FilterToggleRequested { enabled: bool },

    /// Make a dimension the active filter
    FilterDimensionRequested { dimension: FilterDimension },

    /// Select the value of the active filter dimension
    FilterValueRequested { value: String },

    /// Navigate to the map link of the card at a 1-based position
    MapLinkRequested { position: usize },

    /// List the filter taxonomy, optionally for one dimension
    OptionsRequested { dimension: Option<FilterDimension> },

    /// Show the command reference
    HelpRequested,

    /// Quit the application
    QuitRequested,
}
