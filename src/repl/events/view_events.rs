//! # View Events
//!
//! Events related to view updates and user input.
//! These events drive output refreshing and carry user interactions.

use crate::repl::models::FilterDimension;

/// Events emitted when view updates are needed
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The displayed set was replaced; redraw every card
    CardsReplaced,

    /// The displayed set was reordered in place
    CardsReordered,

    /// Loading started or finished, or the status message changed
    StatusUpdateRequired,

    /// Show the taxonomy values, for one dimension or all of them
    OptionsRequested { dimension: Option<FilterDimension> },

    /// Show the command reference
    HelpRequested,
}

/// Input events from the user or the input source
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A line was entered at the prompt
    Line(String),

    /// The input source is exhausted (end of file, closed pipe)
    Closed,
}
