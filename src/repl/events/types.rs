//! # Core Event Types
//!
//! Types shared between the view model, the views and the controller.

use std::fmt;

/// Lifecycle state of the directory view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Startup fetch not finished yet
    #[default]
    InitialLoad,
    /// Cards are displayed
    Idle,
    /// A refetch is in flight
    Loading,
    /// Nothing to display
    Empty,
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::InitialLoad => "STARTING",
            ViewState::Idle => "READY",
            ViewState::Loading => "LOADING",
            ViewState::Empty => "EMPTY",
        }
    }

    /// Whether a fetch result is still awaited
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewState::InitialLoad | ViewState::Loading)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_states_should_be_load_states() {
        assert!(ViewState::InitialLoad.is_pending());
        assert!(ViewState::Loading.is_pending());
        assert!(!ViewState::Idle.is_pending());
        assert!(!ViewState::Empty.is_pending());
    }
}
