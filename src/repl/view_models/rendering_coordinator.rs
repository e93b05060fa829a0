//! # Rendering Coordination
//!
//! Queues view events and status messages for the renderer.

use crate::repl::events::ViewEvent;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        self.pending_view_events.push(event);
        tracing::debug!("View event emitted: {:?}", self.pending_view_events.last());
    }

    /// Collect and clear pending view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    pub fn request_options(&mut self, dimension: Option<crate::repl::models::FilterDimension>) {
        self.emit_view_event(ViewEvent::OptionsRequested { dimension });
    }

    pub fn request_help(&mut self) {
        self.emit_view_event(ViewEvent::HelpRequested);
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.emit_view_event(ViewEvent::StatusUpdateRequired);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
