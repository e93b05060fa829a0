//! # Fetch Management
//!
//! Tracks request generations and applies fetch results to the displayed
//! set. A result is applied only when its generation is still current;
//! anything superseded by a later action is dropped.

use crate::repl::events::{ViewEvent, ViewState};
use crate::repl::models::{CountryRecord, FilterTaxonomy};
use crate::repl::services::{search, DirectoryError};
use crate::repl::view_models::core::ViewModel;
use anyhow::Result;
use std::sync::Arc;

/// What a refetching action asks the provider for
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    /// First load at startup
    Startup,
    /// Free-text search; empty text means every country
    Search { text: String },
    /// Countries whose common name starts with a letter
    Letter { letter: char },
}

impl FetchRequest {
    /// Whether the result is the complete, unfiltered dataset
    pub fn is_full_dataset(&self) -> bool {
        match self {
            FetchRequest::Startup => true,
            FetchRequest::Search { text } => text.trim().is_empty(),
            FetchRequest::Letter { .. } => true,
        }
    }

    /// Narrow a fetched dataset to what the request asked for
    pub fn narrow(&self, records: Vec<CountryRecord>) -> Vec<CountryRecord> {
        match self {
            FetchRequest::Letter { letter } => search::starting_with(records, *letter),
            _ => records,
        }
    }
}

/// Completed fetch, tagged with the generation that requested it
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub request: FetchRequest,
    pub result: Result<Vec<CountryRecord>>,
}

impl ViewModel {
    /// Start a new generation and enter the loading state
    pub fn begin_fetch(&mut self, request: &FetchRequest) -> u64 {
        self.generation += 1;
        if self.state != ViewState::InitialLoad {
            self.state = ViewState::Loading;
        }
        self.clear_status_message();
        tracing::debug!("Fetch generation {} started: {:?}", self.generation, request);
        self.emit_view_event(ViewEvent::StatusUpdateRequired);
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }

    /// Apply a completed fetch, returns false when it was stale
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            tracing::debug!(
                "Discarding stale result of generation {} (current {})",
                outcome.generation,
                self.generation
            );
            return false;
        }

        match outcome.result {
            Ok(records) => {
                if self.taxonomy.is_none() && outcome.request.is_full_dataset() {
                    self.taxonomy = Some(Arc::new(FilterTaxonomy::build(&records)));
                }

                let records = outcome.request.narrow(records);
                let narrowed = self.filter.narrow(records, self.taxonomy.as_deref());
                self.displayed.replace(&narrowed);
                self.state = if self.displayed.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Idle
                };
                tracing::info!(
                    "Displaying {} countries for {:?}",
                    self.displayed.len(),
                    outcome.request
                );
            }
            Err(e) => {
                if DirectoryError::is_no_results(&e) {
                    tracing::debug!("{}", e);
                } else {
                    tracing::warn!("Fetch failed: {}", e);
                }
                self.displayed.clear();
                self.state = ViewState::Empty;
                self.status_message = Some(e.to_string());
            }
        }

        self.emit_view_event(ViewEvent::CardsReplaced);
        self.emit_view_event(ViewEvent::StatusUpdateRequired);
        true
    }
}
