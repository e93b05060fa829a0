//! # MVVM Architecture Implementation
//!
//! This module contains the country directory's MVVM implementation.
//! All components are designed with clear separation of concerns and testability.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use io::{EventStream, MockEventStream, MockRenderStream, RenderStream};
pub use io::{TerminalEventStream, TerminalRenderStream};
pub use view_models::*;
pub use views::*;

// Re-export specific items from commands to avoid conflicts
pub use commands::{CommandEvent, CommandRegistry, DirectoryCommand};

// Re-export specific items from models and services to avoid conflicts
pub use models::{Card, CountryRecord, FilterDimension, FilterTaxonomy, SortDirection, SortField};
pub use services::{
    CountriesClient, CountrySource, DirectoryError, LinkOpener, RecordingLinkOpener,
    ResourcePath, SearchResolver, SystemLinkOpener,
};
