//! # ViewModel Module
//!
//! ViewModel implementation split into focused responsibilities: fetch
//! generations, filter selection, sorting and view-event coordination.

mod core;
mod fetch_manager;
mod filter_manager;
mod rendering_coordinator;
mod sort_manager;

// Re-export the main ViewModel
pub use self::core::ViewModel;

// Re-export types that other modules need
pub use self::fetch_manager::{FetchOutcome, FetchRequest};
