//! # Views Module
//!
//! Contains all view-related components for rendering the directory.

pub mod card_view;
pub mod terminal_renderer;

// Re-export main types for convenience
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
