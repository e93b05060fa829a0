//! # countryline - Terminal Country Directory
//!
//! Browse, search, filter and sort the countries of the world from a prompt.
//! Built with the same MVVM layering as a GUI directory view.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Models  │
//! │             │              │              │              │          │
//! │ - Cards     │              │ - Generation │              │ - Cards  │
//! │ - Status    │              │ - Filter     │              │ - Filter │
//! │ - Options   │              │ - Sort       │              │ - Sort   │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      ▲
//!                                      │ Commands / FetchOutcome
//!                                      ▼
//!                               ┌──────────────┐    HTTP    ┌──────────┐
//!                               │  Controller  │───────────▶│ Services │
//!                               │              │            │          │
//!                               │ - Input      │            │ - Search │
//!                               │ - Event Loop │            │ - Fetch  │
//!                               └──────────────┘            └──────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
