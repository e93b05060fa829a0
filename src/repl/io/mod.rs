//! # I/O Abstraction Layer
//!
//! Provides clean trait abstractions for input/output streams to enable
//! dependency injection without polluting production code.
//!
//! ## Architecture
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ stdin reader thread
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<InputEvent>
//!                            ──▶ MockRenderStream    ──▶ shared Vec<u8>
//! ```

use crate::repl::events::InputEvent;
use anyhow::Result;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

// Re-export terminal implementations for convenience
pub use terminal::{TerminalEventStream, TerminalRenderStream};

// Re-export mock implementations for testing
pub use mock::{MockEventStream, MockRenderStream};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
///
/// Production reads prompt lines from the terminal. Test implementations
/// provide pre-programmed lines.
pub trait EventStream: Send {
    /// Check if an event is available, waiting at most `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// This should only be called after poll() returns true.
    fn read(&mut self) -> Result<InputEvent>;
}

/// Output render stream abstraction
pub trait RenderStream: Write + Send {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    /// Whether styled (colored) output should be written
    fn supports_color(&self) -> bool;
}
