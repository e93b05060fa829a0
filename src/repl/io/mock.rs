//! # Mock I/O Implementations for Testing
//!
//! Provides mock implementations of EventStream and RenderStream traits
//! for testing without terminal dependencies.

use super::{EventStream, RenderStream, TerminalSize};
use crate::repl::events::InputEvent;
use anyhow::Result;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock event stream for testing
///
/// Yields pre-programmed lines, then reports the input as closed.
pub struct MockEventStream {
    events: VecDeque<InputEvent>,
}

impl MockEventStream {
    /// Create a mock event stream from prompt lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            events: lines
                .into_iter()
                .map(|line| InputEvent::Line(line.into()))
                .collect(),
        }
    }

    /// Create an empty mock event stream
    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(true)
    }

    fn read(&mut self) -> Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Closed))
    }
}

/// Type alias for captured output shared with the test
type OutputBuffer = Arc<Mutex<Vec<u8>>>;

/// Mock render stream for testing
///
/// Captures everything written so tests can inspect it after the
/// controller has taken ownership of the stream.
#[derive(Clone)]
pub struct MockRenderStream {
    output: OutputBuffer,
    clears: Arc<Mutex<usize>>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    /// Create a new mock render stream
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    /// Create a mock render stream with specific terminal size
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            output: Arc::new(Mutex::new(Vec::new())),
            clears: Arc::new(Mutex::new(0)),
            terminal_size: size,
        }
    }

    /// Everything written so far, as text
    pub fn output(&self) -> String {
        self.output
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }

    /// Number of screen clears requested
    pub fn clear_count(&self) -> usize {
        self.clears.lock().map(|count| *count).unwrap_or(0)
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut clears = self
            .clears
            .lock()
            .map_err(|_| anyhow::anyhow!("clear counter poisoned"))?;
        *clears += 1;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn supports_color(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_stream_should_close_after_lines() {
        let mut stream = MockEventStream::new(["all"]);
        assert!(stream.poll(Duration::from_millis(1)).unwrap());
        assert_eq!(stream.read().unwrap(), InputEvent::Line("all".to_string()));
        assert_eq!(stream.read().unwrap(), InputEvent::Closed);
    }

    #[test]
    fn mock_render_stream_should_share_output_between_clones() {
        let stream = MockRenderStream::new();
        let mut handle = stream.clone();

        write!(handle, "Canada - CA").unwrap();
        handle.clear_screen().unwrap();

        assert_eq!(stream.output(), "Canada - CA");
        assert_eq!(stream.clear_count(), 1);
    }
}
