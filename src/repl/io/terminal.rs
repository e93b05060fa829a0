//! # Terminal I/O Implementations
//!
//! Production implementations of I/O abstractions.
//! All crossterm dependencies are isolated to this module and the renderer.

use super::{EventStream, RenderStream, TerminalSize};
use crate::repl::events::InputEvent;
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Fallback size when stdout is not a terminal
const DEFAULT_SIZE: TerminalSize = (80, 24);

/// Terminal-based event stream reading prompt lines from stdin
///
/// Lines are read on a background thread so the controller can keep
/// applying fetch results while the user types.
pub struct TerminalEventStream {
    receiver: Receiver<InputEvent>,
    pending: Option<InputEvent>,
}

impl TerminalEventStream {
    /// Create a new terminal event stream
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if sender.send(InputEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            let _ = sender.send(InputEvent::Closed);
        });

        Self {
            receiver,
            pending: None,
        }
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.pending = Some(event);
                Ok(true)
            }
            Err(RecvTimeoutError::Timeout) => Ok(false),
            Err(RecvTimeoutError::Disconnected) => {
                self.pending = Some(InputEvent::Closed);
                Ok(true)
            }
        }
    }

    fn read(&mut self) -> Result<InputEvent> {
        match self.pending.take() {
            Some(event) => Ok(event),
            None => self
                .receiver
                .recv()
                .map_err(|_| anyhow::anyhow!("Input reader stopped")),
        }
    }
}

/// Terminal-based render stream using crossterm
pub struct TerminalRenderStream<W: Write> {
    writer: W,
    color: bool,
}

impl TerminalRenderStream<io::Stdout> {
    /// Create a new terminal render stream using stdout
    ///
    /// Color is used only when stdout is a terminal and `no_color` is unset.
    pub fn new(no_color: bool) -> Self {
        Self {
            writer: io::stdout(),
            color: !no_color && atty::is(atty::Stream::Stdout),
        }
    }
}

impl<W: Write> TerminalRenderStream<W> {
    /// Create a terminal render stream with custom writer
    pub fn with_writer(writer: W, color: bool) -> Self {
        Self { writer, color }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        if !self.color {
            return Ok(());
        }
        execute!(
            self.writer,
            Clear(ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        )
        .map_err(anyhow::Error::from)
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size().unwrap_or(DEFAULT_SIZE))
    }

    fn supports_color(&self) -> bool {
        self.color
    }
}

impl Default for TerminalEventStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_stream_should_write_through_to_writer() {
        let mut stream = TerminalRenderStream::with_writer(Vec::new(), false);
        write!(stream, "Belgium - BE").unwrap();
        stream.flush().unwrap();

        assert_eq!(String::from_utf8(stream.writer).unwrap(), "Belgium - BE");
    }

    #[test]
    fn plain_stream_should_not_clear_screen() {
        let mut stream = TerminalRenderStream::with_writer(Vec::new(), false);
        stream.clear_screen().unwrap();

        assert!(stream.writer.is_empty());
        assert!(!stream.supports_color());
    }
}
