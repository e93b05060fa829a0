//! # Link Service
//!
//! Opens a card's map link, the terminal counterpart of clicking its flag.

use anyhow::Result;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

pub trait LinkOpener: Send {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens links with the platform's default handler
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    pub fn new() -> Self {
        Self
    }

    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(anyhow::anyhow!("No map link available"));
        }
        tracing::debug!("Opening link {}", url);
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("Failed to open {url}: {e}"))
    }
}

/// Records opened links instead of launching anything
#[derive(Debug, Clone, Default)]
pub struct RecordingLinkOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        self.opened
            .lock()
            .map_err(|_| anyhow::anyhow!("Link recorder poisoned"))?
            .push(url.to_string());
        Ok(())
    }
}
