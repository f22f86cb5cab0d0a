//! Clipboard access.
//!
//! Front ends talk to the clipboard through the [`Clipboard`] trait so the
//! copy flow can be exercised without a display server.

use log::{info, warn};

use crate::catalog::CommandEntry;
use crate::config::copied_message;
use crate::error::{Error, Result};

pub trait Clipboard {
    /// Places `text` on the clipboard, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClipboardUnavailable`] if the host clipboard cannot be
    /// reached or refuses the write.
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, backed by `arboard`.
///
/// The platform handle is opened on first use and then kept, since on X11
/// and Wayland the copied text is served by the process that owns it.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => arboard::Clipboard::new().map_err(Error::clipboard_unavailable)?,
        };

        Ok(self.handle.insert(handle))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(Error::clipboard_unavailable)
    }
}

/// A clipboard that keeps copied text in memory.
///
/// Stands in for the system clipboard where no display server is reachable.
/// An unavailable one refuses every copy, like a host without a clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copied: Vec<String>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            copied: Vec::new(),
            unavailable: true,
        }
    }

    /// Everything copied so far, oldest first.
    pub fn copied(&self) -> &[String] {
        &self.copied
    }

    /// The current clipboard contents.
    pub fn contents(&self) -> Option<&str> {
        self.copied.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::clipboard_unavailable("no display"));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

/// Copies the entry's command and returns the confirmation to show the user.
///
/// # Errors
///
/// Propagates the clipboard's error; callers show it as a notice and carry on.
pub fn copy_command(clipboard: &mut dyn Clipboard, entry: &CommandEntry) -> Result<String> {
    match clipboard.copy(&entry.command) {
        Ok(()) => {
            info!("Copied `{}` to the clipboard", entry.command);
            Ok(copied_message(&entry.command))
        }
        Err(e) => {
            warn!("Could not copy `{}`: {}", entry.command, e);
            Err(e)
        }
    }
}
