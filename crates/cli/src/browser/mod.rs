//! Interactive command browser.
//!
//! This module provides the terminal-based user interface for devref: a tab
//! per category (plus "All"), a search line, and a copy trigger on every row.
//!
//! # User Interface
//!
//! The interface supports:
//! - `/` to start typing a search, Enter to finish, Escape to clear it
//! - Left/Right, `h`/`l` or Tab/Shift+Tab to switch tabs
//! - Arrow keys or vim-style (j/k) navigation
//! - Enter, `y` or `c` to copy the selected command
//! - Clicking a row copies it, clicking a tab shows it
//! - 'q' or Ctrl+C to quit

pub mod colors;
pub mod input;
pub mod layout;
pub mod types;
pub mod ui;

pub use types::{BrowserAction, StatusMessage, UiState};
pub use ui::browse;
