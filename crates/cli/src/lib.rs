//! devref CLI Library
//!
//! This crate provides the command-line interface for devref, a developer
//! command reference. It handles argument parsing, the interactive terminal
//! browser and plain listing output.
//!
//! # Key Features
//!
//! - **Interactive Browser**: Tabs per category, live search and one-key copy
//! - **Listing Mode**: Print matching commands as text or YAML
//! - **Clipboard Copy**: Copy a command's literal text from either mode
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and category resolution
//! - [`browser`]: Interactive terminal UI
//! - [`listing`]: Non-interactive output
//!
//! # Examples
//!
//! ```bash
//! # Interactive mode
//! devref
//!
//! # Start on the Docker tab with a search already typed
//! devref -c docker build
//!
//! # Print matches and copy the first one
//! devref --list --copy "git push"
//!
//! # YAML listing of one category
//! devref -l -f yaml -c sql
//! ```

pub mod browser;
pub mod cli_args;
pub mod listing;
