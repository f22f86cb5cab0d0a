//! devref Core Library
//!
//! This crate holds everything about devref that does not depend on a
//! terminal: the compiled-in catalog of developer commands, the query filter,
//! per-tab views and the clipboard capability.
//!
//! # Key Features
//!
//! - **Catalog**: Commands grouped by category, in declared order
//! - **Filtering**: Case-insensitive literal substring search over command and description
//! - **Views**: One filtered view per tab ("All" plus each category)
//! - **Clipboard**: Copy a command's literal text through a swappable trait
//!
//! # Examples
//!
//! ```
//! use devref_core::catalog::Catalog;
//! use devref_core::view::{Scope, ScopeView};
//!
//! let catalog = Catalog::builtin();
//! let view = ScopeView::build(&catalog, &Scope::All, "docker");
//! for entry in &view.entries {
//!     println!("{}", entry);
//! }
//! assert!(!view.is_empty());
//! ```

mod builtin;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod view;
