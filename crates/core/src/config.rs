//! Display labels and defaults shared by every front end.

/// Label of the tab that shows every category.
pub const ALL_TAB_LABEL: &str = "All";

/// Label of the per-row copy trigger.
pub const COPY_LABEL: &str = "Copy";

/// Title shown above the tabs.
pub const TITLE: &str = "Developer command reference";

/// Placeholder for the query input while it is empty.
pub const SEARCH_PLACEHOLDER: &str = "Search commands...";

/// Shown on the "All" tab when the query matches nothing.
pub const NO_COMMANDS_FOUND: &str = "No commands found for the search term.";

/// Prefix of the confirmation shown after a successful copy.
pub const COPIED_PREFIX: &str = "Command copied: ";

/// Message for a category tab without matches.
#[must_use]
pub fn no_commands_in_category(category: &str) -> String {
    format!("No commands found in the category {category}.")
}

/// Confirmation shown after `command` was placed on the clipboard.
#[must_use]
pub fn copied_message(command: &str) -> String {
    format!("{COPIED_PREFIX}{command}")
}
