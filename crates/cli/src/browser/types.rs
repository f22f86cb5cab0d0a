//! Type definitions for the command browser.
//!
//! This module defines the state the browser keeps between interactions and
//! the actions a key press or click can ask for.

/// Something the browser loop has to do besides redrawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    /// Copy the command at this position of the visible list.
    Copy(usize),
    Quit,
}

/// Direction to cycle through rows or tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// Result of the last copy, shown on the status line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StatusMessage {
    Copied(String),
    Notice(String),
}

/// State for the list viewport.
///
/// `height` counts entries, not terminal rows.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the browser.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Index into the tab list ("All" is 0)
    pub tab_index: usize,
    /// Selected row within the current tab's filtered list
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether key presses currently edit the query
    pub is_filtering: bool,
    /// Current query text
    pub filter_text: String,
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn new(tab_index: usize, filter_text: String, viewport: ViewportState) -> Self {
        Self {
            tab_index,
            selected_index: 0,
            viewport,
            is_filtering: false,
            filter_text,
            status: None,
        }
    }

    /// Copy of this state showing another tab from its first row.
    #[must_use]
    pub fn with_tab(&self, tab_index: usize) -> Self {
        let mut state = self.clone();
        state.tab_index = tab_index;
        state.selected_index = 0;
        state.viewport.offset = 0;
        state
    }

    /// Copy of this state with a new query, back at the first row.
    #[must_use]
    pub fn with_filter_text(&self, filter_text: String) -> Self {
        let mut state = self.clone();
        state.filter_text = filter_text;
        state.selected_index = 0;
        state.viewport.offset = 0;
        state
    }

    /// Keeps the selection inside a list of `visible_len` rows.
    #[must_use]
    pub fn clamped_to(&self, visible_len: usize) -> Self {
        let mut state = self.clone();
        if visible_len == 0 {
            state.selected_index = 0;
            state.viewport.offset = 0;
        } else if state.selected_index >= visible_len {
            state.selected_index = visible_len - 1;
            state.viewport.offset = state
                .selected_index
                .saturating_sub((state.viewport.height as usize).saturating_sub(1));
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> UiState {
        UiState::new(
            0,
            String::new(),
            ViewportState {
                offset: 0,
                height: 5,
                width: 80,
            },
        )
    }

    #[test]
    fn test_with_tab_resets_selection() {
        let mut state = create_test_state();
        state.selected_index = 7;
        state.viewport.offset = 3;

        let state = state.with_tab(2);

        assert_eq!(state.tab_index, 2);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.viewport.offset, 0);
    }

    #[test]
    fn test_with_filter_text_resets_selection() {
        let mut state = create_test_state();
        state.selected_index = 4;

        let state = state.with_filter_text("git".to_string());

        assert_eq!(state.filter_text, "git");
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_clamped_to_shorter_list() {
        let mut state = create_test_state();
        state.selected_index = 9;
        state.viewport.offset = 5;

        let state = state.clamped_to(3);

        assert_eq!(state.selected_index, 2);
        assert_eq!(state.viewport.offset, 0);
    }

    #[test]
    fn test_clamped_to_empty_list() {
        let mut state = create_test_state();
        state.selected_index = 3;

        let state = state.clamped_to(0);

        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_clamped_keeps_valid_selection() {
        let mut state = create_test_state();
        state.selected_index = 2;

        assert_eq!(state.clamped_to(10), state);
    }

    #[test]
    fn test_ui_state_equality() {
        let state1 = create_test_state();
        let state2 = create_test_state();
        let mut state3 = create_test_state();
        state3.status = Some(StatusMessage::Copied("Command copied: ls".to_string()));

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
