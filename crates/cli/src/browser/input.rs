//! Key and mouse handling for the browser.
//!
//! Handlers take the current state and return what changed; the browser loop
//! applies the result and redraws.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::layout::{entry_at_row, tab_at_column, TabSpan, TAB_ROW};
use super::types::CycleDirection::{Down, Up};
use super::types::{BrowserAction, CycleDirection, StatusMessage, UiState, ViewportState};
use devref_core::clipboard::{copy_command, Clipboard};
use devref_core::view::ScopeView;

/// Outcome of one input event: an action to run, a replacement state, and a
/// row movement to apply afterwards.
pub type InputOutcome = (
    Option<BrowserAction>,
    Option<UiState>,
    Option<CycleDirection>,
);

const NOTHING: InputOutcome = (None, None, None);

/// Handle keyboard events
pub fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    tab_count: usize,
    visible_len: usize,
) -> InputOutcome {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            (Some(BrowserAction::Quit), None, None)
        }
        KeyCode::Up => (None, None, Some(Up)),
        KeyCode::Down => (None, None, Some(Down)),
        KeyCode::Tab => (
            None,
            Some(ui_state.with_tab(cycle_tab(ui_state.tab_index, tab_count, Down))),
            None,
        ),
        KeyCode::BackTab => (
            None,
            Some(ui_state.with_tab(cycle_tab(ui_state.tab_index, tab_count, Up))),
            None,
        ),
        KeyCode::Backspace => {
            if ui_state.filter_text.is_empty() {
                return NOTHING;
            }

            let mut filter_text = ui_state.filter_text.clone();
            filter_text.pop();
            (None, Some(ui_state.with_filter_text(filter_text)), None)
        }
        KeyCode::Esc => {
            if !ui_state.is_filtering && ui_state.filter_text.is_empty() {
                return NOTHING;
            }

            let mut updated_state = ui_state.with_filter_text(String::new());
            updated_state.is_filtering = false;
            (None, Some(updated_state), None)
        }
        _ if ui_state.is_filtering => handle_filtering_key(key_event, ui_state),
        _ => handle_navigation_key(key_event, ui_state, tab_count, visible_len),
    }
}

/// Keys while the query line has focus
fn handle_filtering_key(key_event: KeyEvent, ui_state: &UiState) -> InputOutcome {
    match key_event.code {
        KeyCode::Enter => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = false;
            (None, Some(updated_state), None)
        }
        KeyCode::Char(c) => {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.push(c);
            (None, Some(ui_state.with_filter_text(filter_text)), None)
        }
        _ => NOTHING,
    }
}

/// Keys while the list has focus
fn handle_navigation_key(
    key_event: KeyEvent,
    ui_state: &UiState,
    tab_count: usize,
    visible_len: usize,
) -> InputOutcome {
    match key_event.code {
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            (None, Some(updated_state), None)
        }
        KeyCode::Char('q') => (Some(BrowserAction::Quit), None, None),
        KeyCode::Char('k') => (None, None, Some(Up)),
        KeyCode::Char('j') => (None, None, Some(Down)),
        KeyCode::Left | KeyCode::Char('h') => (
            None,
            Some(ui_state.with_tab(cycle_tab(ui_state.tab_index, tab_count, Up))),
            None,
        ),
        KeyCode::Right | KeyCode::Char('l') => (
            None,
            Some(ui_state.with_tab(cycle_tab(ui_state.tab_index, tab_count, Down))),
            None,
        ),
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('c') => {
            if ui_state.selected_index < visible_len {
                (Some(BrowserAction::Copy(ui_state.selected_index)), None, None)
            } else {
                NOTHING
            }
        }
        _ => NOTHING,
    }
}

/// Handle a left click released at (`column`, `row`)
pub fn handle_click(
    column: u16,
    row: u16,
    ui_state: &UiState,
    tab_spans: &[TabSpan],
    visible_len: usize,
) -> InputOutcome {
    if row == TAB_ROW {
        return match tab_at_column(tab_spans, column) {
            Some(tab_index) if tab_index != ui_state.tab_index => {
                (None, Some(ui_state.with_tab(tab_index)), None)
            }
            _ => NOTHING,
        };
    }

    let Some(clicked_index) =
        entry_at_row(row, ui_state.viewport.offset, ui_state.viewport.height)
    else {
        return NOTHING;
    };

    if clicked_index >= visible_len {
        return NOTHING;
    }

    let mut updated_state = ui_state.clone();
    updated_state.selected_index = clicked_index;
    (
        Some(BrowserAction::Copy(clicked_index)),
        Some(updated_state),
        None,
    )
}

/// Handle mouse events
///
/// A click only counts when the button goes down and up on the same row.
pub fn handle_mouse_event(
    mouse_event: MouseEvent,
    down_row: &mut Option<u16>,
    ui_state: &UiState,
    tab_spans: &[TabSpan],
    visible_len: usize,
) -> InputOutcome {
    if mouse_event.modifiers != KeyModifiers::NONE {
        return NOTHING;
    }

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            *down_row = Some(mouse_event.row);
            NOTHING
        }
        MouseEventKind::Up(MouseButton::Left) => match down_row.take() {
            Some(row) if row == mouse_event.row => handle_click(
                mouse_event.column,
                mouse_event.row,
                ui_state,
                tab_spans,
                visible_len,
            ),
            _ => NOTHING,
        },
        MouseEventKind::ScrollDown => (None, None, Some(Down)),
        MouseEventKind::ScrollUp => (None, None, Some(Up)),
        _ => NOTHING,
    }
}

/// Next tab index in `direction`, wrapping around
#[must_use]
pub fn cycle_tab(tab_index: usize, tab_count: usize, direction: CycleDirection) -> usize {
    if tab_count == 0 {
        return 0;
    }

    match direction {
        Up => (tab_index + tab_count - 1) % tab_count,
        Down => (tab_index + 1) % tab_count,
    }
}

/// Move the selected index in the given direction
#[must_use]
pub fn move_selected_index(
    ui_state: &UiState,
    visible_len: usize,
    direction: CycleDirection,
) -> UiState {
    if visible_len == 0 {
        return ui_state.clone();
    }

    let mut new_index = ui_state.selected_index;
    let mut ui_state = ui_state.clone();
    let page_size = ui_state.viewport.height as usize;

    match direction {
        Up => {
            if new_index == 0 {
                new_index = visible_len - 1;
                ui_state.viewport.offset = new_index.saturating_sub(page_size.saturating_sub(1));
            } else {
                new_index -= 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
            }
        }
        Down => {
            new_index = (new_index + 1) % visible_len;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + page_size {
                ui_state.viewport.offset = (new_index + 1).saturating_sub(page_size);
            }
        }
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Runs `action` against the visible entries.
///
/// Returns the state to show next, or `None` when the browser should close.
/// A copy only touches the status line; a failed copy becomes a notice.
pub fn apply_action(
    view: &ScopeView,
    ui_state: UiState,
    action: BrowserAction,
    clipboard: &mut dyn Clipboard,
) -> Option<UiState> {
    let index = match action {
        BrowserAction::Quit => return None,
        BrowserAction::Copy(index) => index,
    };

    let Some(entry) = view.entries.get(index) else {
        return Some(ui_state);
    };

    let status = match copy_command(clipboard, entry) {
        Ok(message) => StatusMessage::Copied(message),
        Err(e) => StatusMessage::Notice(e.to_string()),
    };

    Some(UiState {
        status: Some(status),
        ..ui_state
    })
}

/// Handle window resize events
#[must_use]
pub fn handle_resize(
    width: u16,
    page_size: u16,
    ui_state: &UiState,
    visible_len: usize,
) -> UiState {
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: page_size,
        offset: ui_state.viewport.offset,
    };

    // If growing taller, try to show more items above current selection
    match page_size.cmp(&ui_state.viewport.height) {
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = page_size - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if ui_state.selected_index >= new_viewport.offset + page_size as usize =>
        {
            new_viewport.offset = ui_state
                .selected_index
                .saturating_sub((page_size as usize).saturating_sub(1));

            if new_viewport.offset + page_size as usize > visible_len {
                new_viewport.offset = visible_len.saturating_sub(page_size as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}
