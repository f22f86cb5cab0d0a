use std::io::{stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, event, queue, terminal, ExecutableCommand};

use super::colors::{
    tab_colors, CONFIRMATION_FOREGROUND, DESCRIPTION_FOREGROUND, HEADER_BACKGROUND,
    NOTICE_FOREGROUND, SELECTED_BACKGROUND, SELECTED_FOREGROUND,
};
use super::input::{
    apply_action, handle_key_event, handle_mouse_event, handle_resize, move_selected_index,
};
use super::layout::{
    entries_per_page, fit_to_width, pad_to_width, status_row, tab_spans, TabSpan, HEADER_ROW,
    LIST_TOP, QUERY_ROW, ROWS_PER_ENTRY, TAB_ROW,
};
use super::types::{StatusMessage, UiState, ViewportState};
use devref_core::catalog::Catalog;
use devref_core::clipboard::Clipboard;
use devref_core::config::{COPY_LABEL, SEARCH_PLACEHOLDER, TITLE};
use devref_core::error::Result;
use devref_core::view::{tab_counts, Scope, ScopeView};

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Tab bar labels with the number of matches on each tab
fn tab_labels(catalog: &Catalog, query: &str) -> Vec<String> {
    tab_counts(catalog, query)
        .iter()
        .map(|(scope, count)| format!(" {} ({}) ", scope.label(), count))
        .collect()
}

/// Runs the interactive browser until the user quits.
///
/// `initial_tab` indexes [`Scope::tabs`]; out of range values fall back to
/// the "All" tab.
pub fn browse(
    catalog: &Catalog,
    initial_tab: usize,
    initial_query: String,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    let _raw_mode_guard = RawModeGuard; // When this goes out of scope, raw mode and mouse capture is disabled
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(cursor::Hide)?;

    let tabs = Scope::tabs(catalog);
    let initial_tab = if initial_tab < tabs.len() { initial_tab } else { 0 };

    let (width, mut height) = terminal::size()?;
    let viewport = ViewportState {
        offset: 0,
        height: entries_per_page(height),
        width,
    };

    let mut ui_state = UiState::new(initial_tab, initial_query, viewport);
    let mut down_row: Option<u16> = None;
    let mut needs_redraw = true;

    loop {
        let view = ScopeView::build(catalog, &tabs[ui_state.tab_index], &ui_state.filter_text);
        ui_state = ui_state.clamped_to(view.len());

        let labels = tab_labels(catalog, &ui_state.filter_text);
        let spans = tab_spans(&labels, ui_state.tab_index, ui_state.viewport.width);

        if needs_redraw {
            redraw_ui(&ui_state, &labels, &spans, &view, height)?;
        }

        let (action, new_state, direction) = match event::read()? {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                handle_key_event(key_event, &ui_state, tabs.len(), view.len())
            }
            Event::Mouse(mouse_event) => {
                handle_mouse_event(mouse_event, &mut down_row, &ui_state, &spans, view.len())
            }
            Event::Resize(new_width, new_height) => {
                height = new_height;
                let resized = handle_resize(
                    new_width,
                    entries_per_page(new_height),
                    &ui_state,
                    view.len(),
                );
                (None, Some(resized), None)
            }
            _ => (None, None, None),
        };

        let mut next_state = new_state.unwrap_or_else(|| ui_state.clone());

        if let Some(direction) = direction {
            next_state = move_selected_index(&next_state, view.len(), direction);
        }

        if let Some(action) = action {
            match apply_action(&view, next_state, action, clipboard) {
                Some(state) => next_state = state,
                None => return Ok(()),
            }
        }

        needs_redraw = next_state != ui_state;
        ui_state = next_state;
    }
}

fn redraw_ui(
    ui_state: &UiState,
    labels: &[String],
    spans: &[TabSpan],
    view: &ScopeView,
    height: u16,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(ui_state, view.len())?;
    print_tabs(ui_state, labels, spans)?;
    print_query(ui_state)?;

    if view.is_empty() {
        queue!(
            stdout,
            MoveTo(0, LIST_TOP),
            SetForegroundColor(NOTICE_FOREGROUND),
            Print(fit_to_width(
                &view.empty_message(),
                ui_state.viewport.width as usize
            )),
            SetAttribute(Attribute::Reset)
        )?;
    } else {
        print_entries(ui_state, view)?;
    }

    print_status(ui_state, height)?;

    stdout.flush()?;
    Ok(())
}

/// Print the header for the browser
fn print_header(ui_state: &UiState, visible_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    let instructions = if ui_state.is_filtering {
        "<enter>: Done   |   <esc>: Clear Search".to_string()
    } else {
        let position = if visible_count == 0 {
            0
        } else {
            ui_state.selected_index + 1
        };

        format!(
            "/: Search   |   ←/→: Tabs   |   <enter>: {COPY_LABEL}   |   {position}/{visible_count}   |   q: Quit"
        )
    };

    let content = fit_to_width(&format!("  {TITLE}   |   {instructions}"), width);

    queue!(
        stdout,
        MoveTo(0, HEADER_ROW),
        SetBackgroundColor(HEADER_BACKGROUND),
        Print(pad_to_width(&content, width)),
        SetBackgroundColor(Color::Reset),
        SetForegroundColor(Color::Reset),
    )?;

    Ok(())
}

fn print_tabs(ui_state: &UiState, labels: &[String], spans: &[TabSpan]) -> Result<()> {
    let mut stdout = stdout();

    for span in spans {
        let is_active = span.tab_index == ui_state.tab_index;
        let (foreground, background) = tab_colors(is_active);

        queue!(
            stdout,
            MoveTo(span.start, TAB_ROW),
            SetForegroundColor(foreground),
            SetBackgroundColor(background),
        )?;

        if is_active {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }

        queue!(
            stdout,
            Print(&labels[span.tab_index]),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Color::Reset),
            SetForegroundColor(Color::Reset),
        )?;
    }

    Ok(())
}

fn print_query(ui_state: &UiState) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    queue!(stdout, MoveTo(0, QUERY_ROW))?;

    if ui_state.filter_text.is_empty() && !ui_state.is_filtering {
        queue!(
            stdout,
            SetForegroundColor(DESCRIPTION_FOREGROUND),
            Print(fit_to_width(&format!("  {SEARCH_PLACEHOLDER}"), width)),
        )?;
    } else {
        let cursor_marker = if ui_state.is_filtering { "_" } else { "" };
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(fit_to_width(
                &format!("  Search: {}{cursor_marker}", ui_state.filter_text),
                width
            )),
        )?;
    }

    queue!(
        stdout,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(Color::Reset)
    )?;

    Ok(())
}

/// Print the visible entries with the selected one highlighted
fn print_entries(ui_state: &UiState, view: &ScopeView) -> Result<()> {
    let mut stdout = stdout();
    let viewport = &ui_state.viewport;
    let width = viewport.width as usize;

    let copy_trigger = format!("[{COPY_LABEL}]");
    let command_width = width.saturating_sub(copy_trigger.chars().count() + 1);

    let visible_entries = view
        .entries
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (page_position, (index, entry)) in visible_entries.enumerate() {
        let row = LIST_TOP + page_position as u16 * ROWS_PER_ENTRY;
        let is_selected = index == ui_state.selected_index;

        let command = fit_to_width(&format!("  {}", entry.command), command_width);
        let command_line = format!("{} {copy_trigger}", pad_to_width(&command, command_width));

        queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

        if is_selected {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(SELECTED_BACKGROUND),
                SetForegroundColor(SELECTED_FOREGROUND),
            )?;
        }

        queue!(
            stdout,
            Print(fit_to_width(&command_line, width)),
            SetAttribute(Attribute::Reset),
            SetBackgroundColor(Color::Reset),
            SetForegroundColor(Color::Reset),
            MoveTo(0, row + 1),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(DESCRIPTION_FOREGROUND),
            Print(fit_to_width(&format!("      {}", entry.description), width)),
            SetForegroundColor(Color::Reset),
        )?;
    }

    Ok(())
}

fn print_status(ui_state: &UiState, height: u16) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    queue!(
        stdout,
        MoveTo(0, status_row(height)),
        Clear(ClearType::CurrentLine)
    )?;

    let (color, message) = match &ui_state.status {
        Some(StatusMessage::Copied(message)) => (CONFIRMATION_FOREGROUND, message),
        Some(StatusMessage::Notice(message)) => (NOTICE_FOREGROUND, message),
        None => return Ok(()),
    };

    queue!(
        stdout,
        SetForegroundColor(color),
        Print(fit_to_width(&format!("  {message}"), width)),
        SetForegroundColor(Color::Reset),
    )?;

    Ok(())
}
