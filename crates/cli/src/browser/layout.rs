//! Screen geometry for the browser.
//!
//! ```text
//! row 0        header: title and key help
//! row 1        tab bar
//! row 2        query line
//! row 3..n-1   entries, two rows each (command, description)
//! row n        status line
//! ```

pub const HEADER_ROW: u16 = 0;
pub const TAB_ROW: u16 = 1;
pub const QUERY_ROW: u16 = 2;
pub const LIST_TOP: u16 = 3;
pub const ROWS_PER_ENTRY: u16 = 2;

/// Rows not available to entries: header, tabs, query and status.
const RESERVED_ROWS: u16 = 4;

const TAB_SEPARATOR_WIDTH: u16 = 1;

/// Number of entries that fit on a terminal `height` rows tall.
#[must_use]
pub fn entries_per_page(height: u16) -> u16 {
    height.saturating_sub(RESERVED_ROWS) / ROWS_PER_ENTRY
}

/// Terminal row of the status line.
#[must_use]
pub fn status_row(height: u16) -> u16 {
    height.saturating_sub(1)
}

/// Maps a terminal row inside the list to a position in the visible list.
#[must_use]
pub fn entry_at_row(row: u16, offset: usize, page_size: u16) -> Option<usize> {
    if row < LIST_TOP {
        return None;
    }

    let page_position = (row - LIST_TOP) / ROWS_PER_ENTRY;
    if page_position >= page_size {
        return None;
    }

    Some(offset + page_position as usize)
}

/// A tab as drawn on the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpan {
    pub tab_index: usize,
    pub start: u16,
    pub end: u16,
}

/// Places as many tab labels as fit in `width`, always including `selected`.
///
/// Tabs before the selected one are dropped from the left until the selected
/// tab fits.
#[must_use]
pub fn tab_spans(labels: &[String], selected: usize, width: u16) -> Vec<TabSpan> {
    let widths: Vec<u16> = labels
        .iter()
        .map(|label| u16::try_from(label.chars().count()).unwrap_or(u16::MAX))
        .collect();

    let span_width = |from: usize, to: usize| -> u32 {
        widths[from..=to]
            .iter()
            .map(|w| u32::from(*w) + u32::from(TAB_SEPARATOR_WIDTH))
            .sum()
    };

    let mut first = 0;
    if selected < widths.len() {
        while first < selected && span_width(first, selected) > u32::from(width) {
            first += 1;
        }
    }

    let mut spans = vec![];
    let mut column: u16 = 0;
    for (tab_index, tab_width) in widths.iter().enumerate().skip(first) {
        let Some(end) = column.checked_add(*tab_width) else {
            break;
        };
        if end > width {
            break;
        }

        spans.push(TabSpan {
            tab_index,
            start: column,
            end,
        });
        column = end.saturating_add(TAB_SEPARATOR_WIDTH);
    }

    spans
}

/// The tab drawn at `column`, if any.
#[must_use]
pub fn tab_at_column(spans: &[TabSpan], column: u16) -> Option<usize> {
    spans
        .iter()
        .find(|span| span.start <= column && column < span.end)
        .map(|span| span.tab_index)
}

/// Truncates `text` to `width` characters, marking the cut with `…`.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut fitted: String = text.chars().take(width - 1).collect();
    fitted.push('…');
    fitted
}

/// `text` padded with spaces up to `width` characters.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }

    format!("{text}{}", " ".repeat(width - length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_entries_per_page() {
        assert_eq!(entries_per_page(24), 10);
        assert_eq!(entries_per_page(5), 0);
        assert_eq!(entries_per_page(0), 0);
    }

    #[test]
    fn test_entry_at_row() {
        assert_eq!(entry_at_row(0, 0, 10), None);
        assert_eq!(entry_at_row(3, 0, 10), Some(0));
        assert_eq!(entry_at_row(4, 0, 10), Some(0));
        assert_eq!(entry_at_row(5, 0, 10), Some(1));
        assert_eq!(entry_at_row(5, 4, 10), Some(5));
        assert_eq!(entry_at_row(23, 0, 10), None);
    }

    #[test]
    fn test_tab_spans_fit() {
        let spans = tab_spans(&labels(&[" All ", " Git ", " SQL "]), 0, 80);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], TabSpan { tab_index: 0, start: 0, end: 5 });
        assert_eq!(spans[1], TabSpan { tab_index: 1, start: 6, end: 11 });
        assert_eq!(spans[2], TabSpan { tab_index: 2, start: 12, end: 17 });
    }

    #[test]
    fn test_tab_spans_truncate_on_the_right() {
        let spans = tab_spans(&labels(&[" All ", " Git ", " SQL "]), 0, 12);
        let shown: Vec<usize> = spans.iter().map(|s| s.tab_index).collect();
        assert_eq!(shown, vec![0, 1]);
    }

    #[test]
    fn test_tab_spans_scroll_to_selected() {
        let spans = tab_spans(&labels(&[" All ", " Git ", " SQL ", " Docker "]), 3, 16);
        let shown: Vec<usize> = spans.iter().map(|s| s.tab_index).collect();
        assert_eq!(shown, vec![2, 3]);
        assert_eq!(spans[0].start, 0);
    }

    #[test]
    fn test_tab_at_column() {
        let spans = tab_spans(&labels(&[" All ", " Git "]), 0, 80);
        assert_eq!(tab_at_column(&spans, 2), Some(0));
        assert_eq!(tab_at_column(&spans, 5), None);
        assert_eq!(tab_at_column(&spans, 6), Some(1));
        assert_eq!(tab_at_column(&spans, 40), None);
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("git init", 20), "git init");
        assert_eq!(fit_to_width("git init", 5), "git …");
        assert_eq!(fit_to_width("Öppna snabbsökning", 6), "Öppna…");
        assert_eq!(fit_to_width("ls", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ls", 4), "ls  ");
        assert_eq!(pad_to_width("mkdir", 3), "mkdir");
    }
}
