//! Colors used by the browser.

use crossterm::style::Color;

/// Header bar background
pub const HEADER_BACKGROUND: Color = Color::DarkGreen;

/// Selected row
pub const SELECTED_BACKGROUND: Color = Color::DarkBlue;
pub const SELECTED_FOREGROUND: Color = Color::Yellow;

/// Descriptions under each command
pub const DESCRIPTION_FOREGROUND: Color = Color::DarkGrey;

/// Empty-result messages and clipboard notices
pub const NOTICE_FOREGROUND: Color = Color::Red;

/// Copy confirmations
pub const CONFIRMATION_FOREGROUND: Color = Color::Green;

const TAB_BACKGROUND: Color = Color::Rgb {
    r: 0xE8,
    g: 0xEA,
    b: 0xF6,
};
const TAB_FOREGROUND: Color = Color::Rgb {
    r: 0x1A,
    g: 0x23,
    b: 0x7E,
};
const ACTIVE_TAB_BACKGROUND: Color = Color::Rgb {
    r: 0x3F,
    g: 0x51,
    b: 0xB5,
};
const ACTIVE_TAB_FOREGROUND: Color = Color::White;

/// Foreground and background of a tab label.
#[must_use]
pub fn tab_colors(is_active: bool) -> (Color, Color) {
    if is_active {
        (ACTIVE_TAB_FOREGROUND, ACTIVE_TAB_BACKGROUND)
    } else {
        (TAB_FOREGROUND, TAB_BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_stands_out() {
        let (active_fg, active_bg) = tab_colors(true);
        let (fg, bg) = tab_colors(false);

        assert_eq!(active_fg, Color::White);
        assert_ne!(active_bg, bg);
        assert_ne!(active_fg, fg);
    }
}
