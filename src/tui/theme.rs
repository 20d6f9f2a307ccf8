//! Theme for the TUI
//!
//! Colours are process-wide constants; nothing here is mutated at runtime.

use ratatui::style::{Color, Modifier, Style};

/// Theme colors for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Title line
    pub title: Color,
    pub app_name: Color,

    // Border colors
    pub border: Color,
    pub border_focused: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accents
    pub spinner: Color,
    pub heading: Color,
    pub link: Color,
    pub code_fg: Color,
    pub bg_code: Color,
    pub quote: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Theme {
    /// 256-colour palette shared by every widget
    pub const DEFAULT: Theme = Theme {
        title: Color::Indexed(35),
        app_name: Color::Indexed(94),

        border: Color::Indexed(240),
        border_focused: Color::Indexed(205),

        text_primary: Color::Reset,
        text_muted: Color::Indexed(244),

        spinner: Color::Indexed(205),
        heading: Color::Indexed(39),
        link: Color::Indexed(81),
        code_fg: Color::Indexed(203),
        bg_code: Color::Indexed(236),
        quote: Color::Indexed(246),
        error: Color::Indexed(196),
    };

    pub const fn title_style(&self) -> Style {
        Style::new().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub const fn app_name_style(&self) -> Style {
        Style::new().fg(self.app_name).add_modifier(Modifier::BOLD)
    }

    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.text_muted)
    }
}
