//! Color definitions for nodelens themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the nodelens terminal UI. Colors are organized into three
//! categories: syntax highlighting, UI elements, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in a nodelens theme.
///
/// Colors are organized into three main categories:
/// - **Syntax colors**: Used for JSON highlighting in the inspector view
/// - **UI colors**: Used for interface elements (background, foreground,
///   cursor, status line, selection, modal border)
/// - **Semantic colors**: Used for messages (errors, warnings, info)
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Syntax colors
    /// Color for JSON object keys.
    pub key: Color,
    /// Color for JSON string values.
    pub string: Color,
    /// Color for JSON number values.
    pub number: Color,
    /// Color for JSON boolean values (true/false).
    pub boolean: Color,
    /// Color for JSON null values.
    pub null: Color,

    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground/text color.
    pub foreground: Color,
    /// Color for the input cursor in edit fields.
    pub cursor: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Background color for the selected node in the list.
    pub selection_bg: Color,
    /// Border color for the inspector modal.
    pub border: Color,

    // Semantic colors
    /// Color for error messages and indicators.
    pub error: Color,
    /// Color for warning messages and indicators.
    pub warning: Color,
    /// Color for informational messages and the path line.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the actual RGB values adapt to the user's
    /// terminal color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use nodelens::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            key: Color::LightBlue,
            string: Color::Green,
            number: Color::Magenta,
            boolean: Color::Yellow,
            null: Color::DarkGray,

            background: Color::Reset,
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            selection_bg: Color::DarkGray,
            border: Color::LightBlue,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// High contrast, designed for well-lit environments.
    pub fn default_light() -> Self {
        Self {
            key: Color::Rgb(166, 38, 164),
            string: Color::Rgb(80, 161, 79),
            number: Color::Rgb(152, 104, 1),
            boolean: Color::Rgb(1, 132, 188),
            null: Color::Rgb(160, 30, 170),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            selection_bg: Color::Rgb(220, 220, 220),
            border: Color::Rgb(82, 139, 255),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    ///
    /// A retro groove color scheme with warm, earthy tones.
    /// Based on the popular Gruvbox theme by morhetz.
    pub fn gruvbox_dark() -> Self {
        Self {
            key: Color::Rgb(251, 184, 108),
            string: Color::Rgb(184, 187, 38),
            number: Color::Rgb(211, 134, 155),
            boolean: Color::Rgb(254, 128, 25),
            null: Color::Rgb(146, 131, 116),

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(251, 184, 108),
            status_line_bg: Color::Rgb(60, 56, 54),
            status_line_fg: Color::Rgb(235, 219, 178),
            selection_bg: Color::Rgb(60, 56, 54),
            border: Color::Rgb(251, 184, 108),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }
}
