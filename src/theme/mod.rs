//! Theme system for nodelens.
//!
//! This module provides the theme infrastructure for nodelens, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! nodelens includes three built-in themes:
//! - `"default-dark"`: ANSI colors that adapt to the terminal scheme
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//!
//! # Examples
//!
//! ```
//! use nodelens::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// A color theme for the nodelens terminal UI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

/// Returns a built-in theme by name.
///
/// # Examples
///
/// ```
/// use nodelens::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("gruvbox-dark").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default-dark" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::default_dark(),
        }),
        "default-light" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::default_light(),
        }),
        "gruvbox-dark" => Some(Theme {
            name: name.to_string(),
            colors: ThemeColors::gruvbox_dark(),
        }),
        _ => None,
    }
}

/// Returns the names of all built-in themes.
pub fn list_builtin_themes() -> Vec<String> {
    vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "gruvbox-dark".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_listed_themes_resolve() {
        for name in list_builtin_themes() {
            let theme = get_builtin_theme(&name);
            assert!(theme.is_some(), "theme {} should resolve", name);
            assert_eq!(theme.unwrap().name, name);
        }
    }
}
