//! Theme system

use ratatui::prelude::*;

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color for focused elements
    pub focus_border: Color,
    /// Border color for unfocused elements
    pub unfocus_border: Color,
    /// Author name
    pub author: Color,
    /// Secondary text (role, timestamps, placeholders)
    pub muted: Color,
    /// Link text
    pub link: Color,
    /// Validation messages
    pub error: Color,
    /// Enabled submit button background
    pub button: Color,
    /// Status bar background
    pub status_bg: Color,
}

impl Theme {
    /// Look a theme up by its config name, falling back to the default
    pub fn from_name(name: &str) -> Self {
        match name {
            "mono" => Self::mono(),
            "default" => Self::default(),
            other => {
                tracing::warn!("Unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }

    /// Colorless theme for limited terminals
    pub fn mono() -> Self {
        Self {
            focus_border: Color::White,
            unfocus_border: Color::Gray,
            author: Color::White,
            muted: Color::Gray,
            link: Color::White,
            error: Color::White,
            button: Color::Gray,
            status_bg: Color::Black,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            focus_border: Color::Green,
            unfocus_border: Color::DarkGray,
            author: Color::White,
            muted: Color::Gray,
            link: Color::LightGreen,
            error: Color::Red,
            button: Color::Green,
            status_bg: Color::DarkGray,
        }
    }
}
