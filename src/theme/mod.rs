//! Theme system for dexterm: light/dark palettes, category colors and configuration.
//!
//! Public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading and parsing.
mod settings;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{SETTINGS_SKELETON, Settings, load_settings, load_settings_from, parse_settings};

use ratatui::style::Color;

/// Build an RGB color from a `0xRRGGBB` literal.
#[allow(clippy::cast_possible_truncation)]
const fn hex(rgb: u32) -> Color {
    Color::Rgb(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

/// Active color scheme. Lives in memory only; the initial value comes from settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Flip in place.
    pub const fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Palette for this mode.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }

    /// What: Parse a config/CLI value (`light`, `dark`).
    ///
    /// Output:
    /// - `None` for unrecognized values.
    #[must_use]
    pub fn from_config_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Lowercase name as written in settings.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Application palette used by rendering code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Brand accent (titles, selection).
    pub primary: Color,
    /// Canvas background.
    pub background: Color,
    /// Card and panel background.
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary text (captions, hints).
    pub text_secondary: Color,
    /// Borders and separators.
    pub border: Color,
    /// Error text.
    pub error: Color,
    /// Success state.
    pub success: Color,
    /// Warning state.
    pub warning: Color,
}

/// Light palette.
pub const LIGHT: Palette = Palette {
    primary: hex(0xDC3545),
    background: hex(0xFFFFFF),
    surface: hex(0xF8F9FA),
    text: hex(0x212529),
    text_secondary: hex(0x6C757D),
    border: hex(0xDEE2E6),
    error: hex(0xDC3545),
    success: hex(0x28A745),
    warning: hex(0xFFC107),
};

/// Dark palette.
pub const DARK: Palette = Palette {
    primary: hex(0xDC3545),
    background: hex(0x121212),
    surface: hex(0x1E1E1E),
    text: hex(0xE0E0E0),
    text_secondary: hex(0xA0A0A0),
    border: hex(0x333333),
    error: hex(0xDC3545),
    success: hex(0x28A745),
    warning: hex(0xFFC107),
};

/// What: Badge color for a category name.
///
/// Output:
/// - The category's color, or a neutral gray for unknown names.
#[must_use]
pub fn category_color(name: &str) -> Color {
    match name {
        "normal" => hex(0xA8A77A),
        "fire" => hex(0xEE8130),
        "water" => hex(0x6390F0),
        "electric" => hex(0xF7D02C),
        "grass" => hex(0x7AC74C),
        "ice" => hex(0x96D9D6),
        "fighting" => hex(0xC22E28),
        "poison" => hex(0xA33EA1),
        "ground" => hex(0xE2BF65),
        "flying" => hex(0xA98FF3),
        "psychic" => hex(0xF95587),
        "bug" => hex(0xA6B91A),
        "rock" => hex(0xB6A136),
        "ghost" => hex(0x735797),
        "dragon" => hex(0x6F35FC),
        "dark" => hex(0x705746),
        "steel" => hex(0xB7B7CE),
        "fairy" => hex(0xD685AD),
        _ => hex(0x68A090),
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Serialize tests that mutate `HOME`/`XDG_CONFIG_HOME`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips_and_selects_palette() {
        let mut mode = ThemeMode::Light;
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.palette().background, Color::Rgb(0x12, 0x12, 0x12));
        mode.toggle();
        assert_eq!(mode.palette().background, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn category_colors_cover_known_and_unknown_names() {
        assert_eq!(category_color("fire"), Color::Rgb(0xEE, 0x81, 0x30));
        assert_eq!(category_color("shadow"), Color::Rgb(0x68, 0xA0, 0x90));
    }

    #[test]
    fn theme_mode_parses_config_values() {
        assert_eq!(ThemeMode::from_config_key(" Dark "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_config_key("sepia"), None);
    }
}
