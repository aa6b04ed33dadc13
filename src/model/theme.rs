use serde::{Deserialize, Serialize};

/// One of the fixed set of visual themes.
///
/// The string keys are stable — they are what gets persisted — so renaming
/// a variant must not change its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Blue,
    Black,
    Red,
    Green,
    Dark,
    Light,
}

impl ThemeId {
    /// All themes in picker display order
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Blue,
        ThemeId::Black,
        ThemeId::Red,
        ThemeId::Green,
        ThemeId::Dark,
        ThemeId::Light,
    ];

    /// Stable persistence key
    pub fn key(self) -> &'static str {
        match self {
            ThemeId::Blue => "blue",
            ThemeId::Black => "black",
            ThemeId::Red => "red",
            ThemeId::Green => "green",
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
        }
    }

    /// Parse a persisted key. Unknown keys map to None (caller falls back
    /// to the default theme).
    pub fn from_key(key: &str) -> Option<ThemeId> {
        match key {
            "blue" => Some(ThemeId::Blue),
            "black" => Some(ThemeId::Black),
            "red" => Some(ThemeId::Red),
            "green" => Some(ThemeId::Green),
            "dark" => Some(ThemeId::Dark),
            "light" => Some(ThemeId::Light),
            _ => None,
        }
    }

    /// Human-readable name for the theme picker
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeId::Blue => "Ocean Blue",
            ThemeId::Black => "Midnight",
            ThemeId::Red => "Sunset Red",
            ThemeId::Green => "Forest Green",
            ThemeId::Dark => "Dark Mode",
            ThemeId::Light => "Light Mode",
        }
    }
}
