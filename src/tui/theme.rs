use ratatui::style::Color;

use crate::model::theme::ThemeId;

/// Resolved color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub accent: Color,
    pub dim: Color,
    pub done: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub popup_bg: Color,
    pub popup_border: Color,
}

impl Theme {
    /// Palette for one of the fixed themes
    pub fn for_id(id: ThemeId) -> Self {
        match id {
            ThemeId::Blue => Theme {
                background: Color::Rgb(0x0A, 0x2A, 0x43),
                text: Color::Rgb(0xC8, 0xE6, 0xF5),
                text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent: Color::Rgb(0x22, 0xD3, 0xEE),
                dim: Color::Rgb(0x5E, 0x8C, 0xA8),
                done: Color::Rgb(0x4A, 0x6B, 0x82),
                selection_bg: Color::Rgb(0x14, 0x44, 0x66),
                selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
                popup_bg: Color::Rgb(0x0E, 0x33, 0x50),
                popup_border: Color::Rgb(0x22, 0xD3, 0xEE),
            },
            ThemeId::Black => Theme {
                background: Color::Rgb(0x0B, 0x0B, 0x0E),
                text: Color::Rgb(0xC9, 0xC9, 0xCF),
                text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent: Color::Rgb(0x9C, 0xA3, 0xAF),
                dim: Color::Rgb(0x55, 0x55, 0x60),
                done: Color::Rgb(0x44, 0x44, 0x4C),
                selection_bg: Color::Rgb(0x26, 0x26, 0x2E),
                selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
                popup_bg: Color::Rgb(0x16, 0x16, 0x1C),
                popup_border: Color::Rgb(0x9C, 0xA3, 0xAF),
            },
            ThemeId::Red => Theme {
                background: Color::Rgb(0x3A, 0x10, 0x18),
                text: Color::Rgb(0xF5, 0xD0, 0xD6),
                text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent: Color::Rgb(0xFB, 0x71, 0x85),
                dim: Color::Rgb(0x9A, 0x5A, 0x66),
                done: Color::Rgb(0x7A, 0x46, 0x50),
                selection_bg: Color::Rgb(0x5A, 0x1E, 0x2A),
                selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
                popup_bg: Color::Rgb(0x47, 0x16, 0x20),
                popup_border: Color::Rgb(0xFB, 0x71, 0x85),
            },
            ThemeId::Green => Theme {
                background: Color::Rgb(0x0C, 0x2E, 0x20),
                text: Color::Rgb(0xCC, 0xEE, 0xDB),
                text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent: Color::Rgb(0x34, 0xD3, 0x99),
                dim: Color::Rgb(0x5C, 0x8A, 0x74),
                done: Color::Rgb(0x47, 0x6B, 0x5A),
                selection_bg: Color::Rgb(0x14, 0x47, 0x32),
                selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
                popup_bg: Color::Rgb(0x10, 0x39, 0x28),
                popup_border: Color::Rgb(0x34, 0xD3, 0x99),
            },
            ThemeId::Dark => Theme {
                background: Color::Rgb(0x17, 0x10, 0x2B),
                text: Color::Rgb(0xD4, 0xC6, 0xF0),
                text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
                accent: Color::Rgb(0xA7, 0x8B, 0xFA),
                dim: Color::Rgb(0x6E, 0x5E, 0x94),
                done: Color::Rgb(0x56, 0x4A, 0x74),
                selection_bg: Color::Rgb(0x2B, 0x1E, 0x4E),
                selection_fg: Color::Rgb(0xFF, 0xFF, 0xFF),
                popup_bg: Color::Rgb(0x1F, 0x16, 0x3A),
                popup_border: Color::Rgb(0xA7, 0x8B, 0xFA),
            },
            ThemeId::Light => Theme {
                background: Color::Rgb(0xF6, 0xE9, 0xF2),
                text: Color::Rgb(0x3A, 0x30, 0x44),
                text_bright: Color::Rgb(0x14, 0x0E, 0x1C),
                accent: Color::Rgb(0x9D, 0x5C, 0xC4),
                dim: Color::Rgb(0x9A, 0x8E, 0xA6),
                done: Color::Rgb(0xAD, 0xA2, 0xB8),
                selection_bg: Color::Rgb(0xE4, 0xCF, 0xE8),
                selection_fg: Color::Rgb(0x14, 0x0E, 0x1C),
                popup_bg: Color::Rgb(0xEF, 0xDE, 0xEE),
                popup_border: Color::Rgb(0x9D, 0x5C, 0xC4),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_id_has_a_palette() {
        for id in ThemeId::ALL {
            // Palettes are distinct enough to key off the background
            let theme = Theme::for_id(id);
            let again = Theme::for_id(id);
            assert_eq!(theme.background, again.background);
        }
    }

    #[test]
    fn light_theme_has_dark_text() {
        let theme = Theme::for_id(ThemeId::Light);
        // Sanity guard against inverted palettes
        assert!(matches!(theme.text, Color::Rgb(r, _, _) if r < 0x80));
        assert!(matches!(theme.background, Color::Rgb(r, _, _) if r > 0x80));
    }
}
