use horologe_engine::paint::Color;

/// Colors of the settings screen around the clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenTheme {
    pub background: Color,
    pub label: Color,
    /// Checked toggle track and selected segment.
    pub accent: Color,
    /// Text drawn on top of `accent`.
    pub on_accent: Color,
    /// Unchecked toggle track and idle segment.
    pub track: Color,
    pub thumb: Color,
    pub divider: Color,
}

impl ScreenTheme {
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb_hex(0xFFFBFE),
            label: Color::from_rgb_hex(0x1C1B1F),
            accent: Color::from_rgb_hex(0x6750A4),
            on_accent: Color::from_rgb_hex(0xFFFFFF),
            track: Color::from_rgb_hex(0xE7E0EC),
            thumb: Color::from_rgb_hex(0xFFFFFF),
            divider: Color::from_rgb_hex(0xCAC4D0),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb_hex(0x1C1B1F),
            label: Color::from_rgb_hex(0xE6E1E5),
            accent: Color::from_rgb_hex(0xD0BCFF),
            on_accent: Color::from_rgb_hex(0x381E72),
            track: Color::from_rgb_hex(0x49454F),
            thumb: Color::from_rgb_hex(0xE6E1E5),
            divider: Color::from_rgb_hex(0x49454F),
        }
    }

    pub fn for_theme(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ_in_background() {
        assert_ne!(ScreenTheme::light().background, ScreenTheme::dark().background);
        assert_eq!(ScreenTheme::for_theme(true), ScreenTheme::dark());
        assert_eq!(ScreenTheme::for_theme(false), ScreenTheme::light());
    }

    #[test]
    fn screen_colors_are_opaque() {
        for t in [ScreenTheme::light(), ScreenTheme::dark()] {
            assert!(t.background.is_opaque());
            assert!(t.label.is_opaque());
            assert!(t.accent.is_opaque());
        }
    }
}
