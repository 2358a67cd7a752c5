use horologe_engine::paint::Color;

/// Colors the clock is drawn with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPalette {
    /// Face fill; also the pivot dot.
    pub background: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    /// Second dot and day label.
    pub second_hand: Color,
    pub numeral: Color,
}

impl ColorPalette {
    /// Material baseline light scheme:
    /// primary / onPrimary / onSecondary / onBackground / onPrimaryContainer.
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb_hex(0x6750A4),
            hour_hand: Color::from_rgb_hex(0xFFFFFF),
            minute_hand: Color::from_rgb_hex(0xFFFFFF),
            second_hand: Color::from_rgb_hex(0x1C1B1F),
            numeral: Color::from_rgb_hex(0x21005D),
        }
    }

    /// Material baseline dark scheme, same roles as [`light`](Self::light).
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb_hex(0xD0BCFF),
            hour_hand: Color::from_rgb_hex(0x381E72),
            minute_hand: Color::from_rgb_hex(0x332D41),
            second_hand: Color::from_rgb_hex(0xE6E1E5),
            numeral: Color::from_rgb_hex(0xEADDFF),
        }
    }

    pub fn for_theme(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
