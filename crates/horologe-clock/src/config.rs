/// Face diameter the reference sizes are defined for, in logical pixels.
pub const DEFAULT_FACE_DIAMETER: f32 = 300.0;

/// Outline of the clock face.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ClockShape {
    #[default]
    Circle,
    Rectangle,
    Dodecagon,
    Butterfly,
}

impl ClockShape {
    /// All shapes, in selector order.
    pub const ALL: [ClockShape; 4] = [
        ClockShape::Circle,
        ClockShape::Rectangle,
        ClockShape::Dodecagon,
        ClockShape::Butterfly,
    ];

    /// 1-based position in [`ClockShape::ALL`], as shown on the selector.
    pub fn index(self) -> usize {
        match self {
            ClockShape::Circle => 1,
            ClockShape::Rectangle => 2,
            ClockShape::Dodecagon => 3,
            ClockShape::Butterfly => 4,
        }
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// The following shape, wrapping after the last.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[self.index() % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ClockShape::Circle => "circle",
            ClockShape::Rectangle => "rectangle",
            ClockShape::Dodecagon => "dodecagon",
            ClockShape::Butterfly => "butterfly",
        }
    }
}

/// What the clock draws. Owned by the caller; the renderer only reads it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockConfiguration {
    pub shape: ClockShape,
    pub show_hour_numbers: bool,
    pub show_day: bool,
    /// Side of the square face in logical pixels.
    pub face_diameter: f32,
}

impl Default for ClockConfiguration {
    fn default() -> Self {
        Self {
            shape: ClockShape::Circle,
            show_hour_numbers: true,
            show_day: false,
            face_diameter: DEFAULT_FACE_DIAMETER,
        }
    }
}

impl ClockConfiguration {
    #[must_use]
    pub fn with_shape(mut self, shape: ClockShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_hour_numbers(mut self, show: bool) -> Self {
        self.show_hour_numbers = show;
        self
    }

    #[must_use]
    pub fn with_day(mut self, show: bool) -> Self {
        self.show_day = show;
        self
    }

    /// Non-finite or negative diameters fall back to the default.
    #[must_use]
    pub fn with_face_diameter(mut self, diameter: f32) -> Self {
        self.face_diameter = if diameter.is_finite() && diameter >= 0.0 {
            diameter
        } else {
            DEFAULT_FACE_DIAMETER
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_widget() {
        let c = ClockConfiguration::default();
        assert_eq!(c.shape, ClockShape::Circle);
        assert!(c.show_hour_numbers);
        assert!(!c.show_day);
        assert_eq!(c.face_diameter, 300.0);
    }

    #[test]
    fn index_round_trips_for_every_shape() {
        for (i, shape) in ClockShape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i + 1);
            assert_eq!(ClockShape::from_index(i + 1), Some(*shape));
        }
        assert_eq!(ClockShape::from_index(0), None);
        assert_eq!(ClockShape::from_index(5), None);
    }

    #[test]
    fn next_cycles_through_all_shapes() {
        let mut s = ClockShape::Circle;
        for expected in [ClockShape::Rectangle, ClockShape::Dodecagon, ClockShape::Butterfly, ClockShape::Circle] {
            s = s.next();
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn bad_diameter_falls_back() {
        assert_eq!(ClockConfiguration::default().with_face_diameter(f32::NAN).face_diameter, 300.0);
        assert_eq!(ClockConfiguration::default().with_face_diameter(120.0).face_diameter, 120.0);
    }
}
