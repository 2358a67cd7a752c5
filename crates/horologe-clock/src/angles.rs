use crate::TimeSnapshot;

/// Second hand angle in degrees, clockwise from 12 o'clock.
#[inline]
pub fn second_angle(second: u32) -> f32 {
    (second as f32 * 6.0).rem_euclid(360.0)
}

/// Minute hand angle; drifts by a tenth of a degree per second.
#[inline]
pub fn minute_angle(minute: u32, second: u32) -> f32 {
    (minute as f32 * 6.0 + second as f32 / 10.0).rem_euclid(360.0)
}

/// Hour hand angle; drifts by half a degree per minute.
#[inline]
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    (hour as f32 * 30.0 + minute as f32 / 2.0).rem_euclid(360.0)
}

/// Hand angles for one snapshot, in degrees within `[0, 360)`.
///
/// Derived on every render and never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_snapshot(s: &TimeSnapshot) -> Self {
        let (h, m, sec) = (s.hour() as u32, s.minute() as u32, s.second() as u32);
        Self {
            hour: hour_angle(h, m),
            minute: minute_angle(m, sec),
            second: second_angle(sec),
        }
    }
}
