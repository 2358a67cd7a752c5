//! The settings screen: clock on top, four option rows below.

use horologe_clock::{ClockConfiguration, ClockShape, ColorPalette};
use horologe_engine::coords::{Rect, Vec2, Viewport};
use horologe_engine::input::Key;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};

use crate::theme::ScreenTheme;
use crate::widgets::{Segmented, Toggle};

const PADDING: f32 = 24.0;
const ROW_HEIGHT: f32 = 56.0;
const LABEL_SIZE: f32 = 18.0;
const SELECTOR_SIZE: Vec2 = Vec2::new(172.0, 32.0);
const SELECTOR_GAP: f32 = 4.0;

/// Controls sit above the clock's layers.
const CONTROLS_Z: ZIndex = ZIndex(10);

/// User-facing options. The clock configuration and both palettes are
/// derived from this every frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SettingsState {
    pub dark_theme: bool,
    pub show_hour_numbers: bool,
    pub show_day: bool,
    pub shape: ClockShape,
}

impl SettingsState {
    /// Numerals on, day off, circular face.
    pub fn new(dark_theme: bool) -> Self {
        Self {
            dark_theme,
            show_hour_numbers: true,
            show_day: false,
            shape: ClockShape::Circle,
        }
    }

    pub fn apply(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::ToggleTheme => self.dark_theme = !self.dark_theme,
            SettingsAction::ToggleHourNumbers => self.show_hour_numbers = !self.show_hour_numbers,
            SettingsAction::ToggleDay => self.show_day = !self.show_day,
            SettingsAction::CycleShape => self.shape = self.shape.next(),
            SettingsAction::SelectShape(shape) => self.shape = shape,
        }
        log::debug!("settings: {action:?} -> {self:?}");
    }

    pub fn clock_configuration(&self, face_diameter: f32) -> ClockConfiguration {
        ClockConfiguration::default()
            .with_shape(self.shape)
            .with_hour_numbers(self.show_hour_numbers)
            .with_day(self.show_day)
            .with_face_diameter(face_diameter)
    }

    pub fn palette(&self) -> ColorPalette {
        ColorPalette::for_theme(self.dark_theme)
    }

    pub fn screen_theme(&self) -> ScreenTheme {
        ScreenTheme::for_theme(self.dark_theme)
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A change requested by a click or a key press.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SettingsAction {
    ToggleTheme,
    ToggleHourNumbers,
    ToggleDay,
    CycleShape,
    SelectShape(ClockShape),
}

impl SettingsAction {
    /// Keyboard shortcut mapping. `Escape` is handled by the app, not here.
    pub fn for_key(key: Key) -> Option<Self> {
        let action = match key {
            Key::T => Self::ToggleTheme,
            Key::N => Self::ToggleHourNumbers,
            Key::D => Self::ToggleDay,
            Key::S => Self::CycleShape,
            Key::Digit1 => Self::SelectShape(ClockShape::Circle),
            Key::Digit2 => Self::SelectShape(ClockShape::Rectangle),
            Key::Digit3 => Self::SelectShape(ClockShape::Dodecagon),
            Key::Digit4 => Self::SelectShape(ClockShape::Butterfly),
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Control {
    DarkTheme,
    ShowHours,
    ShowDay,
    Shape,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::DarkTheme, Control::ShowHours, Control::ShowDay, Control::Shape];

    /// Row index, top to bottom.
    pub fn position(self) -> usize {
        match self {
            Control::DarkTheme => 0,
            Control::ShowHours => 1,
            Control::ShowDay => 2,
            Control::Shape => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::DarkTheme => "Dark Theme",
            Control::ShowHours => "Show Hours",
            Control::ShowDay => "Show Day",
            Control::Shape => "Shape",
        }
    }
}

/// One option row: label on the left, control on the right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Row {
    pub control: Control,
    pub rect: Rect,
    pub control_rect: Rect,
}

/// Where everything goes for a given window size.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsLayout {
    /// Surface handed to the clock renderer; the face is centered in it.
    pub clock: Rect,
    pub rows: [Row; 4],
}

impl SettingsLayout {
    pub fn new(viewport: Viewport, face_diameter: f32) -> Self {
        let width = (viewport.width - 2.0 * PADDING).max(0.0);
        let clock = Rect::new(PADDING, PADDING, width, face_diameter.max(0.0));

        let top = clock.max().y + PADDING;
        let rows = std::array::from_fn(|i| {
            let control = Control::ALL[i];
            let rect = Rect::new(PADDING, top + i as f32 * ROW_HEIGHT, width, ROW_HEIGHT);
            let size = match control {
                Control::Shape => SELECTOR_SIZE,
                _ => Toggle::SIZE,
            };
            let center = Vec2::new(rect.max().x - size.x / 2.0, rect.center().y);
            Row { control, rect, control_rect: Rect::from_center(center, size) }
        });

        Self { clock, rows }
    }

    pub fn row(&self, control: Control) -> &Row {
        &self.rows[control.position()]
    }

    /// Action for a click at `pos`, if it lands on a control.
    pub fn hit_test(&self, pos: Vec2) -> Option<SettingsAction> {
        self.rows.iter().find_map(|row| match row.control {
            Control::DarkTheme => Toggle::hit(row.control_rect, pos).then_some(SettingsAction::ToggleTheme),
            Control::ShowHours => {
                Toggle::hit(row.control_rect, pos).then_some(SettingsAction::ToggleHourNumbers)
            }
            Control::ShowDay => Toggle::hit(row.control_rect, pos).then_some(SettingsAction::ToggleDay),
            Control::Shape => shape_selector(ClockShape::Circle)
                .hit(row.control_rect, pos)
                .and_then(|i| ClockShape::from_index(i + 1))
                .map(SettingsAction::SelectShape),
        })
    }

    /// True when `pos` is over something clickable.
    pub fn is_over_control(&self, pos: Vec2) -> bool {
        self.hit_test(pos).is_some()
    }
}

fn shape_selector(selected: ClockShape) -> Segmented {
    Segmented::new(ClockShape::ALL.map(|s| s.index().to_string()))
        .selected(selected.index() - 1)
        .gap(SELECTOR_GAP)
}

/// Records the option rows. The clock itself is recorded by the caller.
pub fn record(
    list: &mut DrawList,
    fonts: &FontSystem,
    font: FontId,
    layout: &SettingsLayout,
    state: &SettingsState,
    theme: &ScreenTheme,
) {
    for control in Control::ALL {
        let row = layout.row(control);
        let label = row.control.label();
        let size = fonts.measure_text(label, font, LABEL_SIZE);
        let origin = Vec2::new(row.rect.origin.x, row.rect.center().y - size.y / 2.0);
        list.push_text(CONTROLS_Z, label, font, LABEL_SIZE, theme.label, origin);

        if control.position() > 0 {
            let divider = Rect::new(row.rect.origin.x, row.rect.origin.y, row.rect.size.x, 1.0);
            list.push_rect(CONTROLS_Z, divider, theme.divider);
        }

        let checked = match row.control {
            Control::DarkTheme => state.dark_theme,
            Control::ShowHours => state.show_hour_numbers,
            Control::ShowDay => state.show_day,
            Control::Shape => {
                shape_selector(state.shape)
                    .font(font)
                    .idle_color(theme.track)
                    .selected_color(theme.accent)
                    .label_color(theme.label)
                    .selected_label_color(theme.on_accent)
                    .paint(list, fonts, CONTROLS_Z, row.control_rect);
                continue;
            }
        };

        Toggle::new(checked)
            .on_color(theme.accent)
            .off_color(theme.track)
            .thumb_color(theme.thumb)
            .paint(list, CONTROLS_Z, row.control_rect);
    }
}

#[cfg(test)]
mod tests {
    use horologe_engine::scene::DrawCmd;

    use super::*;

    fn layout() -> SettingsLayout {
        SettingsLayout::new(Viewport::new(360.0, 640.0), 300.0)
    }

    fn click(state: &mut SettingsState, layout: &SettingsLayout, pos: Vec2) {
        if let Some(action) = layout.hit_test(pos) {
            state.apply(action);
        }
    }

    // ── state ───────────────────────────────────────────────────────────

    #[test]
    fn initial_state_matches_screen_defaults() {
        let s = SettingsState::new(true);
        assert!(s.dark_theme);
        assert!(s.show_hour_numbers);
        assert!(!s.show_day);
        assert_eq!(s.shape, ClockShape::Circle);
        assert!(!SettingsState::default().dark_theme);
    }

    #[test]
    fn derived_configuration_follows_state() {
        let mut s = SettingsState::new(false);
        s.apply(SettingsAction::ToggleDay);
        s.apply(SettingsAction::SelectShape(ClockShape::Butterfly));

        let cfg = s.clock_configuration(240.0);
        assert!(cfg.show_day);
        assert!(cfg.show_hour_numbers);
        assert_eq!(cfg.shape, ClockShape::Butterfly);
        assert_eq!(cfg.face_diameter, 240.0);

        assert_eq!(s.palette(), ColorPalette::light());
        s.apply(SettingsAction::ToggleTheme);
        assert_eq!(s.palette(), ColorPalette::dark());
        assert_eq!(s.screen_theme(), ScreenTheme::dark());
    }

    #[test]
    fn cycle_shape_wraps() {
        let mut s = SettingsState::new(false);
        for expected in [ClockShape::Rectangle, ClockShape::Dodecagon, ClockShape::Butterfly, ClockShape::Circle] {
            s.apply(SettingsAction::CycleShape);
            assert_eq!(s.shape, expected);
        }
    }

    // ── keys ────────────────────────────────────────────────────────────

    #[test]
    fn shortcuts_map_to_actions() {
        assert_eq!(SettingsAction::for_key(Key::T), Some(SettingsAction::ToggleTheme));
        assert_eq!(SettingsAction::for_key(Key::N), Some(SettingsAction::ToggleHourNumbers));
        assert_eq!(SettingsAction::for_key(Key::D), Some(SettingsAction::ToggleDay));
        assert_eq!(SettingsAction::for_key(Key::S), Some(SettingsAction::CycleShape));
        assert_eq!(
            SettingsAction::for_key(Key::Digit3),
            Some(SettingsAction::SelectShape(ClockShape::Dodecagon))
        );
        assert_eq!(SettingsAction::for_key(Key::Escape), None);
        assert_eq!(SettingsAction::for_key(Key::Unknown(42)), None);
    }

    // ── layout ──────────────────────────────────────────────────────────

    #[test]
    fn rows_stack_below_clock() {
        let l = layout();
        assert_eq!(l.clock.size.y, 300.0);
        assert!(l.rows[0].rect.origin.y >= l.clock.max().y);
        for pair in l.rows.windows(2) {
            assert_eq!(pair[0].rect.max().y, pair[1].rect.origin.y);
        }
        for row in &l.rows {
            assert!(row.rect.contains(row.control_rect.center()));
            assert_eq!(row.control_rect.max().x, row.rect.max().x);
        }
    }

    #[test]
    fn narrow_window_never_goes_negative() {
        let l = SettingsLayout::new(Viewport::new(10.0, 10.0), 300.0);
        assert_eq!(l.clock.size.x, 0.0);
        assert!(l.rows.iter().all(|r| r.rect.size.x >= 0.0));
    }

    // ── clicks ──────────────────────────────────────────────────────────

    #[test]
    fn clicking_a_toggle_flips_exactly_its_flag() {
        let l = layout();
        let cases = [
            (Control::DarkTheme, SettingsState { dark_theme: true, ..SettingsState::new(false) }),
            (Control::ShowHours, SettingsState { show_hour_numbers: false, ..SettingsState::new(false) }),
            (Control::ShowDay, SettingsState { show_day: true, ..SettingsState::new(false) }),
        ];
        for (control, expected) in cases {
            let mut s = SettingsState::new(false);
            click(&mut s, &l, l.row(control).control_rect.center());
            assert_eq!(s, expected, "{control:?}");
        }
    }

    #[test]
    fn clicking_segment_k_selects_shape_k() {
        let l = layout();
        let rect = l.row(Control::Shape).control_rect;
        let selector = shape_selector(ClockShape::Circle);

        for k in 1..=4 {
            let mut s = SettingsState::new(false);
            click(&mut s, &l, selector.segment_rect(rect, k - 1).center());
            assert_eq!(Some(s.shape), ClockShape::from_index(k));
        }
    }

    #[test]
    fn clicks_off_controls_change_nothing() {
        let l = layout();
        let mut s = SettingsState::new(false);
        click(&mut s, &l, l.clock.center());
        click(&mut s, &l, l.row(Control::ShowDay).rect.origin + Vec2::new(4.0, 4.0));
        assert_eq!(s, SettingsState::new(false));
        assert!(!l.is_over_control(l.clock.center()));
        assert!(l.is_over_control(l.row(Control::ShowDay).control_rect.center()));
    }

    // ── recording ───────────────────────────────────────────────────────

    #[test]
    fn records_every_label() {
        let fonts = FontSystem::new();
        let state = SettingsState::new(false);
        let mut list = DrawList::new();
        record(&mut list, &fonts, FontId::DEFAULT, &layout(), &state, &state.screen_theme());

        let labels: Vec<&str> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        for control in Control::ALL {
            assert!(labels.contains(&control.label()), "missing {:?}", control.label());
        }
        // Four row labels plus four segment labels.
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn toggle_tracks_reflect_state() {
        let fonts = FontSystem::new();
        let mut state = SettingsState::new(false);
        state.apply(SettingsAction::ToggleDay);
        let theme = state.screen_theme();
        let l = layout();

        let mut list = DrawList::new();
        record(&mut list, &fonts, FontId::DEFAULT, &l, &state, &theme);

        let track_color = |control: Control| {
            list.items().iter().find_map(|i| match &i.cmd {
                DrawCmd::RoundedRect(r) if r.rect == l.row(control).control_rect => Some(r.color),
                _ => None,
            })
        };
        assert_eq!(track_color(Control::DarkTheme), Some(theme.track));
        assert_eq!(track_color(Control::ShowHours), Some(theme.accent));
        assert_eq!(track_color(Control::ShowDay), Some(theme.accent));
    }
}
