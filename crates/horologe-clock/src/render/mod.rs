//! Clock rendering: snapshot + configuration + palette → draw commands.
//!
//! Layers, back to front: face, numerals, hands, day label, pivot. Each
//! layer is a [`ZIndex`] above the renderer's base so the clock can sit on
//! top of whatever the caller has already recorded.

mod day_label;
mod face;
mod hands;
mod metrics;
mod numerals;

use horologe_engine::coords::Rect;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};

use crate::{ClockConfiguration, ColorPalette, HandAngles, TimeSnapshot};

use metrics::FaceMetrics;

const FACE: i32 = 0;
const NUMERALS: i32 = 1;
const HANDS: i32 = 2;
const DAY: i32 = 3;
const PIVOT: i32 = 4;

/// Records a clock face into a [`DrawList`].
///
/// Holds no per-frame state: the output depends only on the arguments to
/// [`render`](Self::render), so equal inputs give equal draw lists.
#[derive(Debug, Copy, Clone)]
pub struct ClockRenderer {
    /// Bold face used for numerals and the day label.
    pub font: FontId,
    /// Layer of the face; other layers stack above it.
    pub base_z: ZIndex,
}

impl Default for ClockRenderer {
    fn default() -> Self {
        Self { font: FontId::DEFAULT, base_z: ZIndex(0) }
    }
}

impl ClockRenderer {
    pub fn new(font: FontId) -> Self {
        Self { font, ..Self::default() }
    }

    #[must_use]
    pub fn with_base_z(mut self, z: ZIndex) -> Self {
        self.base_z = z;
        self
    }

    /// Square the face occupies inside `surface`.
    pub fn face_rect(surface: Rect, config: &ClockConfiguration) -> Rect {
        FaceMetrics::new(surface, config.face_diameter).square
    }

    /// Records the whole clock for one frame.
    ///
    /// An empty face (zero-sized surface or diameter) records nothing.
    pub fn render(
        &self,
        list: &mut DrawList,
        fonts: &FontSystem,
        surface: Rect,
        snapshot: &TimeSnapshot,
        config: &ClockConfiguration,
        palette: &ColorPalette,
    ) {
        let m = FaceMetrics::new(surface, config.face_diameter);
        if !(m.side > 0.0) {
            log::trace!("ClockRenderer: empty face, nothing to draw");
            return;
        }

        let angles = HandAngles::from_snapshot(snapshot);
        let z = |layer: i32| self.base_z.above(layer);

        face::draw(list, z(FACE), &m, config.shape, palette.background);

        if config.show_hour_numbers {
            numerals::draw(list, z(NUMERALS), &m, fonts, self.font, palette.numeral);
        }

        hands::draw(list, z(HANDS), &m, &angles, palette);

        if config.show_day {
            day_label::draw(
                list,
                z(DAY),
                &m,
                snapshot.day_label(),
                angles.second,
                self.font,
                palette.second_hand,
            );
        }

        hands::draw_pivot(list, z(PIVOT), &m, palette);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use horologe_engine::coords::PathSeg;
    use horologe_engine::render::{Frame, Rasterizer};
    use horologe_engine::scene::DrawCmd;

    use super::*;
    use crate::ClockShape;

    fn snapshot() -> TimeSnapshot {
        TimeSnapshot::new(6, 30, 15, Weekday::Tue).unwrap()
    }

    fn surface() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 300.0)
    }

    fn record(config: ClockConfiguration) -> DrawList {
        let mut list = DrawList::new();
        ClockRenderer::default().render(
            &mut list,
            &FontSystem::new(),
            surface(),
            &snapshot(),
            &config,
            &ColorPalette::light(),
        );
        list
    }

    fn kinds(list: &DrawList) -> Vec<&'static str> {
        list.items().iter().map(|i| i.cmd.kind()).collect()
    }

    fn face_items(list: &DrawList) -> Vec<&DrawCmd> {
        list.items().iter().filter(|i| i.key.z == ZIndex(FACE)).map(|i| &i.cmd).collect()
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn circle_face_is_one_disc() {
        let list = record(ClockConfiguration::default().with_shape(ClockShape::Circle));
        match face_items(&list).as_slice() {
            [DrawCmd::Circle(c)] => assert_eq!(c.radius, 150.0),
            other => panic!("unexpected face {other:?}"),
        }
    }

    #[test]
    fn rectangle_face_is_one_rounded_rect() {
        let list = record(ClockConfiguration::default().with_shape(ClockShape::Rectangle));
        match face_items(&list).as_slice() {
            [DrawCmd::RoundedRect(r)] => {
                assert_eq!(r.rect, surface());
                assert_eq!(r.radius, 100.0);
            }
            other => panic!("unexpected face {other:?}"),
        }
    }

    #[test]
    fn dodecagon_face_is_one_closed_path() {
        let list = record(ClockConfiguration::default().with_shape(ClockShape::Dodecagon));
        match face_items(&list).as_slice() {
            [DrawCmd::Path(p)] => {
                let quads = p.path.segments().iter().filter(|s| matches!(s, PathSeg::QuadTo(..))).count();
                assert_eq!(quads, 12);
                assert!(p.path.is_closed());
            }
            other => panic!("unexpected face {other:?}"),
        }
    }

    #[test]
    fn butterfly_face_is_five_circles() {
        let list = record(ClockConfiguration::default().with_shape(ClockShape::Butterfly));
        let face = face_items(&list);
        assert_eq!(face.len(), 5);
        let radii: Vec<f32> = face
            .iter()
            .map(|c| match c {
                DrawCmd::Circle(c) => c.radius,
                other => panic!("unexpected {}", other.kind()),
            })
            .collect();
        assert_eq!(radii, vec![125.0, 100.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn face_scales_with_diameter() {
        let config = ClockConfiguration::default()
            .with_shape(ClockShape::Rectangle)
            .with_face_diameter(150.0);
        let list = record(config);
        match face_items(&list).as_slice() {
            [DrawCmd::RoundedRect(r)] => {
                assert_eq!(r.rect, Rect::new(75.0, 75.0, 150.0, 150.0));
                assert_eq!(r.radius, 50.0);
            }
            other => panic!("unexpected face {other:?}"),
        }
    }

    // ── toggles ───────────────────────────────────────────────────────────

    #[test]
    fn default_layout_order() {
        let list = record(ClockConfiguration::default());
        assert_eq!(
            kinds(&list),
            vec!["circle", "text", "text", "text", "text", "line", "line", "circle", "circle"]
        );
    }

    #[test]
    fn hiding_numerals_removes_exactly_four_texts() {
        let on = record(ClockConfiguration::default().with_hour_numbers(true));
        let off = record(ClockConfiguration::default().with_hour_numbers(false));
        assert_eq!(on.len() - off.len(), 4);
        assert!(!kinds(&off).contains(&"text"));

        let rest: Vec<_> = on.items().iter().filter(|i| i.cmd.kind() != "text").map(|i| &i.cmd).collect();
        let off_cmds: Vec<_> = off.items().iter().map(|i| &i.cmd).collect();
        assert_eq!(rest, off_cmds);
    }

    #[test]
    fn showing_day_adds_exactly_one_text_on_path() {
        let off = record(ClockConfiguration::default());
        let on = record(ClockConfiguration::default().with_day(true));
        assert_eq!(on.len() - off.len(), 1);

        let rest: Vec<_> = on.items().iter().filter(|i| i.cmd.kind() != "text_on_path").map(|i| &i.cmd).collect();
        let off_cmds: Vec<_> = off.items().iter().map(|i| &i.cmd).collect();
        assert_eq!(rest, off_cmds);

        let day: Vec<_> = on
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::TextOnPath(t) => Some((t, i.transform)),
                _ => None,
            })
            .collect();
        assert_eq!(day.len(), 1);
        let (text, transform) = day[0];
        assert_eq!(text.text, "TUE");
        assert_eq!(text.color, ColorPalette::light().second_hand);
        // 15 s → 90°, plus 180°.
        assert_eq!(transform, horologe_engine::coords::Affine::rotation_about(surface().center(), 270.0));
    }

    #[test]
    fn pivot_is_painted_last() {
        let mut list = record(ClockConfiguration::default().with_day(true));
        let last = list.iter_in_paint_order().last().map(|i| i.cmd.clone());
        match last {
            Some(DrawCmd::Circle(c)) => {
                assert_eq!(c.center, surface().center());
                assert_eq!(c.color, ColorPalette::light().background);
            }
            other => panic!("unexpected last item {other:?}"),
        }
    }

    #[test]
    fn empty_surface_records_nothing() {
        let mut list = DrawList::new();
        ClockRenderer::default().render(
            &mut list,
            &FontSystem::new(),
            Rect::new(0.0, 0.0, 0.0, 100.0),
            &snapshot(),
            &ClockConfiguration::default(),
            &ColorPalette::light(),
        );
        assert!(list.is_empty());
    }

    // ── idempotence ───────────────────────────────────────────────────────

    #[test]
    fn same_inputs_give_identical_draw_lists() {
        for shape in ClockShape::ALL {
            let config = ClockConfiguration::default().with_shape(shape).with_day(true);
            assert_eq!(record(config), record(config));
        }
    }

    #[test]
    fn same_inputs_give_identical_frames() {
        let config = ClockConfiguration::default().with_shape(ClockShape::Dodecagon).with_day(true);
        let paint = || {
            let mut list = record(config);
            let mut frame = Frame::new(300, 300).unwrap();
            frame.clear(horologe_engine::paint::Color::from_rgb_hex(0xFFFBFE));
            Rasterizer::new().render(&mut list, &FontSystem::new(), &mut frame, 1.0);
            frame
        };
        assert_eq!(paint(), paint());
    }

    #[test]
    fn face_fill_reaches_the_frame() {
        let mut list = record(ClockConfiguration::default().with_hour_numbers(false));
        let mut frame = Frame::new(300, 300).unwrap();
        Rasterizer::new().render(&mut list, &FontSystem::new(), &mut frame, 1.0);
        // Inside the circle but away from the hands (lower-left quadrant at 6:30:15).
        let [r, g, b, a] = ColorPalette::light().background.to_srgb_u8();
        assert_eq!(frame.pixel(60, 150), Some([r, g, b, a]));
        assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 0]));
    }

    // ── numerals with a loaded font ───────────────────────────────────────

    const DEJAVU_BOLD: &[u8] = include_bytes!("../../../horologe-engine/assets/DejaVuSans-Bold.ttf");

    #[test]
    fn numerals_land_in_their_quarters() {
        let mut fonts = FontSystem::new();
        let font = fonts.load_font(DEJAVU_BOLD).unwrap();

        let mut list = DrawList::new();
        ClockRenderer::new(font).render(
            &mut list,
            &fonts,
            surface(),
            &TimeSnapshot::new(10, 8, 40, Weekday::Tue).unwrap(),
            &ClockConfiguration::default(),
            &ColorPalette::light(),
        );
        let mut frame = Frame::new(300, 300).unwrap();
        Rasterizer::new().render(&mut list, &fonts, &mut frame, 1.0);

        // Numeral ink is 0x21005D: no green, blue well above red. The face
        // (0x6750A4) and the second hand (0x1C1B1F) both carry green.
        let numeral_pixels = |xs: std::ops::Range<u32>, ys: std::ops::Range<u32>| {
            ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
                .filter_map(|(x, y)| frame.pixel(x, y))
                .filter(|&[r, g, b, _]| g < 20 && b > r.saturating_add(40))
                .count()
        };

        let top = numeral_pixels(100..200, 0..90);
        let right = numeral_pixels(210..300, 100..200);
        let bottom = numeral_pixels(100..200, 210..300);
        let left = numeral_pixels(0..90, 100..200);
        for (name, count) in [("top", top), ("right", right), ("bottom", bottom), ("left", left)] {
            assert!(count >= 20, "{name} quarter has {count} numeral pixels");
        }

        // Nothing numeral-coloured near the centre, where only hands are drawn.
        assert_eq!(numeral_pixels(120..180, 120..180), 0);
    }
}
