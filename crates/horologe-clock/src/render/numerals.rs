use horologe_engine::coords::Vec2;
use horologe_engine::paint::Color;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};

use super::metrics::FaceMetrics;

/// Numeral size as a fraction of the face side.
const SIZE_OF_SIDE: f32 = 0.2;

/// Draws "12", "3", "6" and "9", each inset by a quarter of its own extent.
pub(crate) fn draw(
    list: &mut DrawList,
    z: ZIndex,
    m: &FaceMetrics,
    fonts: &FontSystem,
    font: FontId,
    color: Color,
) {
    let size = m.side * SIZE_OF_SIDE;
    let (side, cx, cy) = (m.side, m.half, m.half);

    for label in ["12", "3", "6", "9"] {
        let ext = fonts.measure_text(label, font, size);
        let (w, h) = (ext.x, ext.y);
        let (x, y) = match label {
            "12" => (cx - w / 2.0, h / 4.0),
            "3" => (side - w - w / 4.0, cy - h / 2.0),
            "6" => (cx - w / 2.0, side - h - h / 4.0),
            _ => (w / 4.0, cy - h / 2.0),
        };
        list.push_text(z, label, font, size, color, m.at(x, y));
    }
}

#[cfg(test)]
mod tests {
    use horologe_engine::coords::Rect;
    use horologe_engine::scene::DrawCmd;

    use super::*;

    fn origins(list: &DrawList) -> Vec<(String, Vec2)> {
        list.items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Text(t) => Some((t.text.clone(), t.origin)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn numerals_sit_inset_on_their_axes() {
        let m = FaceMetrics::new(Rect::new(0.0, 0.0, 300.0, 300.0), 300.0);
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        draw(&mut list, ZIndex(1), &m, &fonts, FontId::DEFAULT, Color::transparent());

        // Without a font, width = chars * 0.6 * size and height = 1.2 * size; size = 60.
        let expected = [
            ("12", Vec2::new(150.0 - 36.0, 18.0)),
            ("3", Vec2::new(300.0 - 36.0 - 9.0, 150.0 - 36.0)),
            ("6", Vec2::new(150.0 - 18.0, 300.0 - 72.0 - 18.0)),
            ("9", Vec2::new(9.0, 150.0 - 36.0)),
        ];

        let got = origins(&list);
        assert_eq!(got.len(), 4);
        for ((text, at), (want_text, want_at)) in got.iter().zip(expected) {
            assert_eq!(text, want_text);
            assert!(at.distance(want_at) < 1e-3, "{text}: {at:?} != {want_at:?}");
        }
    }

    #[test]
    fn numerals_follow_the_face_offset() {
        let m = FaceMetrics::new(Rect::new(50.0, 20.0, 300.0, 300.0), 300.0);
        let mut list = DrawList::new();
        draw(&mut list, ZIndex(1), &m, &FontSystem::new(), FontId::DEFAULT, Color::transparent());
        let nine = &origins(&list)[3];
        assert!(nine.1.distance(Vec2::new(59.0, 134.0)) < 1e-3);
    }
}
