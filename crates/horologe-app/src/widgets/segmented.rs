use horologe_engine::coords::{Rect, Vec2};
use horologe_engine::paint::Color;
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};

/// A row of mutually exclusive buttons.
///
/// Like a radio group laid out horizontally: exactly one segment is
/// highlighted, and a click reports which segment it landed on.
///
/// # Example
/// ```rust,ignore
/// Segmented::new(["1", "2", "3", "4"])
///     .selected(0)
///     .font(font)
///     .paint(&mut list, &fonts, z, rect);
/// ```
#[derive(Debug, Clone)]
pub struct Segmented {
    labels: Vec<String>,
    selected: Option<usize>,
    font: FontId,
    font_size: f32,
    gap: f32,
    corner_radius: f32,
    idle_color: Color,
    selected_color: Color,
    label_color: Color,
    selected_label_color: Color,
}

impl Segmented {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            selected: None,
            font: FontId::DEFAULT,
            font_size: 16.0,
            gap: 4.0,
            corner_radius: 8.0,
            idle_color: Color::from_straight(0.9, 0.88, 0.93, 1.0),
            selected_color: Color::from_straight(0.4, 0.31, 0.64, 1.0),
            label_color: Color::from_straight(0.11, 0.11, 0.12, 1.0),
            selected_label_color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
        }
    }

    pub fn selected(mut self, index: usize) -> Self { self.selected = Some(index); self }
    pub fn font(mut self, v: FontId) -> Self { self.font = v; self }
    pub fn gap(mut self, v: f32) -> Self { self.gap = v; self }
    pub fn idle_color(mut self, v: Color) -> Self { self.idle_color = v; self }
    pub fn selected_color(mut self, v: Color) -> Self { self.selected_color = v; self }
    pub fn label_color(mut self, v: Color) -> Self { self.label_color = v; self }
    pub fn selected_label_color(mut self, v: Color) -> Self { self.selected_label_color = v; self }

    /// Rectangle of segment `index` when the whole control occupies `rect`.
    pub fn segment_rect(&self, rect: Rect, index: usize) -> Rect {
        let n = self.labels.len().max(1) as f32;
        let w = ((rect.size.x - self.gap * (n - 1.0)) / n).max(0.0);
        let x = rect.origin.x + index as f32 * (w + self.gap);
        Rect::new(x, rect.origin.y, w, rect.size.y)
    }

    /// Records each segment's background at `z` and its label one layer above.
    pub fn paint(&self, list: &mut DrawList, fonts: &FontSystem, z: ZIndex, rect: Rect) {
        for (i, label) in self.labels.iter().enumerate() {
            let seg = self.segment_rect(rect, i);
            let is_selected = self.selected == Some(i);

            let fill = if is_selected { self.selected_color } else { self.idle_color };
            list.push_rounded_rect(z, seg, self.corner_radius, fill);

            let size = fonts.measure_text(label, self.font, self.font_size);
            let origin = seg.center() - size / 2.0;
            let color = if is_selected { self.selected_label_color } else { self.label_color };
            list.push_text(z.above(1), label.as_str(), self.font, self.font_size, color, origin);
        }
    }

    /// Index of the segment under `pos`. Clicks in the gaps hit nothing.
    pub fn hit(&self, rect: Rect, pos: Vec2) -> Option<usize> {
        if !rect.contains(pos) {
            return None;
        }
        (0..self.labels.len()).find(|&i| self.segment_rect(rect, i).contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use horologe_engine::scene::DrawCmd;

    use super::*;

    const RECT: Rect = Rect::new(100.0, 50.0, 172.0, 32.0);

    fn four() -> Segmented {
        Segmented::new(["1", "2", "3", "4"])
    }

    // ── layout ──────────────────────────────────────────────────────────

    #[test]
    fn segments_split_width_evenly() {
        let s = four();
        let first = s.segment_rect(RECT, 0);
        let last = s.segment_rect(RECT, 3);

        assert_eq!(first.size.x, 40.0);
        assert_eq!(first.origin.x, 100.0);
        assert_eq!(last.max().x, RECT.max().x);
        assert_eq!(last.size.y, RECT.size.y);
    }

    // ── hit testing ─────────────────────────────────────────────────────

    #[test]
    fn hit_reports_segment_index() {
        let s = four();
        for i in 0..4 {
            let c = s.segment_rect(RECT, i).center();
            assert_eq!(s.hit(RECT, c), Some(i));
        }
    }

    #[test]
    fn gaps_and_outside_miss() {
        let s = four();
        // Between segment 0 (ends at 140) and segment 1 (starts at 144).
        assert_eq!(s.hit(RECT, Vec2::new(142.0, 60.0)), None);
        assert_eq!(s.hit(RECT, Vec2::new(50.0, 60.0)), None);
        assert_eq!(s.hit(RECT, Vec2::new(120.0, 90.0)), None);
    }

    // ── painting ────────────────────────────────────────────────────────

    #[test]
    fn paints_background_and_label_per_segment() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        four().selected(2).paint(&mut list, &fonts, ZIndex(0), RECT);

        let rects = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::RoundedRect(_))).count();
        let texts = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Text(_))).count();
        assert_eq!(rects, 4);
        assert_eq!(texts, 4);
    }

    #[test]
    fn only_selected_segment_is_highlighted() {
        let hi = Color::from_rgb_hex(0x123456);
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        four().selected(1).selected_color(hi).paint(&mut list, &fonts, ZIndex(0), RECT);

        let highlighted: Vec<Rect> = list
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::RoundedRect(r) if r.color == hi => Some(r.rect),
                _ => None,
            })
            .collect();
        assert_eq!(highlighted, vec![four().segment_rect(RECT, 1)]);
    }
}
