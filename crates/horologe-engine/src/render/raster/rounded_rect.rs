use tiny_skia::{PathBuilder, Pixmap, Transform};

use crate::scene::RoundedRectCmd;

use super::convert;

/// Cubic handle length for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

pub(super) fn paint(pixmap: &mut Pixmap, cmd: &RoundedRectCmd, ts: Transform) {
    let r = cmd.rect;
    if r.is_empty() || !r.is_finite() {
        return;
    }

    let rad = cmd.effective_radius();
    let path = if rad <= 0.0 {
        tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)
            .map(PathBuilder::from_rect)
    } else {
        rounded(r.origin.x, r.origin.y, r.size.x, r.size.y, rad)
    };

    if let Some(path) = path {
        pixmap.fill_path(&path, &convert::solid(cmd.color), convert::FILL, ts, None);
    }
}

fn rounded(x: f32, y: f32, w: f32, h: f32, r: f32) -> Option<tiny_skia::Path> {
    let k = r * KAPPA;
    let (x1, y1) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x1 - r, y);
    pb.cubic_to(x1 - r + k, y, x1, y + r - k, x1, y + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x + r, y1);
    pb.cubic_to(x + r - k, y1, x, y1 - r + k, x, y1 - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}
