use tiny_skia::{PathBuilder, Pixmap, Transform};

use crate::scene::LineCmd;

use super::convert;

pub(super) fn paint(pixmap: &mut Pixmap, cmd: &LineCmd, ts: Transform) {
    if !(cmd.stroke.width > 0.0) {
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(cmd.from.x, cmd.from.y);
    pb.line_to(cmd.to.x, cmd.to.y);
    let Some(path) = pb.finish() else { return };

    let stroke = tiny_skia::Stroke {
        width: cmd.stroke.width,
        line_cap: convert::line_cap(cmd.stroke.cap),
        ..tiny_skia::Stroke::default()
    };
    pixmap.stroke_path(&path, &convert::solid(cmd.color), &stroke, ts, None);
}
