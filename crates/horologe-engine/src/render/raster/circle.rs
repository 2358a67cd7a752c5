use tiny_skia::{PathBuilder, Pixmap, Transform};

use crate::scene::CircleCmd;

use super::convert;

pub(super) fn paint(pixmap: &mut Pixmap, cmd: &CircleCmd, ts: Transform) {
    if !(cmd.radius > 0.0) || !cmd.center.is_finite() {
        return;
    }
    let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, cmd.radius) else {
        return;
    };
    pixmap.fill_path(&path, &convert::solid(cmd.color), convert::FILL, ts, None);
}
