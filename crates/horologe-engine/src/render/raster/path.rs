use tiny_skia::{Pixmap, Transform};

use crate::scene::PathCmd;

use super::convert;

pub(super) fn paint(pixmap: &mut Pixmap, cmd: &PathCmd, ts: Transform) {
    let Some(path) = convert::path(&cmd.path) else {
        log::trace!("Rasterizer: degenerate path skipped");
        return;
    };
    pixmap.fill_path(&path, &convert::solid(cmd.color), convert::FILL, ts, None);
}
