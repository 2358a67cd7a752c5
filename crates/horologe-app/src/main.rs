mod app;
mod settings;
mod theme;
mod widgets;

use anyhow::Result;

use horologe_engine::device::GpuInit;
use horologe_engine::logging::{init_logging, LoggingConfig};
use horologe_engine::text::{FontId, FontSystem};
use horologe_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::app::{AppConfig, ClockApp};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    let font = match load_font() {
        Some(bytes) => fonts.load_font(&bytes).unwrap_or_else(|err| {
            log::warn!("{err}; text will not be drawn");
            FontId::DEFAULT
        }),
        None => {
            log::warn!("no system font found; text will not be drawn");
            FontId::DEFAULT
        }
    };

    let config = RuntimeConfig {
        title: "Horologe".to_string(),
        min_size: Some(LogicalSize::new(240.0, 480.0)),
        ..RuntimeConfig::default()
    };

    let app = ClockApp::new(AppConfig::default(), fonts, font);
    Runtime::run(config, GpuInit::default(), app)
}

/// Bold faces first: the numerals and day label read better heavy.
const FONT_CANDIDATES: [&str; 10] = [
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn load_font() -> Option<Vec<u8>> {
    FONT_CANDIDATES.iter().find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        if is_bold(p) {
            log::info!("font: {p}");
        } else {
            log::warn!("no bold font found, numerals will use regular weight: {p}");
        }
        Some(bytes)
    })
}

fn is_bold(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|name| name.contains("Bold"))
}
