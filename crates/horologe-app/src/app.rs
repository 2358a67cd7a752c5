use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use horologe_clock::{ClockRenderer, DEFAULT_FACE_DIAMETER, TimeSnapshot, TimeSource, WallClock};
use horologe_engine::coords::{Vec2, Viewport};
use horologe_engine::core::{App, AppControl, FrameCtx, IdleAction};
use horologe_engine::input::{InputEvent, Key, KeyState};
use horologe_engine::paint::Color;
use horologe_engine::render::{Frame, Presenter, Rasterizer};
use horologe_engine::scene::{DrawList, ZIndex};
use horologe_engine::text::{FontId, FontSystem};
use horologe_engine::window::CursorIcon;

use crate::settings::{self, SettingsAction, SettingsLayout, SettingsState};

/// Startup options for [`ClockApp`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AppConfig {
    /// Theme the screen opens with.
    pub dark_theme: bool,
    pub face_diameter: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { dark_theme: false, face_diameter: DEFAULT_FACE_DIAMETER }
    }
}

/// Clock plus settings rows, redrawn once per tick and on input.
pub struct ClockApp<C: WallClock = horologe_clock::SystemClock> {
    source: TimeSource<C>,
    snapshot: Rc<Cell<TimeSnapshot>>,

    settings: SettingsState,
    face_diameter: f32,

    fonts: FontSystem,
    font: FontId,
    clock: ClockRenderer,

    list: DrawList,
    rasterizer: Rasterizer,
    presenter: Presenter,
    frame: Option<Frame>,
}

impl ClockApp {
    /// Starts ticking from the system clock immediately.
    pub fn new(config: AppConfig, fonts: FontSystem, font: FontId) -> Self {
        Self::with_source(config, fonts, font, TimeSource::new(), Instant::now())
    }
}

impl<C: WallClock> ClockApp<C> {
    pub fn with_source(
        config: AppConfig,
        fonts: FontSystem,
        font: FontId,
        mut source: TimeSource<C>,
        now: Instant,
    ) -> Self {
        let snapshot = Rc::new(Cell::new(source.latest()));
        let sink = Rc::clone(&snapshot);
        source.start_at(now, move |s| sink.set(s));

        Self {
            source,
            snapshot,
            settings: SettingsState::new(config.dark_theme),
            face_diameter: config.face_diameter,
            fonts,
            font,
            clock: ClockRenderer::new(font).with_base_z(ZIndex(0)),
            list: DrawList::new(),
            rasterizer: Rasterizer::new(),
            presenter: Presenter::new(),
            frame: None,
        }
    }

    /// Applies key presses in arrival order. Returns `false` when the app should exit.
    pub fn handle_keys<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) -> bool {
        for ev in events {
            let InputEvent::Key { key, state: KeyState::Pressed, repeat: false } = ev else {
                continue;
            };
            if *key == Key::Escape {
                log::info!("escape pressed, exiting");
                return false;
            }
            if let Some(action) = SettingsAction::for_key(*key) {
                self.settings.apply(action);
            }
        }
        true
    }

    /// Routes primary-button clicks through the settings layout.
    pub fn handle_clicks(&mut self, layout: &SettingsLayout, clicks: &[(f32, f32)]) {
        for &(x, y) in clicks {
            if let Some(action) = layout.hit_test(Vec2::new(x, y)) {
                self.settings.apply(action);
            }
        }
    }

    /// Re-records the whole screen from the current settings and snapshot.
    pub fn record(&mut self, layout: &SettingsLayout) {
        let config = self.settings.clock_configuration(self.face_diameter);
        let palette = self.settings.palette();
        let theme = self.settings.screen_theme();
        let snapshot = self.snapshot.get();

        self.list.clear();
        self.clock.render(&mut self.list, &self.fonts, layout.clock, &snapshot, &config, &palette);
        settings::record(&mut self.list, &self.fonts, self.font, layout, &self.settings, &theme);
    }
}

/// Rasterizes `list` into the frame in `slot`, (re)allocating it for `viewport` at `scale`.
fn rasterize<'f>(
    slot: &'f mut Option<Frame>,
    rasterizer: &mut Rasterizer,
    list: &mut DrawList,
    fonts: &FontSystem,
    background: Color,
    viewport: Viewport,
    scale: f32,
) -> Option<&'f Frame> {
    let (w, h) = viewport.physical_size(scale);
    match slot.as_mut() {
        Some(frame) => {
            if frame.ensure_size(w, h) {
                log::debug!("frame resized to {w}x{h}");
            }
        }
        None => *slot = Some(Frame::new(w, h)?),
    }

    let frame = slot.as_mut()?;
    frame.clear(background);
    rasterizer.render(list, fonts, frame, scale);
    Some(frame)
}

impl<C: WallClock> App for ClockApp<C> {
    fn on_idle(&mut self, now: Instant) -> IdleAction {
        let ticked = self.source.poll(now);
        IdleAction::sleep_until(self.source.next_deadline()).with_redraw(ticked)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.handle_keys(&ctx.input_frame.events) {
            return AppControl::Exit;
        }

        let viewport = ctx.window.logical_size();
        let layout = SettingsLayout::new(viewport, self.face_diameter);
        self.handle_clicks(&layout, &ctx.input_frame.clicks);

        let hovering = ctx
            .input
            .pointer_pos
            .is_some_and(|(x, y)| layout.is_over_control(Vec2::new(x, y)));
        ctx.window.set_cursor(if hovering { CursorIcon::Pointer } else { CursorIcon::Default });

        self.record(&layout);

        let scale = ctx.window.scale_factor();
        let clear = self.settings.screen_theme().background;

        let Self { frame, rasterizer, list, fonts, presenter, .. } = self;
        let Some(frame) = rasterize(frame, rasterizer, list, fonts, clear, viewport, scale) else {
            log::warn!("empty viewport {viewport:?}, skipping frame");
            return AppControl::Continue;
        };

        ctx.render(clear, |rctx, target| presenter.present(rctx, target, frame))
    }
}
