//! The frontend side of the per-frame callbacks

use std::time::Instant;

use pf_core::{EmulationCore, FrameHost, HostControl, PluginSet};
use pf_input::{EventSource, InputMapper};
use pf_video::FramePresenter;

use crate::context::{ModeState, SessionContext};
use crate::mode::{MenuAction, ModeController, Transition};
use crate::stats::FrameStats;

/// Where the FPS overlay is drawn
const OVERLAY_X: usize = 5;
const OVERLAY_Y: usize = 5;

/// Services a running core: input, pads, presentation and the menu
pub struct Frontend<'a> {
    ctx: &'a mut SessionContext,
    presenter: &'a mut FramePresenter,
    plugins: &'a mut PluginSet,
    input: InputMapper,
    events: Box<dyn EventSource>,
    stats: FrameStats,
    modes: ModeController,
}

impl<'a> Frontend<'a> {
    pub fn new(
        ctx: &'a mut SessionContext,
        presenter: &'a mut FramePresenter,
        plugins: &'a mut PluginSet,
        input: InputMapper,
        events: Box<dyn EventSource>,
        stats: FrameStats,
        modes: ModeController,
    ) -> Self {
        Self {
            ctx,
            presenter,
            plugins,
            input,
            events,
            stats,
            modes,
        }
    }

    pub fn context(&self) -> &SessionContext {
        self.ctx
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn overlay_enabled(&self) -> bool {
        self.ctx.config.gpu.show_fps
    }
}

impl FrameHost for Frontend<'_> {
    fn update_input(&mut self, core: &mut dyn EmulationCore) -> HostControl {
        let running = self.ctx.mode == ModeState::Running;
        let report = self.input.poll(self.events.as_mut(), running);
        self.ctx.pads = report.pads;

        if report.toggle_overlay {
            let gpu = &mut self.ctx.config.gpu;
            gpu.show_fps = !gpu.show_fps;
            tracing::debug!("FPS overlay {}", if gpu.show_fps { "on" } else { "off" });
        }

        if report.quit {
            tracing::info!("Quit requested");
            return HostControl::Quit;
        }

        if report.menu_requested {
            let release = self.input.menu_release_mask();
            let action = self.modes.enter_menu(
                Transition {
                    ctx: &mut *self.ctx,
                    core,
                    plugins: &mut *self.plugins,
                    presenter: &mut *self.presenter,
                    events: self.events.as_mut(),
                    stats: &mut self.stats,
                },
                release,
            );

            if action == MenuAction::Quit {
                tracing::info!("Quit from menu");
                return HostControl::Quit;
            }
        }

        HostControl::Continue
    }

    fn pad_read(&self, port: usize) -> u16 {
        self.ctx.pad_read(port)
    }

    fn present_frame(&mut self, pixels: &[u16], width: usize, height: usize) {
        self.presenter.blit(pixels, width, height);
        self.flip();
    }

    fn flip(&mut self) {
        if self.ctx.mode == ModeState::Running && self.ctx.config.gpu.show_fps {
            self.presenter
                .overlay_text(OVERLAY_X, OVERLAY_Y, self.stats.message());
        }
        self.presenter.flip();
        self.stats.frame_presented(Instant::now());
    }
}
