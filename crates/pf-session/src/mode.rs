//! Running/menu mode switching
//!
//! Entering the menu is a single synchronous call. Nothing else runs
//! between the memory card flush at the start and the return to
//! [`ModeState::Running`] at the end.

use std::time::Instant;

use pf_core::{Config, EmulationCore, PluginSet, SaveStateManager};
use pf_input::{EventSource, PadButtons};
use pf_video::FramePresenter;

use crate::context::{ModeState, SessionContext};
use crate::stats::FrameStats;

/// What the user chose in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Resume,
    Quit,
}

/// What the menu may touch while it owns the screen
pub struct MenuSession<'a> {
    pub mode: ModeState,
    pub config: &'a mut Config,
    pub save_states: &'a SaveStateManager,
    pub core: &'a mut dyn EmulationCore,
    pub presenter: &'a mut FramePresenter,
    pub events: &'a mut dyn EventSource,
}

/// The in-game menu. Modal: owns input and display until it returns.
pub trait Menu {
    fn run(&mut self, session: &mut MenuSession<'_>) -> MenuAction;
}

/// Everything a mode transition acts on
pub struct Transition<'a> {
    pub ctx: &'a mut SessionContext,
    pub core: &'a mut dyn EmulationCore,
    pub plugins: &'a mut PluginSet,
    pub presenter: &'a mut FramePresenter,
    pub events: &'a mut dyn EventSource,
    pub stats: &'a mut FrameStats,
}

/// Drives the Running -> Menu -> Running round trip
pub struct ModeController {
    menu: Box<dyn Menu>,
}

impl ModeController {
    pub fn new(menu: Box<dyn Menu>) -> Self {
        Self { menu }
    }

    /// Suspend emulation, run the menu, and come back to a clean screen.
    ///
    /// `release` names the buttons of the chord that opened the menu; they
    /// are forced released so they don't stay stuck after returning.
    pub fn enter_menu(&mut self, t: Transition<'_>, release: PadButtons) -> MenuAction {
        let Transition {
            ctx,
            core,
            plugins,
            presenter,
            events,
            stats,
        } = t;

        // Memory cards opened for writing must hit the disk first
        core.sync_memory_cards();

        ctx.mode = ModeState::Menu;
        tracing::debug!("Entering menu");

        core.pause();
        plugins.pause_all();
        stats.pause(Instant::now());

        let action = {
            let mut session = MenuSession {
                mode: ctx.mode,
                config: &mut ctx.config,
                save_states: &ctx.save_states,
                core: &mut *core,
                presenter: &mut *presenter,
                events,
            };
            self.menu.run(&mut session)
        };

        core.resume();
        plugins.resume_all();
        stats.resume(Instant::now());

        ctx.pads[0].release(release);

        presenter.purge();

        ctx.mode = ModeState::Running;
        tracing::debug!("Leaving menu ({:?})", action);

        action
    }
}
