//! psxfront - PlayStation emulator frontend
//!
//! Main entry point. Runs a session against the built-in null core; the
//! display is an SDL window when built with the `sdl` feature and an
//! in-memory surface otherwise.

#[cfg(feature = "sdl")]
mod sdl;

use anyhow::{Context, Result};
use pf_input::KeyProfile;
use pf_session::{
    BootOptions, Collaborators, FixedSelection, NullCore, NullMenu, NullProvider, SessionBootstrap,
};
use pf_video::BufferingMode;

/// Selects the key table (`desktop` or `handheld`)
const KEY_PROFILE_VAR: &str = "PSXFRONT_KEY_PROFILE";

/// Stops the null core after this many frames
const FRAME_BUDGET_VAR: &str = "PSXFRONT_HEADLESS_FRAMES";

/// Frames run headless when no budget is set
#[cfg(not(feature = "sdl"))]
const DEFAULT_HEADLESS_FRAMES: u64 = 300;

fn main() -> Result<()> {
    pf_core::logging::init();

    tracing::info!("Starting psxfront {}", env!("CARGO_PKG_VERSION"));

    let profile = std::env::var(KEY_PROFILE_VAR)
        .map(|name| KeyProfile::from_name(&name))
        .unwrap_or_default();
    let options = BootOptions {
        layout: None,
        args: std::env::args().skip(1).collect(),
        key_table: profile.table(),
        buffering: BufferingMode::Double,
    };

    let collaborators = collaborators()?;

    match SessionBootstrap::new(options).run(collaborators) {
        Ok(report) => {
            tracing::info!(
                "Session finished after {} frames{}",
                report.frames_presented,
                report
                    .content_id
                    .map(|id| format!(" ({})", id))
                    .unwrap_or_default()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(i32::from(e.exit_code()));
        }
    }
}

fn frame_budget(default: Option<u64>) -> Result<Option<u64>> {
    match std::env::var(FRAME_BUDGET_VAR) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("Invalid {} value {:?}", FRAME_BUDGET_VAR, value)),
        Err(_) => Ok(default),
    }
}

#[cfg(feature = "sdl")]
fn collaborators() -> Result<Collaborators> {
    let (video, events) = sdl::backend();
    Ok(Collaborators {
        video: Box::new(video),
        events: Box::new(events),
        core: Box::new(NullCore::new(frame_budget(None)?)),
        plugins: Box::new(NullProvider),
        selector: Box::new(FixedSelection::none()),
        menu: Box::new(NullMenu::default()),
    })
}

#[cfg(not(feature = "sdl"))]
fn collaborators() -> Result<Collaborators> {
    use pf_input::ScriptedInput;
    use pf_video::HeadlessVideo;

    Ok(Collaborators {
        video: Box::new(HeadlessVideo::new()),
        events: Box::new(ScriptedInput::new()),
        core: Box::new(NullCore::new(frame_budget(Some(DEFAULT_HEADLESS_FRAMES))?)),
        plugins: Box::new(NullProvider),
        selector: Box::new(FixedSelection::none()),
        menu: Box::new(NullMenu::default()),
    })
}
