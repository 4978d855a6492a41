//! Session bootstrap
//!
//! Brings the frontend up in a fixed order: directories, config file,
//! command line, display, content selection, core, plugins, support layer,
//! reset, content, execute. Fatal failures return early; once the command
//! line is accepted, everything set up is torn down by the [`Session`]
//! guard and the configuration is saved.

use std::path::{Path, PathBuf};
use std::time::Instant;

use pf_core::paths::is_openable_dir;
use pf_core::{
    Config, ConfigStore, DirectoryLayout, EmulationCore, FrontendError, LoadOutcome, PluginProvider,
    PluginSet, Result,
};
use pf_input::{EventSource, InputMapper, KeyTable};
use pf_video::{BufferingMode, FramePresenter, VideoDriver, VideoMode};

use crate::cli::CliOverlay;
use crate::context::SessionContext;
use crate::frontend::Frontend;
use crate::mode::{Menu, ModeController};
use crate::select::ContentSelector;
use crate::stats::FrameStats;

/// Startup settings that are not part of the persisted configuration
pub struct BootOptions {
    /// Directory layout; resolved from the environment when `None`
    pub layout: Option<DirectoryLayout>,
    /// Command line arguments after the program name
    pub args: Vec<String>,
    pub key_table: KeyTable,
    pub buffering: BufferingMode,
}

impl Default for BootOptions {
    fn default() -> Self {
        Self {
            layout: None,
            args: Vec::new(),
            key_table: KeyTable::default(),
            buffering: BufferingMode::default(),
        }
    }
}

/// Externally supplied parts of a session
pub struct Collaborators {
    pub video: Box<dyn VideoDriver>,
    pub events: Box<dyn EventSource>,
    pub core: Box<dyn EmulationCore>,
    pub plugins: Box<dyn PluginProvider>,
    pub selector: Box<dyn ContentSelector>,
    pub menu: Box<dyn Menu>,
}

/// Summary of a finished session
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub content_id: Option<String>,
    pub disc: Option<PathBuf>,
    pub executable: Option<PathBuf>,
    /// Whether control was handed to the core
    pub executed: bool,
    pub frames_presented: u64,
    pub config: Config,
}

/// Everything that exists once the command line has been accepted.
///
/// Dropping it runs the exit hook: release plugins and shut the core down
/// if it was initialized, then save the configuration. The display is
/// unlocked before that by the presenter, which is created after the
/// session and therefore dropped first.
struct Session {
    store: ConfigStore,
    ctx: SessionContext,
    core: Box<dyn EmulationCore>,
    core_initialized: bool,
    plugins: PluginSet,
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.core_initialized {
            self.plugins.release();
            self.core.shutdown();
        }

        if self.store.save(&self.ctx.config) {
            tracing::debug!("Configuration saved to {}", self.store.path().display());
        }
    }
}

/// Top level startup sequence
pub struct SessionBootstrap {
    options: BootOptions,
}

impl SessionBootstrap {
    pub fn new(options: BootOptions) -> Self {
        Self { options }
    }

    /// Run a session to completion
    pub fn run(self, collaborators: Collaborators) -> Result<SessionReport> {
        let BootOptions {
            layout,
            args,
            key_table,
            buffering,
        } = self.options;
        let Collaborators {
            mut video,
            events,
            core,
            plugins: mut provider,
            mut selector,
            menu,
        } = collaborators;

        // Directory layout
        let layout = layout.unwrap_or_else(DirectoryLayout::resolve);
        let created = layout.create_all();
        tracing::debug!("{} of 5 frontend directories present", created);

        // Config file
        let store = ConfigStore::for_layout(&layout);
        let mut config = Config::defaults_for(&layout);
        match store.load(&mut config) {
            LoadOutcome::Loaded { applied, ignored } => {
                tracing::info!("Loaded {} settings ({} ignored)", applied, ignored)
            }
            LoadOutcome::Missing => tracing::info!("No config file, using defaults"),
            LoadOutcome::VersionMismatch { .. } | LoadOutcome::BadHeader => {
                tracing::warn!("Config file not usable, using defaults")
            }
        }

        // Last directory must still be there
        if !is_openable_dir(Path::new(&config.paths.last_dir)) {
            tracing::warn!(
                "Last directory {:?} can't be opened, using {}",
                config.paths.last_dir,
                layout.home.display()
            );
            config.set_last_dir(&layout.home);
        }

        // Command line
        let cli = CliOverlay::parse(&args)?;
        cli.apply(&mut config);

        let mut session = Session {
            store,
            ctx: SessionContext::new(config, layout),
            core,
            core_initialized: false,
            plugins: PluginSet::new(),
        };
        session.ctx.content.disc = cli.iso().map(PathBuf::from);
        session.ctx.content.executable = cli.file().map(PathBuf::from);

        // Display
        let surface = video
            .set_video_mode(VideoMode::PSX, buffering)
            .map_err(|e| FrontendError::Display(e.to_string()))?;
        let mut presenter = FramePresenter::new(surface);

        // Content selection
        if !cli.has_content() {
            let choice = selector.select(&session.ctx.config, &mut presenter);
            let Some(path) = choice else {
                return Err(FrontendError::NoContent);
            };
            tracing::info!("Selected {}", path.display());
            session.ctx.remember_dir_of(&path);
            session.ctx.content.disc = Some(path);
        }

        // Core and plugins
        session
            .core
            .init(&session.ctx.config)
            .map_err(FrontendError::CoreInit)?;
        session.core_initialized = true;

        session.plugins = PluginSet::load(provider.as_mut(), &session.ctx.config)
            .map_err(|(kind, source)| FrontendError::PluginLoad { kind, source })?;

        // Support layer
        let input = InputMapper::new(key_table);
        let stats = FrameStats::new(session.ctx.config.perfmon.console_output, Instant::now());
        let modes = ModeController::new(menu);

        session.core.reset();

        let content_id = mount_content(&mut session.ctx, session.core.as_mut());

        let executed = if !session.ctx.content.is_empty() || !session.ctx.config.core.hle {
            if session.ctx.content.is_empty() {
                tracing::info!("Running BIOS");
            }
            let mut frontend = Frontend::new(
                &mut session.ctx,
                &mut presenter,
                &mut session.plugins,
                input,
                events,
                stats,
                modes,
            );
            session
                .core
                .execute(&mut frontend)
                .map_err(FrontendError::Execution)?;
            true
        } else {
            tracing::info!("Nothing to run");
            false
        };

        Ok(SessionReport {
            content_id,
            disc: session.ctx.content.disc.clone(),
            executable: session.ctx.content.executable.clone(),
            executed,
            frames_presented: presenter.flip_count(),
            config: session.ctx.config.clone(),
        })
    }
}

/// Check and mount the disc, then load the executable. Content that fails
/// is dropped from the session and the run continues without it.
///
/// Returns the content identifier save states are filed under.
fn mount_content(ctx: &mut SessionContext, core: &mut dyn EmulationCore) -> Option<String> {
    let mut content_id = None;

    if let Some(disc) = ctx.content.disc.clone() {
        match core.check_disc(&disc) {
            Err(e) => {
                tracing::warn!("Failed checking ISO image {}: {}", disc.display(), e);
                ctx.content.disc = None;
            }
            Ok(id) => {
                tracing::info!("Running ISO image: {}", disc.display());
                match core.mount_disc(&disc) {
                    Ok(()) => content_id = Some(id),
                    Err(e) => {
                        tracing::warn!("Failed loading ISO image {}: {}", disc.display(), e);
                        ctx.content.disc = None;
                    }
                }
            }
        }
    }

    if let Some(exe) = ctx.content.executable.clone() {
        match core.load_executable(&exe) {
            Ok(()) => {
                tracing::info!("Running executable: {}", exe.display());
                if content_id.is_none() {
                    content_id = exe.file_stem().map(|s| s.to_string_lossy().into_owned());
                }
            }
            Err(e) => {
                tracing::warn!("Failed loading executable {}: {}", exe.display(), e);
                ctx.content.executable = None;
            }
        }
    }

    match content_id.as_deref().map(|id| ctx.save_states.bind_content(id)) {
        Some(Err(e)) => {
            tracing::warn!("Save states disabled: {}", e);
            None
        }
        Some(Ok(())) => content_id,
        None => {
            ctx.save_states.unbind();
            None
        }
    }
}
