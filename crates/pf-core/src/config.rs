//! Configuration system for psxfront
//!
//! Settings are resolved in a fixed order: compiled defaults, then the
//! config file, then command line overrides. The file is a versioned
//! `key value` text format:
//!
//! ```text
//! CONFIG_VERSION 1
//! Xa 0
//! FrameSkip 0
//! LastDir /home/player/games
//! ```
//!
//! A file whose first line is not `CONFIG_VERSION` with the compiled version
//! is ignored entirely. Unknown keys are skipped. Out-of-range numbers are
//! replaced by the field's default at load time.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::paths::DirectoryLayout;

/// Version tag written on the first line of the config file
pub const CONFIG_VERSION: i32 = 1;

/// Maximum length in bytes of path-like string settings
pub const PATH_CAPACITY: usize = 255;

/// SPU updates per frame, as a power of two (0 = once per frame)
pub const SPU_UPDATE_FREQ_MIN: u8 = 0;
pub const SPU_UPDATE_FREQ_MAX: u8 = 5;
pub const SPU_UPDATE_FREQ_DEFAULT: u8 = SPU_UPDATE_FREQ_MIN;

/// Forced XA updates (0 = off, 1 = auto, n = 2^(n-1) per frame)
pub const FORCED_XA_UPDATES_MIN: u8 = 0;
pub const FORCED_XA_UPDATES_MAX: u8 = 7;
pub const FORCED_XA_UPDATES_DEFAULT: u8 = 1;

/// Frame skip (-1 = auto, 0 = off)
pub const FRAMESKIP_MIN: i8 = -1;
pub const FRAMESKIP_MAX: i8 = 3;
pub const FRAMESKIP_OFF: i8 = 0;

/// SPU master volume range
pub const SPU_VOLUME_MAX: u16 = 1024;

/// Recompiler cycle multiplier (fixed point, 0x100 = 1.0)
pub const CYCLE_MULTIPLIER_MIN: u16 = 0x001;
pub const CYCLE_MULTIPLIER_MAX: u16 = 0xfff;
pub const CYCLE_MULTIPLIER_DEFAULT: u16 = 0x200;

/// Default BIOS image name
pub const DEFAULT_BIOS: &str = "scph1001.bin";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub core: CoreConfig,
    pub spu: SpuConfig,
    pub gpu: GpuConfig,
    pub paths: PathConfig,
    pub perfmon: PerfmonConfig,
}

/// Emulation core settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// XA audio disabled
    pub xa_disabled: bool,
    /// Black & white MDEC only
    pub mdec_bw: bool,
    /// Autodetect region from the disc
    pub psx_auto: bool,
    pub psx_type: PsxType,
    /// CD audio disabled
    pub cdda_disabled: bool,
    /// High-level BIOS emulation instead of running the BIOS image
    pub hle: bool,
    /// Show the BIOS logo sequence (ignored under HLE)
    pub slow_boot: bool,
    /// Root counter fix (Parasite Eve 2, Vandal Hearts 1/2)
    pub rcnt_fix: bool,
    /// VSync workaround (InuYasha Sengoku Battle)
    pub vsync_wa: bool,
    pub cpu: CpuCore,
    pub cycle_multiplier: u16,
}

/// CPU core selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CpuCore {
    Recompiler,
    #[default]
    Interpreter,
}

impl CpuCore {
    fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Recompiler),
            1 => Some(Self::Interpreter),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Recompiler => 0,
            Self::Interpreter => 1,
        }
    }
}

/// Video region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PsxType {
    #[default]
    Ntsc,
    Pal,
}

impl PsxType {
    fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Ntsc),
            1 => Some(Self::Pal),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Ntsc => 0,
            Self::Pal => 1,
        }
    }
}

/// Sound processor settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpuConfig {
    /// SPU IRQ always on
    pub irq_always: bool,
    /// Block the emulator when the audio buffer is full
    pub sync_audio: bool,
    pub update_freq: u8,
    pub forced_xa_updates: u8,
    pub interpolation: Interpolation,
    pub reverb: bool,
    pub volume: u16,
    /// SPU plugin disabled entirely (`-silent`)
    pub disabled: bool,
    pub xa_pitch: bool,
    pub threaded: bool,
    pub fixed_updates: bool,
    pub tempo: bool,
}

/// SPU sample interpolation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolation {
    #[default]
    None,
    Simple,
    Gaussian,
    Cubic,
}

impl Interpolation {
    /// Parse a command line name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "simple" => Some(Self::Simple),
            "gaussian" => Some(Self::Gaussian),
            "cubic" => Some(Self::Cubic),
            _ => None,
        }
    }

    fn from_index(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Simple),
            2 => Some(Self::Gaussian),
            3 => Some(Self::Cubic),
            _ => None,
        }
    }

    fn index(self) -> u8 {
        self as u8
    }
}

/// GPU and presentation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuConfig {
    /// Draw the FPS overlay
    pub show_fps: bool,
    pub frame_limit: bool,
    pub frame_skip: i8,
    /// Render only every other line
    pub interlace: bool,
    pub pixel_skip: bool,
    pub lighting: bool,
    pub fast_lighting: bool,
    pub blending: bool,
    pub dithering: bool,
    pub progressive_interlace: bool,
}

/// Path settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathConfig {
    /// Directory the content selector opens first
    pub last_dir: String,
    pub bios_dir: String,
    /// BIOS image name inside `bios_dir`
    pub bios: String,
    pub memory_card1: PathBuf,
    pub memory_card2: PathBuf,
    pub patches_dir: PathBuf,
}

/// Performance monitor settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerfmonConfig {
    pub console_output: bool,
    pub detailed_stats: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            xa_disabled: false,
            mdec_bw: false,
            psx_auto: true,
            psx_type: PsxType::default(),
            cdda_disabled: false,
            hle: true,
            slow_boot: false,
            rcnt_fix: false,
            vsync_wa: false,
            cpu: CpuCore::default(),
            cycle_multiplier: CYCLE_MULTIPLIER_DEFAULT,
        }
    }
}

impl Default for SpuConfig {
    fn default() -> Self {
        Self {
            irq_always: false,
            sync_audio: false,
            update_freq: SPU_UPDATE_FREQ_DEFAULT,
            forced_xa_updates: FORCED_XA_UPDATES_DEFAULT,
            interpolation: Interpolation::default(),
            reverb: false,
            volume: SPU_VOLUME_MAX,
            disabled: false,
            xa_pitch: false,
            threaded: false,
            fixed_updates: true,
            tempo: true,
        }
    }
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            show_fps: false,
            frame_limit: true,
            frame_skip: FRAMESKIP_OFF,
            interlace: false,
            pixel_skip: true,
            lighting: true,
            fast_lighting: true,
            blending: true,
            dithering: false,
            progressive_interlace: false,
        }
    }
}

/// Accept a string setting only if it is non-empty and fits the capacity
pub fn bounded(value: &str) -> Option<String> {
    if value.is_empty() || value.len() > PATH_CAPACITY {
        None
    } else {
        Some(value.to_string())
    }
}

impl Config {
    /// Compiled defaults with paths filled in from the directory layout
    pub fn defaults_for(layout: &DirectoryLayout) -> Self {
        let mut config = Self::default();
        config.paths.memory_card1 = layout.memory_card(1);
        config.paths.memory_card2 = layout.memory_card(2);
        config.paths.patches_dir = layout.patches.clone();
        config.paths.bios_dir = bounded(&layout.bios.to_string_lossy()).unwrap_or_default();
        config.paths.bios = DEFAULT_BIOS.to_string();
        config.set_last_dir(&layout.home);
        config
    }

    /// Set the last used directory. Returns false, leaving the setting
    /// unchanged, when the path is empty or too long.
    pub fn set_last_dir(&mut self, dir: &Path) -> bool {
        match bounded(&dir.to_string_lossy()) {
            Some(value) => {
                self.paths.last_dir = value;
                true
            }
            None => false,
        }
    }
}

/// Result of parsing a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File parsed; `applied` recognized settings, `ignored` unknown or rejected lines
    Loaded { applied: usize, ignored: usize },
    /// No file at the configured path
    Missing,
    /// First line carried a different version; nothing applied
    VersionMismatch { found: i64 },
    /// First line was not a version header; nothing applied
    BadHeader,
}

/// Versioned persistence of [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the layout's config file
    pub fn for_layout(layout: &DirectoryLayout) -> Self {
        Self::new(layout.config_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from the file into `config`. Never fails: a missing or
    /// incompatible file leaves `config` untouched.
    pub fn load(&self, config: &mut Config) -> LoadOutcome {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "Failed to open config file {} for reading: {}",
                    self.path.display(),
                    e
                );
                return LoadOutcome::Missing;
            }
        };

        let outcome = Self::parse(&text, config);
        match outcome {
            LoadOutcome::Loaded { applied, ignored } => tracing::info!(
                "Loaded config {} ({} settings, {} lines ignored)",
                self.path.display(),
                applied,
                ignored
            ),
            LoadOutcome::VersionMismatch { found } => tracing::warn!(
                "Incompatible config version for {}. Required: {}. Found: {}. Ignoring.",
                self.path.display(),
                CONFIG_VERSION,
                found
            ),
            LoadOutcome::BadHeader => tracing::warn!(
                "Incompatible config format for {}. Ignoring.",
                self.path.display()
            ),
            LoadOutcome::Missing => {}
        }
        outcome
    }

    /// Write the complete configuration. Failure is logged and otherwise ignored.
    pub fn save(&self, config: &Config) -> bool {
        match self.try_save(config) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }

    /// Write the complete configuration, replacing the file
    pub fn try_save(&self, config: &Config) -> Result<(), ConfigError> {
        std::fs::write(&self.path, Self::render(config)).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            action: "writing",
            source,
        })?;
        tracing::debug!("Saved config {}", self.path.display());
        Ok(())
    }

    /// Apply the contents of a config file to `config`
    pub fn parse(text: &str, config: &mut Config) -> LoadOutcome {
        let mut lines = text.lines();

        let header = lines.next().unwrap_or_default();
        match header.split_once(' ') {
            Some(("CONFIG_VERSION", value)) => match leading_int(value) {
                Some(found) if found == i64::from(CONFIG_VERSION) => {}
                found => {
                    return LoadOutcome::VersionMismatch {
                        found: found.unwrap_or(-1),
                    }
                }
            },
            _ => return LoadOutcome::BadHeader,
        }

        let mut applied = 0;
        let mut ignored = 0;
        for line in lines {
            let Some((key, value)) = line.split_once(' ') else {
                ignored += 1;
                continue;
            };
            if apply_setting(config, key, value) {
                applied += 1;
            } else {
                ignored += 1;
            }
        }

        LoadOutcome::Loaded { applied, ignored }
    }

    /// Serialize every persisted setting
    pub fn render(config: &Config) -> String {
        let core = &config.core;
        let spu = &config.spu;
        let gpu = &config.gpu;
        let paths = &config.paths;

        let mut out = String::new();
        let mut put = |key: &str, value: &dyn std::fmt::Display| {
            let _ = writeln!(out, "{} {}", key, value);
        };

        put("CONFIG_VERSION", &CONFIG_VERSION);
        put("Xa", &u8::from(core.xa_disabled));
        put("Mdec", &u8::from(core.mdec_bw));
        put("PsxAuto", &u8::from(core.psx_auto));
        put("Cdda", &u8::from(core.cdda_disabled));
        put("HLE", &u8::from(core.hle));
        put("SlowBoot", &u8::from(core.slow_boot));
        put("RCntFix", &u8::from(core.rcnt_fix));
        put("VSyncWA", &u8::from(core.vsync_wa));
        put("Cpu", &core.cpu.index());
        put("PsxType", &core.psx_type.index());
        put("SpuIrq", &u8::from(spu.irq_always));
        put("SyncAudio", &u8::from(spu.sync_audio));
        put("SpuUpdateFreq", &spu.update_freq);
        put("ForcedXAUpdates", &spu.forced_xa_updates);
        put("ShowFps", &u8::from(gpu.show_fps));
        put("FrameLimit", &u8::from(gpu.frame_limit));
        put("FrameSkip", &gpu.frame_skip);
        put("SpuUseInterpolation", &spu.interpolation.index());
        put("SpuUseReverb", &u8::from(spu.reverb));
        put("SpuVolume", &spu.volume);
        put("CycleMultiplier", &format_args!("{:03x}", core.cycle_multiplier));
        put("interlace", &u8::from(gpu.interlace));
        put("pixel_skip", &u8::from(gpu.pixel_skip));
        put("lighting", &u8::from(gpu.lighting));
        put("fast_lighting", &u8::from(gpu.fast_lighting));
        put("blending", &u8::from(gpu.blending));
        put("dithering", &u8::from(gpu.dithering));

        for (key, value) in [
            ("LastDir", &paths.last_dir),
            ("BiosDir", &paths.bios_dir),
            ("Bios", &paths.bios),
        ] {
            if !value.is_empty() {
                put(key, value);
            }
        }

        out
    }
}

/// Apply one `key value` line. Returns false for unknown keys and rejected values.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> bool {
    let core = &mut config.core;
    let spu = &mut config.spu;
    let gpu = &mut config.gpu;

    match key {
        "Xa" => set_bool(&mut core.xa_disabled, key, value),
        "Mdec" => set_bool(&mut core.mdec_bw, key, value),
        "PsxAuto" => set_bool(&mut core.psx_auto, key, value),
        "Cdda" => set_bool(&mut core.cdda_disabled, key, value),
        "HLE" => set_bool(&mut core.hle, key, value),
        "SlowBoot" => set_bool(&mut core.slow_boot, key, value),
        "RCntFix" => set_bool(&mut core.rcnt_fix, key, value),
        "VSyncWA" => set_bool(&mut core.vsync_wa, key, value),
        "SpuIrq" => set_bool(&mut spu.irq_always, key, value),
        "SyncAudio" => set_bool(&mut spu.sync_audio, key, value),
        "ShowFps" => set_bool(&mut gpu.show_fps, key, value),
        "FrameLimit" => set_bool(&mut gpu.frame_limit, key, value),
        "SpuUseReverb" => set_bool(&mut spu.reverb, key, value),
        "interlace" => set_bool(&mut gpu.interlace, key, value),
        "pixel_skip" => set_bool(&mut gpu.pixel_skip, key, value),
        "lighting" => set_bool(&mut gpu.lighting, key, value),
        "fast_lighting" => set_bool(&mut gpu.fast_lighting, key, value),
        "blending" => set_bool(&mut gpu.blending, key, value),
        "dithering" => set_bool(&mut gpu.dithering, key, value),
        "Cpu" => with_int(key, value, |v| {
            core.cpu = CpuCore::from_index(v).unwrap_or_default();
        }),
        "PsxType" => with_int(key, value, |v| {
            core.psx_type = PsxType::from_index(v).unwrap_or_default();
        }),
        "SpuUpdateFreq" => with_int(key, value, |v| {
            spu.update_freq =
                in_range(v, SPU_UPDATE_FREQ_MIN, SPU_UPDATE_FREQ_MAX).unwrap_or(SPU_UPDATE_FREQ_DEFAULT);
        }),
        "ForcedXAUpdates" => with_int(key, value, |v| {
            spu.forced_xa_updates = in_range(v, FORCED_XA_UPDATES_MIN, FORCED_XA_UPDATES_MAX)
                .unwrap_or(FORCED_XA_UPDATES_DEFAULT);
        }),
        "FrameSkip" => with_int(key, value, |v| {
            gpu.frame_skip = in_range(v, FRAMESKIP_MIN, FRAMESKIP_MAX).unwrap_or(FRAMESKIP_OFF);
        }),
        "SpuUseInterpolation" => with_int(key, value, |v| {
            spu.interpolation = Interpolation::from_index(v).unwrap_or_default();
        }),
        "SpuVolume" => with_int(key, value, |v| {
            // Clamped rather than reset
            spu.volume = v.clamp(0, i64::from(SPU_VOLUME_MAX)) as u16;
        }),
        "CycleMultiplier" => match leading_hex(value) {
            Some(v) => {
                core.cycle_multiplier = in_range(v, CYCLE_MULTIPLIER_MIN, CYCLE_MULTIPLIER_MAX)
                    .unwrap_or(CYCLE_MULTIPLIER_DEFAULT);
                true
            }
            None => malformed(key, value),
        },
        "LastDir" => set_string(&mut config.paths.last_dir, key, value),
        "BiosDir" => set_string(&mut config.paths.bios_dir, key, value),
        "Bios" => set_string(&mut config.paths.bios, key, value),
        _ => false,
    }
}

fn set_bool(field: &mut bool, key: &str, value: &str) -> bool {
    with_int(key, value, |v| *field = v != 0)
}

fn with_int(key: &str, value: &str, apply: impl FnOnce(i64)) -> bool {
    match leading_int(value) {
        Some(v) => {
            apply(v);
            true
        }
        None => malformed(key, value),
    }
}

fn set_string(field: &mut String, key: &str, value: &str) -> bool {
    match bounded(value) {
        Some(v) => {
            *field = v;
            true
        }
        None => {
            tracing::warn!(
                "Ignoring {}: value is empty or longer than {} bytes",
                key,
                PATH_CAPACITY
            );
            false
        }
    }
}

fn malformed(key: &str, value: &str) -> bool {
    tracing::warn!("Ignoring malformed config line: {} {:?}", key, value);
    false
}

/// Narrow `value` into `[min, max]`, `None` when it falls outside
fn in_range<T>(value: i64, min: T, max: T) -> Option<T>
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    if value < min.into() || value > max.into() {
        return None;
    }
    T::try_from(value).ok()
}

/// Parse a leading decimal integer, ignoring trailing text
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits_start = usize::from(text.starts_with(['-', '+']));
    let digits = text[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..digits_start + digits].parse().ok()
}

fn leading_hex(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits = text.bytes().take_while(u8::is_ascii_hexdigit).count();
    if digits == 0 {
        return None;
    }
    i64::from_str_radix(&text[..digits], 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versioned(body: &str) -> String {
        format!("CONFIG_VERSION {}\n{}", CONFIG_VERSION, body)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.core.hle);
        assert!(config.core.psx_auto);
        assert!(config.gpu.frame_limit);
        assert!(!config.gpu.show_fps);
        assert_eq!(config.gpu.frame_skip, FRAMESKIP_OFF);
        assert_eq!(config.spu.update_freq, SPU_UPDATE_FREQ_DEFAULT);
        assert_eq!(config.spu.volume, SPU_VOLUME_MAX);
    }

    #[test]
    fn test_defaults_for_layout() {
        let layout = DirectoryLayout::under("/home/player");
        let config = Config::defaults_for(&layout);
        assert_eq!(config.paths.last_dir, "/home/player");
        assert_eq!(config.paths.bios_dir, "/home/player/.psxfront/bios");
        assert_eq!(config.paths.bios, DEFAULT_BIOS);
        assert_eq!(config.paths.memory_card1, layout.memory_card(1));
    }

    #[test]
    fn test_frameskip_out_of_range_resets_to_off() {
        let mut config = Config::default();
        config.gpu.frame_skip = 2;
        let outcome = ConfigStore::parse(&versioned("FrameSkip 99\n"), &mut config);
        assert_eq!(outcome, LoadOutcome::Loaded { applied: 1, ignored: 0 });
        assert_eq!(config.gpu.frame_skip, FRAMESKIP_OFF);
    }

    #[test]
    fn test_in_range_values_load_exactly() {
        for skip in FRAMESKIP_MIN..=FRAMESKIP_MAX {
            let mut config = Config::default();
            ConfigStore::parse(&versioned(&format!("FrameSkip {}\n", skip)), &mut config);
            assert_eq!(config.gpu.frame_skip, skip);
        }
        for freq in SPU_UPDATE_FREQ_MIN..=SPU_UPDATE_FREQ_MAX {
            let mut config = Config::default();
            ConfigStore::parse(&versioned(&format!("SpuUpdateFreq {}\n", freq)), &mut config);
            assert_eq!(config.spu.update_freq, freq);
        }
    }

    #[test]
    fn test_bounded_fields_reset_to_defaults() {
        let mut config = Config::default();
        ConfigStore::parse(
            &versioned("SpuUpdateFreq 6\nForcedXAUpdates -1\nCycleMultiplier 0\nSpuUseInterpolation 9\n"),
            &mut config,
        );
        assert_eq!(config.spu.update_freq, SPU_UPDATE_FREQ_DEFAULT);
        assert_eq!(config.spu.forced_xa_updates, FORCED_XA_UPDATES_DEFAULT);
        assert_eq!(config.core.cycle_multiplier, CYCLE_MULTIPLIER_DEFAULT);
        assert_eq!(config.spu.interpolation, Interpolation::None);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut config = Config::default();
        ConfigStore::parse(&versioned("SpuVolume 5000\n"), &mut config);
        assert_eq!(config.spu.volume, SPU_VOLUME_MAX);
        ConfigStore::parse(&versioned("SpuVolume -3\n"), &mut config);
        assert_eq!(config.spu.volume, 0);
    }

    #[test]
    fn test_booleans_accept_any_nonzero() {
        let mut config = Config::default();
        ConfigStore::parse(&versioned("ShowFps 7\nHLE 0\n"), &mut config);
        assert!(config.gpu.show_fps);
        assert!(!config.core.hle);
        assert!(ConfigStore::render(&config).contains("\nShowFps 1\n"));
    }

    #[test]
    fn test_version_mismatch_applies_nothing() {
        let mut config = Config::default();
        let outcome = ConfigStore::parse("CONFIG_VERSION 99\nFrameSkip 2\nShowFps 1\n", &mut config);
        assert_eq!(outcome, LoadOutcome::VersionMismatch { found: 99 });
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_header_applies_nothing() {
        let mut config = Config::default();
        let outcome = ConfigStore::parse("FrameSkip 2\nCONFIG_VERSION 1\n", &mut config);
        assert_eq!(outcome, LoadOutcome::BadHeader);
        assert_eq!(config, Config::default());

        assert_eq!(ConfigStore::parse("", &mut config), LoadOutcome::BadHeader);
    }

    #[test]
    fn test_unknown_and_malformed_lines_are_skipped() {
        let mut config = Config::default();
        let outcome = ConfigStore::parse(
            &versioned("FutureKey 3\nnospace\nFrameSkip abc\nFrameSkip 1\n"),
            &mut config,
        );
        assert_eq!(outcome, LoadOutcome::Loaded { applied: 1, ignored: 3 });
        assert_eq!(config.gpu.frame_skip, 1);
    }

    #[test]
    fn test_string_capacity() {
        let mut config = Config::default();
        config.paths.bios = "keep.bin".to_string();
        let long = "x".repeat(PATH_CAPACITY + 1);
        ConfigStore::parse(&versioned(&format!("Bios {}\nLastDir /games/psx one\n", long)), &mut config);
        assert_eq!(config.paths.bios, "keep.bin");
        assert_eq!(config.paths.last_dir, "/games/psx one");

        ConfigStore::parse(&versioned("Bios \n"), &mut config);
        assert_eq!(config.paths.bios, "keep.bin");
    }

    #[test]
    fn test_render_parse_roundtrip() {
        let mut config = Config::default();
        config.core.hle = false;
        config.core.cpu = CpuCore::Recompiler;
        config.core.psx_type = PsxType::Pal;
        config.core.cycle_multiplier = 0x1a0;
        config.spu.interpolation = Interpolation::Gaussian;
        config.spu.volume = 512;
        config.gpu.frame_skip = -1;
        config.gpu.dithering = true;
        config.paths.last_dir = "/games/psx".to_string();
        config.paths.bios = "scph5501.bin".to_string();

        let first = ConfigStore::render(&config);
        let mut reloaded = Config::default();
        ConfigStore::parse(&first, &mut reloaded);
        assert_eq!(ConfigStore::render(&reloaded), first);
        assert!(first.contains("\nCycleMultiplier 1a0\n"));
        assert!(!first.contains("BiosDir"));
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("42"), Some(42));
        assert_eq!(leading_int(" -1 trailing"), Some(-1));
        assert_eq!(leading_int("+3"), Some(3));
        assert_eq!(leading_int("x1"), None);
        assert_eq!(leading_int("-"), None);
    }
}
