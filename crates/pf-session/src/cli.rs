//! Command line overlay
//!
//! Flags are single-dash long names. Parsing produces an ordered list of
//! overrides that is applied on top of the loaded configuration, so a later
//! flag wins over an earlier one and every flag wins over the file. Flags
//! nobody recognizes are skipped without comment.

use std::path::{Path, PathBuf};

use pf_core::config::{
    Config, CpuCore, Interpolation, PsxType, FORCED_XA_UPDATES_MAX, FORCED_XA_UPDATES_MIN,
    FRAMESKIP_MAX, FRAMESKIP_MIN, SPU_UPDATE_FREQ_MAX, SPU_UPDATE_FREQ_MIN, SPU_VOLUME_MAX,
};
use pf_core::CliError;

/// A single configuration change requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOverride {
    XaDisabled,
    MdecBw,
    /// Force a region and turn auto-detection off
    Region(PsxType),
    CddaDisabled,
    /// Boot through the real BIOS instead of HLE
    Bios,
    Interpreter,
    SlowBoot,
    RcntFix,
    VsyncWa,
    SpuIrq,
    SyncAudio,
    SpuUpdateFreq(u8),
    ForcedXaUpdates(u8),
    Perfmon,
    ShowFps,
    NoFrameLimit,
    FrameSkip(i8),
    Interlace,
    Dither,
    NoLighting,
    NoBlending,
    NoFastLighting,
    NoPixelSkip,
    Progressive,
    Silent,
    Reverb,
    XaPitch,
    ThreadedSpu,
    NoFixedUpdates,
    Interpolation(Interpolation),
    Volume(u16),
    NoTempo,
}

impl ConfigOverride {
    pub fn apply(self, config: &mut Config) {
        match self {
            Self::XaDisabled => config.core.xa_disabled = true,
            Self::MdecBw => config.core.mdec_bw = true,
            Self::Region(region) => {
                config.core.psx_auto = false;
                config.core.psx_type = region;
            }
            Self::CddaDisabled => config.core.cdda_disabled = true,
            Self::Bios => config.core.hle = false,
            Self::Interpreter => config.core.cpu = CpuCore::Interpreter,
            Self::SlowBoot => config.core.slow_boot = true,
            Self::RcntFix => config.core.rcnt_fix = true,
            Self::VsyncWa => config.core.vsync_wa = true,
            Self::SpuIrq => config.spu.irq_always = true,
            Self::SyncAudio => config.spu.sync_audio = true,
            Self::SpuUpdateFreq(n) => config.spu.update_freq = n,
            Self::ForcedXaUpdates(n) => config.spu.forced_xa_updates = n,
            Self::Perfmon => {
                config.perfmon.console_output = true;
                config.perfmon.detailed_stats = true;
            }
            Self::ShowFps => config.gpu.show_fps = true,
            Self::NoFrameLimit => config.gpu.frame_limit = false,
            Self::FrameSkip(n) => config.gpu.frame_skip = n,
            Self::Interlace => config.gpu.interlace = true,
            Self::Dither => config.gpu.dithering = true,
            Self::NoLighting => config.gpu.lighting = false,
            Self::NoBlending => config.gpu.blending = false,
            Self::NoFastLighting => config.gpu.fast_lighting = false,
            Self::NoPixelSkip => config.gpu.pixel_skip = false,
            Self::Progressive => config.gpu.progressive_interlace = true,
            Self::Silent => config.spu.disabled = true,
            Self::Reverb => config.spu.reverb = true,
            Self::XaPitch => config.spu.xa_pitch = true,
            Self::ThreadedSpu => config.spu.threaded = true,
            Self::NoFixedUpdates => config.spu.fixed_updates = false,
            Self::Interpolation(mode) => config.spu.interpolation = mode,
            Self::Volume(v) => config.spu.volume = v,
            Self::NoTempo => config.spu.tempo = false,
        }
    }
}

const SPU_UPDATE_FREQ_EXPECTED: &str = "between 0..5 (0 is once per frame)";
const FORCED_XA_UPDATES_EXPECTED: &str = "between 0..7";
const FRAMESKIP_EXPECTED: &str = "between -1..3 (-1 is AUTO)";
const INTERPOLATION_EXPECTED: &str = "one of: none,simple,gaussian,cubic";
const VOLUME_EXPECTED: &str =
    "between 0-1024 (0 mutes sound but keeps the SPU running, -silent disables it)";

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverlay {
    overrides: Vec<ConfigOverride>,
    iso: Option<PathBuf>,
    file: Option<PathBuf>,
}

impl CliOverlay {
    /// Parse the arguments that follow the program name.
    ///
    /// Stops at the first flag whose value is missing or out of range.
    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut args = args.iter().map(|s| AsRef::<str>::as_ref(s));
        let mut overlay = Self::default();

        while let Some(arg) = args.next() {
            let change = match arg {
                "-noxa" => ConfigOverride::XaDisabled,
                "-bwmdec" => ConfigOverride::MdecBw,
                "-pal" => ConfigOverride::Region(PsxType::Pal),
                "-ntsc" => ConfigOverride::Region(PsxType::Ntsc),
                "-nocdda" => ConfigOverride::CddaDisabled,
                "-bios" => ConfigOverride::Bios,
                "-interpreter" => ConfigOverride::Interpreter,
                "-slowboot" => ConfigOverride::SlowBoot,
                "-rcntfix" => ConfigOverride::RcntFix,
                "-vsyncwa" => ConfigOverride::VsyncWa,
                "-spuirq" => ConfigOverride::SpuIrq,
                "-syncaudio" => ConfigOverride::SyncAudio,
                "-perfmon" => ConfigOverride::Perfmon,
                "-showfps" => ConfigOverride::ShowFps,
                "-noframelimit" => ConfigOverride::NoFrameLimit,
                "-interlace" => ConfigOverride::Interlace,
                "-dither" => ConfigOverride::Dither,
                "-nolight" => ConfigOverride::NoLighting,
                "-noblend" => ConfigOverride::NoBlending,
                "-nofastlight" => ConfigOverride::NoFastLighting,
                "-nopixelskip" => ConfigOverride::NoPixelSkip,
                "-progressive" => ConfigOverride::Progressive,
                "-silent" => ConfigOverride::Silent,
                "-reverb" => ConfigOverride::Reverb,
                "-xapitch" => ConfigOverride::XaPitch,
                "-threaded_spu" => ConfigOverride::ThreadedSpu,
                "-nofixedupdates" => ConfigOverride::NoFixedUpdates,
                "-notempo" => ConfigOverride::NoTempo,
                "-iso" => {
                    let path = value(&mut args, "-iso", "path to a disc image")?;
                    overlay.iso = Some(PathBuf::from(path));
                    continue;
                }
                "-file" => {
                    let path = value(&mut args, "-file", "path to an executable")?;
                    overlay.file = Some(PathBuf::from(path));
                    continue;
                }
                "-spuupdatefreq" => {
                    let flag = "-spuupdatefreq";
                    let raw = value(&mut args, flag, SPU_UPDATE_FREQ_EXPECTED)?;
                    let n = ranged(
                        flag,
                        raw,
                        SPU_UPDATE_FREQ_MIN.into(),
                        SPU_UPDATE_FREQ_MAX.into(),
                        SPU_UPDATE_FREQ_EXPECTED,
                    )?;
                    ConfigOverride::SpuUpdateFreq(n as u8)
                }
                "-forcedxaupdates" => {
                    let flag = "-forcedxaupdates";
                    let raw = value(&mut args, flag, FORCED_XA_UPDATES_EXPECTED)?;
                    let n = ranged(
                        flag,
                        raw,
                        FORCED_XA_UPDATES_MIN.into(),
                        FORCED_XA_UPDATES_MAX.into(),
                        FORCED_XA_UPDATES_EXPECTED,
                    )?;
                    ConfigOverride::ForcedXaUpdates(n as u8)
                }
                "-frameskip" => {
                    let flag = "-frameskip";
                    let raw = value(&mut args, flag, FRAMESKIP_EXPECTED)?;
                    let n = ranged(
                        flag,
                        raw,
                        FRAMESKIP_MIN.into(),
                        FRAMESKIP_MAX.into(),
                        FRAMESKIP_EXPECTED,
                    )?;
                    ConfigOverride::FrameSkip(n as i8)
                }
                "-interpolation" => {
                    let flag = "-interpolation";
                    let raw = value(&mut args, flag, INTERPOLATION_EXPECTED)?;
                    let mode = Interpolation::from_name(raw).ok_or_else(|| {
                        CliError::InvalidValue {
                            flag,
                            value: raw.to_string(),
                            expected: INTERPOLATION_EXPECTED,
                        }
                    })?;
                    ConfigOverride::Interpolation(mode)
                }
                "-volume" => {
                    let flag = "-volume";
                    let raw = value(&mut args, flag, VOLUME_EXPECTED)?;
                    let v = ranged(flag, raw, 0, SPU_VOLUME_MAX.into(), VOLUME_EXPECTED)?;
                    ConfigOverride::Volume(v as u16)
                }
                other => {
                    tracing::trace!("Ignoring unknown argument {:?}", other);
                    continue;
                }
            };
            overlay.overrides.push(change);
        }

        Ok(overlay)
    }

    /// Apply every override in command line order
    pub fn apply(&self, config: &mut Config) {
        for change in &self.overrides {
            change.apply(config);
        }
        if !self.overrides.is_empty() {
            tracing::debug!("Applied {} command line overrides", self.overrides.len());
        }
    }

    pub fn overrides(&self) -> &[ConfigOverride] {
        &self.overrides
    }

    /// Disc image given with `-iso`
    pub fn iso(&self) -> Option<&Path> {
        self.iso.as_deref()
    }

    /// Executable given with `-file`
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Whether any content was named on the command line
    pub fn has_content(&self) -> bool {
        self.iso.is_some() || self.file.is_some()
    }
}

fn value<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    flag: &'static str,
    expected: &'static str,
) -> Result<&'a str, CliError> {
    args.next().ok_or(CliError::MissingValue { flag, expected })
}

fn ranged(
    flag: &'static str,
    raw: &str,
    min: i64,
    max: i64,
    expected: &'static str,
) -> Result<i64, CliError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(CliError::InvalidValue {
            flag,
            value: raw.to_string(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOverlay, CliError> {
        CliOverlay::parse(args.iter().copied())
    }

    #[test]
    fn test_flags_apply_in_order() {
        let overlay = parse(&["-pal", "-ntsc", "-bios", "-showfps", "-silent"]).unwrap();
        let mut config = Config::default();
        overlay.apply(&mut config);

        assert_eq!(config.core.psx_type, PsxType::Ntsc);
        assert!(!config.core.psx_auto);
        assert!(!config.core.hle);
        assert!(config.gpu.show_fps);
        assert!(config.spu.disabled);
    }

    #[test]
    fn test_content_paths() {
        let overlay = parse(&["-iso", "/games/ff7.cue", "-file", "demo.exe"]).unwrap();
        assert_eq!(overlay.iso(), Some(Path::new("/games/ff7.cue")));
        assert_eq!(overlay.file(), Some(Path::new("demo.exe")));
        assert!(overlay.has_content());
        assert!(overlay.overrides().is_empty());
    }

    #[test]
    fn test_value_is_not_reparsed_as_flag() {
        let overlay = parse(&["-iso", "-pal"]).unwrap();
        assert_eq!(overlay.iso(), Some(Path::new("-pal")));
        assert!(overlay.overrides().is_empty());
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let overlay = parse(&["-turbo", "whatever", "-noxa"]).unwrap();
        assert_eq!(overlay.overrides(), &[ConfigOverride::XaDisabled]);
    }

    #[test]
    fn test_numeric_values() {
        let overlay = parse(&[
            "-spuupdatefreq", "5",
            "-forcedxaupdates", "0",
            "-frameskip", "-1",
            "-volume", "0",
            "-interpolation", "cubic",
        ])
        .unwrap();
        let mut config = Config::default();
        overlay.apply(&mut config);

        assert_eq!(config.spu.update_freq, 5);
        assert_eq!(config.spu.forced_xa_updates, 0);
        assert_eq!(config.gpu.frame_skip, -1);
        assert_eq!(config.spu.volume, 0);
        assert_eq!(config.spu.interpolation, Interpolation::Cubic);
    }

    #[test]
    fn test_out_of_range_is_fatal() {
        let err = parse(&["-spuupdatefreq", "7"]).unwrap_err();
        assert_eq!(
            err,
            CliError::InvalidValue {
                flag: "-spuupdatefreq",
                value: "7".to_string(),
                expected: SPU_UPDATE_FREQ_EXPECTED,
            }
        );
        assert!(err.to_string().contains("between 0..5"));

        assert!(parse(&["-frameskip", "4"]).is_err());
        assert!(parse(&["-volume", "1025"]).is_err());
        assert!(parse(&["-forcedxaupdates", "-1"]).is_err());
        assert!(parse(&["-interpolation", "linear"]).is_err());
    }

    #[test]
    fn test_non_numeric_is_fatal() {
        let err = parse(&["-frameskip", "auto"]).unwrap_err();
        assert_eq!(err.flag(), "-frameskip");
    }

    #[test]
    fn test_missing_value_is_fatal() {
        for flag in ["-iso", "-file", "-spuupdatefreq", "-volume", "-interpolation"] {
            let err = parse(&["-pal", flag]).unwrap_err();
            assert!(matches!(err, CliError::MissingValue { .. }), "{}", flag);
            assert_eq!(err.flag(), flag);
        }
    }

    #[test]
    fn test_cli_beats_file() {
        let mut config = Config::default();
        config.gpu.frame_skip = 2;

        parse(&["-frameskip", "0"]).unwrap().apply(&mut config);
        assert_eq!(config.gpu.frame_skip, 0);
    }
}
