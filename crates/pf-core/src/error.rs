//! Error types for the psxfront frontend

use std::path::PathBuf;
use thiserror::Error;

use crate::plugin::PluginKind;

/// Top-level error type. Every variant is fatal to the session.
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("Command line error: {0}")]
    Cli(#[from] CliError),

    #[error("Display error: {0}")]
    Display(String),

    #[error("Emulation core couldn't be initialized: {0}")]
    CoreInit(#[source] CoreError),

    #[error("Failed loading {kind} plugin: {source}")]
    PluginLoad {
        kind: PluginKind,
        #[source]
        source: CoreError,
    },

    #[error("No content selected")]
    NoContent,

    #[error("Core execution failed: {0}")]
    Execution(#[source] CoreError),
}

impl FrontendError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Command line parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("missing value for {flag} ({expected})")]
    MissingValue {
        flag: &'static str,
        expected: &'static str,
    },

    #[error("{flag} value must be {expected}, got {value:?}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl CliError {
    /// Flag that failed to parse
    pub fn flag(&self) -> &'static str {
        match self {
            Self::MissingValue { flag, .. } | Self::InvalidValue { flag, .. } => flag,
        }
    }
}

/// Errors reported by the emulation core and its plugins
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("initialization failed: {0}")]
    Init(String),

    #[error("disc image rejected: {0}")]
    Disc(String),

    #[error("executable rejected: {0}")]
    Executable(String),

    #[error("state serialization failed: {0}")]
    State(String),

    #[error("plugin failure: {0}")]
    Plugin(String),
}

/// Configuration persistence errors. Always recoverable.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to open config file {path:?} for {action}: {source}")]
    Io {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Save-state slot errors
#[derive(Error, Debug)]
pub enum SaveStateError {
    #[error("no content mounted, save states are unavailable")]
    NoContent,

    #[error("invalid content identifier {0:?}")]
    InvalidContentId(String),

    #[error("save state {0:?} does not exist")]
    Missing(PathBuf),

    #[error("core rejected save state: {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for fatal frontend operations
pub type Result<T> = std::result::Result<T, FrontendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display_names_expected_range() {
        let err = CliError::InvalidValue {
            flag: "-spuupdatefreq",
            value: "7".to_string(),
            expected: "between 0..5 (0 is once per frame)",
        };
        assert_eq!(
            format!("{}", err),
            "-spuupdatefreq value must be between 0..5 (0 is once per frame), got \"7\""
        );
        assert_eq!(err.flag(), "-spuupdatefreq");
    }

    #[test]
    fn test_error_conversion() {
        let cli = CliError::MissingValue {
            flag: "-iso",
            expected: "a disc image path",
        };
        let err: FrontendError = cli.into();
        assert!(matches!(err, FrontendError::Cli(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_every_session_failure_exits_with_one() {
        let all = [
            FrontendError::Cli(CliError::MissingValue {
                flag: "-file",
                expected: "an executable path",
            }),
            FrontendError::Display("320x240x16 unavailable".to_string()),
            FrontendError::CoreInit(CoreError::Init("no BIOS".to_string())),
            FrontendError::PluginLoad {
                kind: PluginKind::Gpu,
                source: CoreError::Plugin("no renderer".to_string()),
            },
            FrontendError::NoContent,
            FrontendError::Execution(CoreError::State("crashed".to_string())),
        ];
        for err in &all {
            // Each variant is raised by the session startup sequence
            match err {
                FrontendError::Cli(_)
                | FrontendError::Display(_)
                | FrontendError::CoreInit(_)
                | FrontendError::PluginLoad { .. }
                | FrontendError::NoContent
                | FrontendError::Execution(_) => assert_eq!(err.exit_code(), 1),
            }
        }
    }

    #[test]
    fn test_plugin_error_names_kind() {
        let err = FrontendError::PluginLoad {
            kind: PluginKind::Spu,
            source: CoreError::Plugin("no audio device".to_string()),
        };
        assert_eq!(
            format!("{}", err),
            "Failed loading SPU plugin: plugin failure: no audio device"
        );
    }
}
