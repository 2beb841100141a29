//! Logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//! - Capture panics as sanitized, length-capped log events.
//!
//! # Invariants
//! - Re-initialization with the same settings is idempotent; with different
//!   settings it is rejected, never silently reconfigured.
//! - Initialization itself must not panic.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "folio";
const MAX_LOG_FILE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_CHARS: usize = 120;

static LOG_STATE: OnceCell<LogState> = OnceCell::new();

struct LogState {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Logging setup failures.
#[derive(Debug)]
pub enum LoggingError {
    /// Level string outside `trace|debug|info|warn|error`.
    UnsupportedLevel(String),
    /// Directory empty or not absolute.
    InvalidDirectory(String),
    /// Already initialized with different settings.
    AlreadyInitialized { level: &'static str, dir: PathBuf },
    /// Backend failed to start.
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => {
                write!(f, "unsupported log level `{level}`")
            }
            Self::InvalidDirectory(dir) => {
                write!(f, "log directory must be an absolute path, got `{dir}`")
            }
            Self::AlreadyInitialized { level, dir } => write!(
                f,
                "logging already initialized (level={level}, dir={}); refusing to reconfigure",
                dir.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Initializes rolling-file logging for the engine.
///
/// Idempotent for repeated calls with identical settings; any differing
/// re-initialization attempt returns [`LoggingError::AlreadyInitialized`].
pub fn init_logging(level: &str, dir: &str) -> Result<(), LoggingError> {
    let level = normalize_level(level)?;
    let dir = normalize_dir(dir)?;

    if let Some(state) = LOG_STATE.get() {
        return if state.level == level && state.dir == dir {
            Ok(())
        } else {
            Err(LoggingError::AlreadyInitialized {
                level: state.level,
                dir: state.dir.clone(),
            })
        };
    }

    let state = LOG_STATE.get_or_try_init(|| {
        std::fs::create_dir_all(&dir)
            .map_err(|err| LoggingError::Backend(format!("create {}: {err}", dir.display())))?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_file(
                FileSpec::default()
                    .directory(dir.as_path())
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        install_panic_hook();
        info!(
            "event=engine_start module=core status=ok level={level} version={}",
            env!("CARGO_PKG_VERSION")
        );

        Ok(LogState {
            level,
            dir: dir.clone(),
            _handle: handle,
        })
    })?;

    if state.level != level || state.dir != dir {
        return Err(LoggingError::AlreadyInitialized {
            level: state.level,
            dir: state.dir.clone(),
        });
    }
    Ok(())
}

/// Returns `(level, directory)` once logging is active.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOG_STATE.get().map(|state| (state.level, state.dir.clone()))
}

/// Default level per build mode: `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

fn normalize_dir(dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = dir.trim();
    let path = Path::new(trimmed);
    if trimmed.is_empty() || !path.is_absolute() {
        return Err(LoggingError::InvalidDirectory(trimmed.to_string()));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=core status=error location={location} payload={}",
            panic_summary(panic_info)
        );
        previous(panic_info);
    }));
}

fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    sanitize_payload(&payload)
}

// Panic text can carry user input; strip newlines and cap length.
fn sanitize_payload(payload: &str) -> String {
    let flat = payload.replace(['\n', '\r'], " ");
    let mut capped: String = flat.chars().take(MAX_PANIC_CHARS).collect();
    if flat.chars().count() > MAX_PANIC_CHARS {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::{normalize_dir, normalize_level, sanitize_payload, LoggingError};

    #[test]
    fn level_normalization_accepts_aliases_and_case() {
        assert_eq!(normalize_level("INFO").expect("info normalizes"), "info");
        assert_eq!(normalize_level(" warning ").expect("warning maps"), "warn");
        assert!(matches!(
            normalize_level("verbose"),
            Err(LoggingError::UnsupportedLevel(_))
        ));
    }

    #[test]
    fn relative_directories_are_rejected() {
        assert!(matches!(
            normalize_dir("logs/dev"),
            Err(LoggingError::InvalidDirectory(_))
        ));
        assert!(normalize_dir("/tmp/folio-logs").is_ok());
    }

    #[test]
    fn panic_payload_is_flattened_and_capped() {
        let sanitized = sanitize_payload("line1\nline2\rline3");
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));

        let capped = sanitize_payload(&"x".repeat(500));
        assert!(capped.ends_with("..."));
        assert_eq!(capped.chars().count(), 120 + 3);
    }
}
