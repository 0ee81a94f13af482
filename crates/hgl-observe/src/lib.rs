mod config;
mod error;
mod filter;
mod format;
mod install;
mod timer;

pub use config::LogConfig;
pub use error::{LogError, LogResult};
pub use filter::LogFilter;
pub use format::LogFormat;
pub use timer::UtcRfc3339;

/// Installs the global tracing subscriber described by `cfg`.
///
/// Fails with [`LogError::AlreadyInitialized`] if a global subscriber is already set.
///
/// # Examples
/// ```rust
/// use hgl_observe::{LogConfig, init_logging};
///
/// let cfg = LogConfig::default();
/// init_logging(&cfg).expect("logger must initialize once");
/// tracing::info!("host group labels logging ready");
/// ```
pub fn init_logging(cfg: &LogConfig) -> LogResult<()> {
    match cfg.format {
        LogFormat::Text => install::text(cfg),
        LogFormat::Json => install::json(cfg),
        LogFormat::Journald => install::journald(cfg),
    }
}
