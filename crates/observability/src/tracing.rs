//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG` selects the filter (default `info`).
//! - `SELLERKIT_LOG_FORMAT` selects `json` (default) or `pretty` output.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "SELLERKIT_LOG_FORMAT";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log shippers.
    #[default]
    Json,
    /// Human-readable multi-line output for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format {other:?} (expected json or pretty)")),
        }
    }
}

impl LogFormat {
    /// Resolve from an optional raw value, falling back to JSON.
    ///
    /// Returns the rejected value alongside so the caller can warn once a
    /// subscriber is installed.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<String>) {
        match raw.map(str::parse::<LogFormat>) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
        }
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let raw = std::env::var(LOG_FORMAT_ENV).ok();
    let (format, rejected) = LogFormat::resolve(raw.as_deref());
    init_with(format);

    if let Some(err) = rejected {
        ::tracing::warn!("{LOG_FORMAT_ENV}: {err}; using json");
    }
}

/// Initialize tracing/logging with an explicit format.
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr);

    // Logs go to stderr so stdout stays clean for command output.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
