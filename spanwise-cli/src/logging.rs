//! `tracing` setup for the `spanwise` binary.
//!
//! Stepper spans close onto `stderr` so `RUST_LOG=spanwise_core=debug` shows
//! each accept or reject decision alongside the command output on `stdout`.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Selects [`LogFormat`]; unset means [`LogFormat::Human`].
pub const LOG_FORMAT_ENV: &str = "SPANWISE_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// How events are rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(LoggingError::UnknownFormat {
                value: value.to_owned(),
            })
        }
    }
}

impl LogFormat {
    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::NotUnicode { source }),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("`SPANWISE_LOG_FORMAT` is not valid UTF-8")]
    NotUnicode {
        #[source]
        source: env::VarError,
    },
    #[error("`SPANWISE_LOG_FORMAT={value}` is not a log format; use `human` or `json`")]
    UnknownFormat { value: String },
}

/// Installs the global subscriber once per process.
///
/// Later calls return without touching the environment. If some other
/// subscriber already owns the global slot it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when [`LOG_FORMAT_ENV`] cannot be read or parsed.
pub fn init_logging() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let format = LogFormat::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().with_current_span(true).with_span_list(true).boxed(),
    };

    // Either call fails only when a logger is already installed.
    let _ = LogTracer::init();
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    INSTALLED.get_or_init(|| format);
    Ok(())
}
