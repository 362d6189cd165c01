use std::{env, fmt as stdfmt, sync::OnceLock};

use tracing_subscriber::{
    filter::ParseError,
    fmt::{self as tracing_fmt, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use kata_util::AppConfig;

#[derive(Debug)]
pub enum TelemetryError {
    Filter(ParseError),
    Tracing(tracing_subscriber::util::TryInitError),
}

impl stdfmt::Display for TelemetryError {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        match self {
            Self::Filter(err) => write!(f, "invalid KATA_LOG directives: {err}"),
            Self::Tracing(err) => write!(f, "failed to initialize tracing: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {}

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Picks `RUST_LOG` when it parses, otherwise the configured directives.
///
/// A malformed `RUST_LOG` falls back silently; malformed configured
/// directives are an error because they come from `KATA_LOG`.
fn resolve_filter(rust_log: Option<&str>, configured: &str) -> Result<EnvFilter, ParseError> {
    if let Some(filter) = rust_log.and_then(|value| EnvFilter::try_new(value).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
}

/// Installs the global subscriber: pretty lines in development, JSON in production.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryError> {
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let rust_log = env::var("RUST_LOG").ok();
    let filter = resolve_filter(rust_log.as_deref(), &config.log_filter)
        .map_err(TelemetryError::Filter)?;

    let json = config.environment.json_logs();
    let pretty_layer = (!json).then(|| {
        tracing_fmt::layer()
            .with_timer(UtcTime::rfc_3339())
            .pretty()
    });
    let json_layer = json.then(|| {
        tracing_fmt::layer()
            .with_timer(UtcTime::rfc_3339())
            .json()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty_layer)
        .with(json_layer)
        .try_init()
        .map_err(TelemetryError::Tracing)?;

    TRACING_INIT.set(()).ok();
    tracing::info!(
        stage = "telemetry",
        env = %config.environment.as_str(),
        filter = %config.log_filter,
        raise_formula = config.raise_formula.as_str(),
        "tracing initialized"
    );
    Ok(())
}
