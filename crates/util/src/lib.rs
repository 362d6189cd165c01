pub mod config;

use std::{env, num::ParseFloatError};

pub use config::{AppConfig, ConfigError, Environment};

pub const DEFAULT_RAISE_FRACTION: f64 = 0.1;

/// Shows the domain's `stage = "company"` debug events next to the app's info lines.
pub const DEFAULT_LOG_FILTER: &str = "info,kata_core=debug";

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the binary runs the same with or without one.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Returns the fraction the demo raise should apply.
///
/// The value is resolved from the `KATA_RAISE_FRACTION` environment variable
/// and falls back to [`DEFAULT_RAISE_FRACTION`] when the variable is not set.
pub fn raise_fraction() -> Result<f64, ParseFloatError> {
    match env::var("KATA_RAISE_FRACTION") {
        Ok(value) => value.trim().parse(),
        Err(_) => Ok(DEFAULT_RAISE_FRACTION),
    }
}
