use std::{env, fmt, num::ParseFloatError};

use kata_core::{ParseRaiseFormulaError, RaiseFormula};

use super::{raise_fraction, DEFAULT_LOG_FILTER};

/// Application runtime environment. Only decides how logs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Production emits JSON lines; development keeps the human readable layout.
    pub fn json_logs(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns the canonical name used for logging labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub raise_fraction: f64,
    pub raise_formula: RaiseFormula,
    /// Default `EnvFilter` directives, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_value = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let environment = Environment::from_str(&env_value)?;
        let raise_fraction = raise_fraction().map_err(ConfigError::InvalidFraction)?;
        let raise_formula = match env::var("KATA_RAISE_FORMULA") {
            Ok(value) => value
                .trim()
                .parse::<RaiseFormula>()
                .map_err(ConfigError::InvalidFormula)?,
            Err(_) => RaiseFormula::default(),
        };
        let log_filter =
            env::var("KATA_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            environment,
            raise_fraction,
            raise_formula,
            log_filter,
        })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
    InvalidFraction(ParseFloatError),
    InvalidFormula(ParseRaiseFormulaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvironment(value) => write!(
                f,
                "APP_ENV must be 'development' or 'production' (got {value})"
            ),
            Self::InvalidFraction(err) => write!(f, "invalid KATA_RAISE_FRACTION value: {err}"),
            Self::InvalidFormula(err) => write!(
                f,
                "KATA_RAISE_FORMULA must be 'compounding' or 'replacing' ({err})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
pub(crate) static ENV_GUARD: std::sync::LazyLock<std::sync::Mutex<()>> =
    std::sync::LazyLock::new(|| std::sync::Mutex::new(()));
