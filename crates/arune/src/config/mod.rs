use std::env;
use std::fmt;

use crate::survey::AnalyzerConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the engine and its tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub analyzer: AnalyzerConfig,
}

impl AppConfig {
    /// Load from the environment, with `.env` support. Analyzer constants
    /// keep their canonical defaults unless overridden.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut analyzer = AnalyzerConfig::default();
        if let Ok(raw) = env::var("ARUNE_LIFE_EXPECTANCY") {
            analyzer.life_expectancy = raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|years| *years > 0)
                .ok_or(ConfigError::InvalidLifeExpectancy)?;
        }
        if let Ok(raw) = env::var("ARUNE_CLOCK_ANCHOR_HOUR") {
            analyzer.clock_anchor_hour = raw
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|hour| *hour < 24)
                .ok_or(ConfigError::InvalidAnchorHour)?;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            analyzer,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLifeExpectancy,
    InvalidAnchorHour,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLifeExpectancy => {
                write!(f, "ARUNE_LIFE_EXPECTANCY must be a positive number of years")
            }
            ConfigError::InvalidAnchorHour => {
                write!(f, "ARUNE_CLOCK_ANCHOR_HOUR must be an hour between 0 and 23")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("ARUNE_LIFE_EXPECTANCY");
        env::remove_var("ARUNE_CLOCK_ANCHOR_HOUR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.analyzer.life_expectancy, 80);
        assert_eq!(config.analyzer.clock_anchor_hour, 0);
    }

    #[test]
    fn analyzer_overrides_are_applied() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("ARUNE_LIFE_EXPECTANCY", "120");
        env::set_var("ARUNE_CLOCK_ANCHOR_HOUR", "6");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.analyzer.life_expectancy, 120);
        assert_eq!(config.analyzer.clock_anchor_hour, 6);
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_anchor_hour() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ARUNE_CLOCK_ANCHOR_HOUR", "24");
        let error = AppConfig::load().expect_err("anchor hour must be rejected");
        assert!(matches!(error, ConfigError::InvalidAnchorHour));
        reset_env();
    }
}
