use crate::evaluation::{EngineSettings, DEFAULT_BASE_FACTOR};
use crate::report::ReportFormat;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the questionnaire.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub engine: EngineConfig,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let randomize = match env::var("RANN_SAKA_RANDOMIZE") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidRandomize(raw))?,
            Err(_) => true,
        };

        let seed = match env::var("RANN_SAKA_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            Err(_) => None,
        };

        let base_factor = match env::var("RANN_SAKA_BASE_FACTOR") {
            Ok(raw) => parse_base_factor(&raw)?,
            Err(_) => DEFAULT_BASE_FACTOR,
        };

        let output_dir =
            PathBuf::from(env::var("RANN_SAKA_REPORT_DIR").unwrap_or_else(|_| ".".to_string()));
        let format = match env::var("RANN_SAKA_REPORT_FORMAT") {
            Ok(raw) => ReportFormat::parse(&raw).ok_or(ConfigError::InvalidReportFormat(raw))?,
            Err(_) => ReportFormat::Text,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            engine: EngineConfig {
                base_factor,
                randomize,
                seed,
            },
            report: ReportConfig { output_dir, format },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Scoring engine knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub base_factor: f64,
    pub randomize: bool,
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn settings(&self) -> EngineSettings {
        EngineSettings {
            base_factor: self.base_factor,
            randomize: self.randomize,
            ..EngineSettings::default()
        }
    }
}

/// Where and how saved reports are written.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub format: ReportFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Factors at or below 1.0 would turn amplification into dampening.
fn parse_base_factor(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 1.0 => Ok(value),
        _ => Err(ConfigError::InvalidBaseFactor(raw.to_string())),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRandomize(String),
    InvalidSeed(String),
    InvalidBaseFactor(String),
    InvalidReportFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRandomize(value) => {
                write!(f, "RANN_SAKA_RANDOMIZE must be true or false (got '{value}')")
            }
            ConfigError::InvalidSeed(value) => {
                write!(f, "RANN_SAKA_SEED must be a valid u64 (got '{value}')")
            }
            ConfigError::InvalidBaseFactor(value) => write!(
                f,
                "RANN_SAKA_BASE_FACTOR must be a number greater than 1 (got '{value}')"
            ),
            ConfigError::InvalidReportFormat(value) => write!(
                f,
                "RANN_SAKA_REPORT_FORMAT must be 'text' or 'json' (got '{value}')"
            ),
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
        env::remove_var("RANN_SAKA_RANDOMIZE");
        env::remove_var("RANN_SAKA_SEED");
        env::remove_var("RANN_SAKA_BASE_FACTOR");
        env::remove_var("RANN_SAKA_REPORT_DIR");
        env::remove_var("RANN_SAKA_REPORT_FORMAT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.engine.base_factor, DEFAULT_BASE_FACTOR);
        assert!(config.engine.randomize);
        assert_eq!(config.engine.seed, None);
        assert_eq!(config.report.output_dir, PathBuf::from("."));
        assert_eq!(config.report.format, ReportFormat::Text);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn load_reads_engine_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("RANN_SAKA_RANDOMIZE", "off");
        env::set_var("RANN_SAKA_SEED", "42");
        env::set_var("RANN_SAKA_REPORT_FORMAT", "JSON");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert!(!config.engine.randomize);
        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert!(!config.engine.settings().randomize);
    }

    #[test]
    fn load_rejects_non_amplifying_base_factor() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RANN_SAKA_BASE_FACTOR", "0.8");
        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidBaseFactor(value)) => assert_eq!(value, "0.8"),
            other => panic!("expected invalid base factor, got {other:?}"),
        }
    }
}
