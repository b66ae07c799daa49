//! Runtime configuration for the `subnets` binary.
//!
//! Values come from the process environment, after loading an optional
//! `.env` file:
//! - `SUBNETS_LOG_CONFIG` - log4rs YAML file (default `log4rs.yml`)
//! - `SUBNETS_LOG_LEVEL` - root level when no YAML file is found (default `warn`)
//! - `SUBNETS_SEED` - seed for the `random` subcommand

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const ENV_LOG_CONFIG: &str = "SUBNETS_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "SUBNETS_LOG_LEVEL";
pub const ENV_SEED: &str = "SUBNETS_SEED";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:5})} {t} - {m}{n}";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error loading log config {path}: {reason}")]
    LogFile { path: PathBuf, reason: String },
    #[error("error building console logger: {0}")]
    LogBuild(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("logger already initialised: {0}")]
    LogInit(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub log_level: LevelFilter,
    pub seed: Option<u64>,
    /// Problems found while reading the environment, reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            log_level: DEFAULT_LOG_LEVEL,
            seed: None,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or empty keys keep their
    /// default; invalid values keep their default and add a warning.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = get(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            match LevelFilter::from_str(&level) {
                Ok(level) => config.log_level = level,
                Err(_) => config.warnings.push(format!(
                    "{ENV_LOG_LEVEL}={level:?} is not a log level, using {DEFAULT_LOG_LEVEL}"
                )),
            }
        }
        if let Some(seed) = get(ENV_SEED) {
            match seed.parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => config
                    .warnings
                    .push(format!("{ENV_SEED}={seed:?} ignored: {e}")),
            }
        }
        config
    }

    /// Initialise log4rs from the YAML file when it exists, otherwise log to
    /// stderr at `log_level`. Pending warnings are flushed afterwards.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        if self.log_config.is_file() {
            init_from_file(&self.log_config)?;
            log::debug!("logging configured from {}", self.log_config.display());
        } else {
            log4rs::init_config(console_config(self.log_level)?)?;
        }
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
        Ok(())
    }
}

fn init_from_file(path: &Path) -> Result<(), ConfigError> {
    log4rs::init_file(path, Default::default()).map_err(|e| ConfigError::LogFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Stderr console logger so stdout stays clean for command output.
pub fn console_config(level: LevelFilter) -> Result<log4rs::Config, ConfigError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
