use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Development overrides, including a publicly known jwt secret.
pub const DEV_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.dev.toml");

/// Colon separated list of config files which override the defaults.
pub const CONFIG_PATH_ENV: &str = "JOBBOARD_CONFIG";

/// Load the default config and apply the files listed in `JOBBOARD_CONFIG`
/// on top of it.
///
/// The defaults contain no jwt secret, so loading fails unless one of the
/// listed files sets `jwt.secret`.
pub fn load() -> anyhow::Result<Config> {
    load_paths(&with_env_paths(vec![DEFAULT_CONFIG_PATH.into()]))
}

/// Like [`load`], but with the development overrides applied between the
/// defaults and the files listed in `JOBBOARD_CONFIG`.
pub fn load_dev() -> anyhow::Result<Config> {
    load_paths(&with_env_paths(vec![
        DEFAULT_CONFIG_PATH.into(),
        DEV_CONFIG_PATH.into(),
    ]))
}

fn with_env_paths(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    if let Some(extra) = std::env::var_os(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(&extra).filter(|x| !x.as_os_str().is_empty()));
    }
    paths
}

/// Load and merge the given config files. Later files take precedence.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
    pub health: HealthConfig,
    pub analytics: AnalyticsConfig,
    pub sentry: Option<SentryConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    pub access_token_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsConfig {
    /// Length of the periods compared by the overview trends
    pub trend_window: Duration,
    pub recent_jobs: u64,
    pub recent_applications: u64,
}

#[derive(Debug, Deserialize)]
pub struct SentryConfig {
    pub dsn: Url,
}
