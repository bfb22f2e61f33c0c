use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://vtelevizi.cz";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Hours added to feed timestamps to land them in the local clock frame.
pub const DEFAULT_SHIFT_HOURS: i64 = 2;
pub const DEFAULT_TICK_SECS: u64 = 60;
/// Snapshot refresh cadence, in ticks.
pub const DEFAULT_REFRESH_EVERY_TICKS: u64 = 5;
/// Minutes before a show's start during which alerting is active.
pub const DEFAULT_LEAD_MINUTES: i64 = 2;

/// Top-level config (telly.toml + TELLY_* env overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TellyConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout for the snapshot and detail fetches.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Feed timestamps arrive in the upstream's frame; this shift normalises
    /// them to the local clock.
    #[serde(default = "default_shift_hours")]
    pub shift_hours: i64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            shift_hours: default_shift_hours(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
    #[serde(default = "default_refresh_every_ticks")]
    pub refresh_every_ticks: u64,
    #[serde(default = "default_lead_minutes")]
    pub lead_minutes: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
            refresh_every_ticks: default_refresh_every_ticks(),
            lead_minutes: default_lead_minutes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Optional log file; stderr when unset.
    pub path: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}
fn default_shift_hours() -> i64 {
    DEFAULT_SHIFT_HOURS
}
fn default_tick_secs() -> u64 {
    DEFAULT_TICK_SECS
}
fn default_refresh_every_ticks() -> u64 {
    DEFAULT_REFRESH_EVERY_TICKS
}
fn default_lead_minutes() -> i64 {
    DEFAULT_LEAD_MINUTES
}

impl TellyConfig {
    /// Load config from a TOML file with TELLY_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.telly/telly.toml
    ///
    /// A missing file is not an error; defaults apply. Env segments are
    /// split on `__`, e.g. `TELLY_FEED__BASE_URL`,
    /// `TELLY_SCHEDULE__LEAD_MINUTES`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: TellyConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("TELLY_").split("__"))
            .extract()
            .map_err(|e| crate::error::TellyError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.telly/telly.toml", home)
}
