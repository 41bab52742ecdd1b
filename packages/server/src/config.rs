use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use judge::config::{JudgeConfig, PollErrorPolicy};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL URL. When absent, data lives in memory for the lifetime of
    /// the process.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    20
}
fn default_connect_timeout_secs() -> u64 {
    8
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Points awarded for progress.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Awarded once per team and challenge on the first accepted code run.
    /// Default: 10.
    #[serde(default = "default_code_reward")]
    pub code_reward: i64,
    /// Awarded once per team and challenge on the first correct flag.
    /// Default: 20.
    #[serde(default = "default_flag_reward")]
    pub flag_reward: i64,
}

fn default_code_reward() -> i64 {
    10
}
fn default_flag_reward() -> i64 {
    20
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            code_reward: default_code_reward(),
            flag_reward: default_flag_reward(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("HACKATHON_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("judge.base_url", "http://localhost:2358")?
            .set_default("judge.poll_delay_ms", 1000_i64)?
            .set_default("judge.max_poll_attempts", 10_i64)?
            .set_default("scoring.code_reward", 10_i64)?
            .set_default("scoring.flag_reward", 20_i64)?
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., HACKATHON__JUDGE__AUTH_TOKEN)
            .add_source(Environment::with_prefix("HACKATHON").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
