use anyhow::{bail, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub limiter: LimiterConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Reported by the healthcheck (development, staging, production)
    pub env: String,
}

#[derive(Debug, Clone)]
pub struct LimiterConfig {
    pub enabled: bool,
    pub requests_per_second: u32,
    pub burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("API_PORT")
                    .unwrap_or_else(|_| "4000".to_string())
                    .parse()
                    .context("API_PORT must be a valid port number")?,
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            limiter: LimiterConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl LimiterConfig {
    fn from_env() -> Result<Self> {
        let config = LimiterConfig {
            enabled: env::var("LIMITER_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("LIMITER_ENABLED must be true or false")?,
            requests_per_second: env::var("LIMITER_RPS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .context("LIMITER_RPS must be a valid number")?,
            burst: env::var("LIMITER_BURST")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("LIMITER_BURST must be a valid number")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.enabled && (self.requests_per_second == 0 || self.burst == 0) {
            bail!("LIMITER_RPS and LIMITER_BURST must be greater than zero when the limiter is enabled");
        }
        Ok(())
    }
}
