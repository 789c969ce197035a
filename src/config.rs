use anyhow::{bail, Context, Result};

pub const DEFAULT_API_URL: &str = "https://dams-core-api.silpo.ua/v1/statistics/by-point";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Statistics API (upstream)
    pub api_url: String,
    pub bearer_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,

            api_url: lookup("STATS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            bearer_token: lookup("BEARER_TOKEN").filter(|token| !token.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http") {
            bail!("STATS_API_URL must be HTTP(S) URL");
        }

        if self.bearer_token.is_none() {
            tracing::warn!("BEARER_TOKEN is not set, statistics requests will fail");
        }

        tracing::info!("Configuration validated, upstream: {}", self.api_url);

        Ok(())
    }
}
