use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

/// Metadata describing the running service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

pub const SERVICE_INFO: ServiceInfo = ServiceInfo {
    title: "TDS Virtual TA API",
    description: "API for answering student questions based on TDS course content and Discourse posts.",
    version: env!("CARGO_PKG_VERSION"),
};

impl ServiceInfo {
    /// Message served by the liveness endpoint.
    pub fn running_message(&self) -> String {
        format!("{} is running!", self.title)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 環境変数の取得方法を差し替えられる版。テストではクロージャで値を渡す。
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let environment = Environment::parse(lookup("ENV").as_deref());

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a valid number of seconds")?;

        let config = Config {
            port,
            environment,
            request_timeout: Duration::from_secs(request_timeout_secs),
        };

        // Validate configuration values
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}

impl Environment {
    /// `ENV` だけを先に読む。ログ初期化は設定全体の読み込みより前に行うため。
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::parse(env::var("ENV").ok().as_deref())
    }

    pub fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or("local") {
            "production" | "prod" => Environment::Production,
            _ => Environment::Local,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}
