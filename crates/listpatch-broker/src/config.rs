use std::{env, str::FromStr, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: `{value}`")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime settings for the broker, sourced from the environment.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    /// Applied to every outbound SharePoint call; no other timeout exists.
    pub request_timeout: Duration,
}

impl BrokerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("LISTPATCH_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("LISTPATCH_PORT", 8080u16)?;
        let timeout_secs = parse_var("LISTPATCH_HTTP_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        Err(_) => Ok(default),
    }
}
