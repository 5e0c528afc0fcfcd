use anyhow::Result;
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use crate::client::{ClientConfig, API_HOST, DEFAULT_TIMEOUT};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub api_key: Secret<String>,
    pub base_url: Option<String>,
    /// Seconds; `0` disables the timeout.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Reads `file_name` if it exists, then applies `TORN_*` environment
    /// variables on top.
    pub fn from_file(file_name: &str) -> Result<Self> {
        let conf = config::Config::builder()
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(config::Environment::with_prefix("TORN"))
            .build()?;
        Ok(conf.try_deserialize()?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            None => Some(DEFAULT_TIMEOUT),
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        }
    }
}

impl From<Config> for ClientConfig {
    fn from(item: Config) -> Self {
        let timeout = item.timeout();
        Self {
            api_key: item.api_key,
            base_url: item.base_url.unwrap_or_else(|| API_HOST.to_string()),
            timeout,
            ..ClientConfig::new("")
        }
    }
}
