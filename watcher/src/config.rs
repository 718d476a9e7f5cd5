use crate::catalog::default_catalog;
use anyhow::{Context, Result};
use arsha::{Region, TrackedItem};
use std::env;
use std::time::Duration;

pub const PRICE_CAP: u64 = 80_000_000_000;
pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct Config {
    pub region: Region,
    pub base_url: String,
    /// Highest listing price, in silver, worth an alert. Inclusive.
    pub price_cap: u64,
    pub interval: Duration,
    pub catalog: Vec<TrackedItem>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: Region::default(),
            base_url: arsha::BASE_URL.to_string(),
            price_cap: PRICE_CAP,
            interval: POLL_INTERVAL,
            catalog: default_catalog(),
        }
    }
}

impl Config {
    /// Compiled-in defaults with the region and API host overridable through
    /// `ARSHA_REGION` and `ARSHA_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(region) = lookup("ARSHA_REGION") {
            config.region = region
                .parse::<Region>()
                .with_context(|| format!("ARSHA_REGION={region}"))?;
        }
        if let Some(base_url) = lookup("ARSHA_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }
}
