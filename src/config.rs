//! Runtime configuration read from `CART_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;
use crate::storage::DEFAULT_CART_KEY;

pub const CATALOG_URL_VAR: &str = "CART_CATALOG_URL";
pub const CATALOG_TIMEOUT_VAR: &str = "CART_CATALOG_TIMEOUT_SECS";
pub const STORAGE_DIR_VAR: &str = "CART_STORAGE_DIR";
pub const STORAGE_KEY_VAR: &str = "CART_STORAGE_KEY";
pub const CHANNEL_BUFFER_VAR: &str = "CART_CHANNEL_BUFFER";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Remote catalog; `None` means the in-process inventory is used.
    pub catalog_url: Option<Url>,
    pub catalog_timeout: Duration,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub channel_buffer: usize,
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let catalog_url = var(CATALOG_URL_VAR)
            .map(|raw| {
                Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
                    key: CATALOG_URL_VAR,
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let timeout_secs = match var(CATALOG_TIMEOUT_VAR) {
            Some(raw) => parse_positive(CATALOG_TIMEOUT_VAR, &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let storage_dir = match var(STORAGE_DIR_VAR) {
            Some(raw) => PathBuf::from(raw),
            None => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("cart-store"),
        };

        let channel_buffer = match var(CHANNEL_BUFFER_VAR) {
            Some(raw) => parse_positive(CHANNEL_BUFFER_VAR, &raw)?,
            None => DEFAULT_CHANNEL_BUFFER,
        };

        Ok(Self {
            catalog_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
            storage_dir,
            storage_key: var(STORAGE_KEY_VAR).unwrap_or_else(|| DEFAULT_CART_KEY.to_string()),
            channel_buffer,
        })
    }
}

fn parse_positive<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let value: T = raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })?;
    if value == T::default() {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
