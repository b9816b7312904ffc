//! Browser configuration.

use crate::error::{BrowserError, Result};
use serde::Deserialize;

/// Location of the members feed loaded at startup.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Browser configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Rows shown on one page.
    pub rows_per_page: usize,

    /// Max buffered events per subscriber before it is dropped.
    pub event_buffer_size: usize,

    /// Where the host fetches the initial record list from.
    pub source_url: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            rows_per_page: 10,
            event_buffer_size: 256,
            source_url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parse a JSON config document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows_per_page == 0 {
            return Err(BrowserError::InvalidConfig(
                "rows_per_page must be positive".to_string(),
            ));
        }
        if self.event_buffer_size == 0 {
            return Err(BrowserError::InvalidConfig(
                "event_buffer_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
