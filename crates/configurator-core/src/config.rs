//! Startup configuration read from `stream.config.json`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCAL_SERVER: &str = "127.0.0.1";
pub const DEFAULT_SIGNALING_PORT: u16 = 49100;

/// Where the streamed scene runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamSource {
    /// Remote cloud session
    Gfn,
    #[default]
    Local,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GfnConfig {
    pub catalog_client_id: String,
    pub client_id: String,
    pub cms_id: u64,
    /// Session is started ahead of time with the stage already open.
    pub prewarmed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalConfig {
    pub server: String,
    pub signaling_port: u16,
    pub media_port: Option<u16>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_LOCAL_SERVER.to_owned(),
            signaling_port: DEFAULT_SIGNALING_PORT,
            media_port: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub source: StreamSource,
    pub gfn: GfnConfig,
    pub local: LocalConfig,
}

impl StreamConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    #[inline]
    pub fn is_remote(&self) -> bool {
        self.source == StreamSource::Gfn
    }

    /// A cold remote session opens the stage after connecting, so the panel
    /// waits for the asset-load notification.
    #[inline]
    pub fn starts_loading(&self) -> bool {
        self.is_remote() && !self.gfn.prewarmed
    }
}
