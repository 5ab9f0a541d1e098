use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    /// Seconds allowed for establishing an HTTP connection. Transfers
    /// themselves are never timed out.
    pub connect_timeout: u64,
    pub ffmpeg: PathBuf,
    pub yt_dlp: PathBuf,
    /// yt-dlp format selector.
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: format!("vidgrab/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout: 30,
            ffmpeg: PathBuf::from("ffmpeg"),
            yt_dlp: PathBuf::from("yt-dlp"),
            format: "best".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
