use crate::core::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Transcoder: Send + Sync {
    fn name(&self) -> &'static str;
    async fn transcode(&self, input: &Path, output: &Path, options: &[String]) -> Result<()>;
}

/// Output settings for audio extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioProfile {
    pub codec: &'static str,
    pub channels: u8,
    pub bitrate: &'static str,
    pub sample_rate: u32,
}

impl AudioProfile {
    /// Stereo MP3 at 160 kbps, 48 kHz.
    pub const MP3: AudioProfile = AudioProfile {
        codec: "libmp3lame",
        channels: 2,
        bitrate: "160k",
        sample_rate: 48_000,
    };

    /// Output flags in the order the transcoder receives them. The video
    /// stream is always dropped.
    pub fn output_options(&self) -> Vec<String> {
        vec![
            "-vn".to_string(),
            "-acodec".to_string(),
            self.codec.to_string(),
            "-ac".to_string(),
            self.channels.to_string(),
            "-ab".to_string(),
            self.bitrate.to_string(),
            "-ar".to_string(),
            self.sample_rate.to_string(),
        ]
    }
}

impl Default for AudioProfile {
    fn default() -> Self {
        Self::MP3
    }
}
