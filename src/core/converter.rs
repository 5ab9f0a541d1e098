use crate::core::error::Result;
use crate::core::transcode::{AudioProfile, Transcoder};
use crate::utils::{discard_partial, ensure_dir, output_exists, output_path, OutputKind};
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub struct Converter {
    transcoder: Box<dyn Transcoder>,
    profile: AudioProfile,
}

impl Converter {
    pub fn new(transcoder: Box<dyn Transcoder>) -> Self {
        Self {
            transcoder,
            profile: AudioProfile::MP3,
        }
    }

    /// Extracts the audio of `video` into `<folder>/<name>.mp3`, skipping the
    /// work when that file already exists.
    pub async fn convert_to_audio(&self, video: &Path, folder: &Path, name: &str) -> Result<PathBuf> {
        let output = output_path(folder, name, OutputKind::Audio);

        if output_exists(&output).await? {
            info!("Audio file already converted: {}", output.display());
            return Ok(output);
        }

        ensure_dir(folder).await?;

        let options = self.profile.output_options();
        if let Err(e) = self.transcoder.transcode(video, &output, &options).await {
            error!("{} error: {}", self.transcoder.name(), e);
            discard_partial(&output).await;
            return Err(e);
        }

        info!("{} process completed", self.transcoder.name());
        Ok(output)
    }
}
