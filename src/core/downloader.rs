use crate::core::error::{Error, Result};
use crate::core::fetch::{ByteStream, FetchEngine};
use crate::utils::{discard_partial, ensure_dir, output_exists, output_path, OutputKind};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};
use url::Url;

pub struct Downloader {
    engine: FetchEngine,
}

impl Downloader {
    pub fn new(engine: FetchEngine) -> Self {
        Self { engine }
    }

    /// Saves the video behind `source_url` as `<folder>/<name>.mp4`.
    ///
    /// An existing file at that path is returned as-is without contacting
    /// any provider.
    pub async fn fetch_video(&self, source_url: &str, folder: &Path, name: &str) -> Result<PathBuf> {
        let output = output_path(folder, name, OutputKind::Video);

        if output_exists(&output).await? {
            info!("Video already downloaded: {}", output.display());
            return Ok(output);
        }

        let url = Url::parse(source_url).map_err(|source| Error::InvalidUrl {
            url: source_url.to_string(),
            source,
        })?;

        ensure_dir(folder).await?;

        let result = match self.engine.open(&url).await {
            Ok(stream) => write_stream(stream, &output).await,
            Err(e) => Err(e),
        };
        let written = match result {
            Ok(written) => written,
            Err(e) => {
                error!("Error downloading video: {}", e);
                discard_partial(&output).await;
                return Err(e);
            }
        };

        info!("Video downloaded ({} bytes)", written);
        Ok(output)
    }
}

async fn write_stream(mut stream: ByteStream, output: &Path) -> Result<u64> {
    let mut file = File::create(output)
        .await
        .map_err(|e| Error::filesystem("create", output, e))?;
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::filesystem("write", output, e))?;
        written += chunk.len() as u64;
        debug!("Wrote {} bytes to {}", written, output.display());
    }

    file.flush()
        .await
        .map_err(|e| Error::filesystem("flush", output, e))?;
    Ok(written)
}
