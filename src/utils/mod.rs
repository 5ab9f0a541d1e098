use crate::core::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Video,
    Audio,
}

impl OutputKind {
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Video => "mp4",
            OutputKind::Audio => "mp3",
        }
    }
}

/// `<folder>/<name>.<ext>`; touches nothing on disk.
pub fn output_path(folder: &Path, name: &str, kind: OutputKind) -> PathBuf {
    folder.join(format!("{}.{}", name, kind.extension()))
}

pub async fn output_exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::filesystem("check", path, e))
}

/// Creates `dir` if it is missing. Parents are not created.
pub async fn ensure_dir(dir: &Path) -> Result<()> {
    match tokio::fs::create_dir(dir).await {
        Ok(()) => {
            debug!("Created directory {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => match tokio::fs::metadata(dir).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            _ => Err(Error::filesystem("create directory", dir, e)),
        },
        Err(e) => Err(Error::filesystem("create directory", dir, e)),
    }
}

/// Best-effort cleanup of a half-written output file.
pub async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            tracing::warn!("Could not remove partial file {}: {}", path.display(), e);
        }
    }
}
