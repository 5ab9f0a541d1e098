use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no fetch provider can handle {0}")]
    Unsupported(Url),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with {status} for {url}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("{url} served {content_type}, not a media file")]
    NotMedia { url: Url, content_type: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {message}")]
    Process {
        program: String,
        status: ExitStatus,
        message: String,
    },

    #[error("error reading output of {program}: {source}")]
    Stream {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Local filesystem failures abort the process; everything else is a
    /// provider failure that gets reported and swallowed by the CLI.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_classification() {
        let fs = Error::filesystem(
            "create directory",
            "downloads",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(fs.is_filesystem());
        assert_eq!(fs.to_string(), "failed to create directory downloads: denied");

        let url = Url::parse("ftp://example.com/v.mp4").unwrap();
        assert!(!Error::Unsupported(url).is_filesystem());
    }
}
