use crate::config::Config;
use crate::core::error::{Error, Result};
use crate::core::fetch::{ByteStream, FetchProvider};
use crate::providers::last_line;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, ChildStdout, Command};
use tokio::task::JoinHandle;
use tracing::debug;
use url::Url;

const CHUNK_SIZE: usize = 64 * 1024;

/// Resolves video pages through the `yt-dlp` executable and streams the
/// selected format from its stdout.
pub struct YtDlpFetcher {
    program: PathBuf,
    format: String,
}

impl YtDlpFetcher {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.yt_dlp.clone(),
            format: config.format.clone(),
        }
    }

    pub fn args(&self, url: &Url) -> Vec<String> {
        vec![
            "--quiet".to_string(),
            "--no-warnings".to_string(),
            "--no-playlist".to_string(),
            "-f".to_string(),
            self.format.clone(),
            "-o".to_string(),
            "-".to_string(),
            url.to_string(),
        ]
    }
}

#[async_trait]
impl FetchProvider for YtDlpFetcher {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    fn suitable(&self, url: &Url) -> bool {
        match url.host_str() {
            Some("youtu.be") => true,
            Some(host) => host == "youtube.com" || host.ends_with(".youtube.com"),
            None => false,
        }
    }

    async fn open(&self, url: &Url) -> Result<ByteStream> {
        let program = self.program.display().to_string();
        let args = self.args(url);
        debug!("Running {} {}", program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| Error::Stream {
            program: program.clone(),
            source: std::io::Error::other("stdout was not captured"),
        })?;
        let stderr = child.stderr.take();
        let diagnostics = tokio::spawn(async move {
            let mut text = String::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_string(&mut text).await;
            }
            text
        });

        let pipe = Pipe {
            program,
            child,
            stdout,
            diagnostics,
        };
        Ok(futures::stream::try_unfold(pipe, next_chunk).boxed())
    }
}

struct Pipe {
    program: String,
    child: Child,
    stdout: ChildStdout,
    diagnostics: JoinHandle<String>,
}

impl Pipe {
    async fn finish(mut self) -> Result<()> {
        let status = self.child.wait().await.map_err(|source| Error::Stream {
            program: self.program.clone(),
            source,
        })?;
        let diagnostics = self.diagnostics.await.unwrap_or_default();

        if status.success() {
            return Ok(());
        }
        Err(Error::Process {
            program: self.program,
            status,
            message: last_line(&diagnostics),
        })
    }
}

async fn next_chunk(mut pipe: Pipe) -> Result<Option<(Bytes, Pipe)>> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let read = pipe.stdout.read(&mut buf).await.map_err(|source| Error::Stream {
        program: pipe.program.clone(),
        source,
    })?;

    if read == 0 {
        pipe.finish().await?;
        return Ok(None);
    }

    buf.truncate(read);
    Ok(Some((Bytes::from(buf), pipe)))
}
