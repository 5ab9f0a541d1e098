use crate::config::Config;
use crate::core::error::{Error, Result};
use crate::core::transcode::Transcoder;
use crate::providers::last_line;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

pub struct FfmpegTranscoder {
    program: PathBuf,
}

impl FfmpegTranscoder {
    pub fn new(config: &Config) -> Self {
        Self {
            program: config.ffmpeg.clone(),
        }
    }

    pub fn args(input: &Path, output: &Path, options: &[String]) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(input.into());
        args.extend(options.iter().map(OsString::from));
        args.push("-y".into());
        args.push(output.into());
        args
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &'static str {
        "FFmpeg"
    }

    async fn transcode(&self, input: &Path, output: &Path, options: &[String]) -> Result<()> {
        let program = self.program.display().to_string();
        let args = Self::args(input, output, options);
        debug!("Running {} {:?}", program, args);

        let result = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        if result.status.success() {
            return Ok(());
        }
        Err(Error::Process {
            program,
            status: result.status,
            message: last_line(&String::from_utf8_lossy(&result.stderr)),
        })
    }
}
