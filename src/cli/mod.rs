use crate::config::Config;
use crate::core::{Converter, Downloader, Error};
use crate::providers::{default_engine, FfmpegTranscoder};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vidgrab")]
#[command(about = "Download videos and convert them to MP3")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from a TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greets the user with their name
    Greet(GreetArgs),
    /// Download a video
    Download(DownloadArgs),
    /// Convert a video file to an MP3 audio file
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct GreetArgs {
    pub name: String,

    /// Capitalize the name
    #[arg(short, long)]
    pub capitalize: bool,
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[arg(value_name = "VIDEO_URL")]
    pub video_url: String,

    /// Output folder name
    #[arg(short, long, default_value = "downloads")]
    pub folder: PathBuf,

    /// Output file name (without extension)
    #[arg(short, long, default_value = "video")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[arg(value_name = "VIDEO_FILE_PATH")]
    pub video_file_path: PathBuf,

    /// Output folder name
    #[arg(short, long, default_value = "converted")]
    pub folder: PathBuf,

    /// Output file name (without extension)
    #[arg(short, long, default_value = "audio")]
    pub name: String,
}

pub fn greeting(name: &str, capitalize: bool) -> String {
    if capitalize {
        format!("Hello, {}!", name.to_uppercase())
    } else {
        format!("Hello, {}!", name)
    }
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Command::Greet(args) => {
                println!("{}", greeting(&args.name, args.capitalize));
            }
            Command::Download(args) => {
                let downloader = Downloader::new(default_engine(&config)?);
                let result = downloader
                    .fetch_video(&args.video_url, &args.folder, &args.name)
                    .await;
                report(result, "Video saved at")?;
            }
            Command::Convert(args) => {
                let converter = Converter::new(Box::new(FfmpegTranscoder::new(&config)));
                let result = converter
                    .convert_to_audio(&args.video_file_path, &args.folder, &args.name)
                    .await;
                report(result, "Audio file saved at")?;
            }
        }

        Ok(())
    }
}

/// Prints the outcome of a job. Provider failures are reported and
/// swallowed; filesystem failures are handed back to abort the process.
pub fn report(result: Result<PathBuf, Error>, label: &str) -> Result<()> {
    report_to(result, label, &mut io::stdout().lock(), &mut io::stderr().lock())
}

pub fn report_to(result: Result<PathBuf, Error>, label: &str, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    match result {
        Ok(path) => writeln!(out, "{}: {}", label, path.display())?,
        Err(e) if e.is_filesystem() => return Err(e.into()),
        Err(e) => writeln!(err, "An error occurred: {}", e)?,
    }
    Ok(())
}
