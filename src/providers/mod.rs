pub mod ffmpeg;
pub mod http;
pub mod ytdlp;

pub use ffmpeg::FfmpegTranscoder;
pub use http::HttpFetcher;
pub use ytdlp::YtDlpFetcher;

use crate::config::Config;
use crate::core::{FetchEngine, Result};

/// yt-dlp for the sites it understands, plain HTTP for everything else.
pub fn default_engine(config: &Config) -> Result<FetchEngine> {
    let mut engine = FetchEngine::new();
    engine.register_provider(Box::new(YtDlpFetcher::new(config)));
    engine.register_provider(Box::new(HttpFetcher::new(config)?));
    Ok(engine)
}

/// Last non-empty line of a tool's stderr.
pub(crate) fn last_line(diagnostics: &str) -> String {
    diagnostics
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .unwrap_or("no diagnostic output")
        .to_string()
}
