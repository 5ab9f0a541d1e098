pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod utils;

pub use self::core::{AudioProfile, Converter, Downloader, Error, FetchEngine, FetchProvider, Transcoder};
pub use providers::{FfmpegTranscoder, HttpFetcher, YtDlpFetcher};
