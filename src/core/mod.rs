pub mod converter;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod transcode;

pub use converter::Converter;
pub use downloader::Downloader;
pub use error::{Error, Result};
pub use fetch::{ByteStream, FetchEngine, FetchProvider};
pub use transcode::{AudioProfile, Transcoder};
