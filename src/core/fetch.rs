use crate::core::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use url::Url;

pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Something that can turn a URL into the bytes of the best available
/// video for it.
#[async_trait]
pub trait FetchProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn suitable(&self, url: &Url) -> bool;
    async fn open(&self, url: &Url) -> Result<ByteStream>;
}

pub struct FetchEngine {
    pub providers: Vec<Box<dyn FetchProvider>>,
}

impl FetchEngine {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn register_provider(&mut self, provider: Box<dyn FetchProvider>) {
        self.providers.push(provider);
    }

    /// First registered provider that accepts `url` wins.
    pub fn provider_for(&self, url: &Url) -> Result<&dyn FetchProvider> {
        self.providers
            .iter()
            .find(|p| p.suitable(url))
            .map(|p| p.as_ref())
            .ok_or_else(|| Error::Unsupported(url.clone()))
    }

    pub async fn open(&self, url: &Url) -> Result<ByteStream> {
        let provider = self.provider_for(url)?;
        tracing::info!("Fetching {} with {}", url, provider.name());
        provider.open(url).await
    }
}

impl Default for FetchEngine {
    fn default() -> Self {
        Self::new()
    }
}
