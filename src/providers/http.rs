use crate::config::Config;
use crate::core::error::{Error, Result};
use crate::core::fetch::{ByteStream, FetchProvider};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Streams the response body of a plain HTTP(S) GET. Used for direct links
/// to media files.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchProvider for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    fn suitable(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
    }

    async fn open(&self, url: &Url) -> Result<ByteStream> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.clone(),
                status,
            });
        }

        if let Some(content_type) = text_content_type(&response) {
            return Err(Error::NotMedia {
                url: url.clone(),
                content_type,
            });
        }

        debug!(
            "Response for {}: {} ({} bytes)",
            url,
            status,
            response
                .content_length()
                .map_or_else(|| "unknown".to_string(), |len| len.to_string())
        );

        Ok(response.bytes_stream().map_err(Error::from).boxed())
    }
}

/// Web pages and other text bodies are never saved as video.
fn text_content_type(response: &reqwest::Response) -> Option<String> {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)?
        .to_str()
        .ok()?
        .trim()
        .to_ascii_lowercase();

    is_text_media_type(&content_type).then_some(content_type)
}

fn is_text_media_type(content_type: &str) -> bool {
    content_type.starts_with("text/")
}
