// src/core/net.rs
// Page retrieval. Anything implementing `Fetch` can feed the pipeline;
// tests use canned documents, the CLI uses `HttpFetcher`.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::options::FetchOptions;
use crate::error::FetchError;

pub trait Fetch {
    /// Full text of the document at `url`.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP GET with a browser User-Agent.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .build()?;
        log::info!("HTTP fetcher ready (timeout: {}s)", opts.timeout.as_secs());
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        log::info!("Fetching page: {url}");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();
        if !content_type.contains("text/html") {
            log::warn!("Page might not be HTML: {content_type:?}");
        }

        let body = resp.text()?;
        log::info!("Page fetched successfully ({} bytes)", body.len());
        Ok(body)
    }
}
