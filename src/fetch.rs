use std::future::Future;
use std::time::Duration;

use crate::error::ScrapeError;

/// Document source seam. The pipeline only ever asks for a URL's body; in
/// tests a canned fetcher answers from fixture strings instead of the
/// network.
pub trait Fetch: Send + Sync + 'static {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}

/// The real fetcher: one shared reqwest client per run, rustls TLS,
/// connect/request timeouts so a hung fetch cannot hang the pipeline.
/// No retry, no caching.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<HttpFetcher, ScrapeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}
