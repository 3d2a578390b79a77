use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::scrape::error::ScrapeError;

// browser-like identity; some event pages refuse default client agents
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml";
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Client used for all page fetches: browser-like headers, bounded timeout.
pub fn build_client() -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(FETCH_TIMEOUT)
        .build()?;
    Ok(client)
}

/// Fetch raw HTML for a page. Non-success statuses are errors, not empty
/// pages.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let url = Url::parse(url)?;
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::UpstreamStatus(status));
    }
    let html = response.text().await?;
    debug!(%url, bytes = html.len(), "fetched page");
    Ok(html)
}
