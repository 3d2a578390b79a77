use reqwest::Client;
use tracing::info;

pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod types;

pub use error::ScrapeError;
pub use types::Event;

/// Fetch a page and extract event-like records from it.
///
/// Fetch problems (bad URL, transport failure, non-2xx upstream) surface as
/// `ScrapeError`; a page that simply contains no recognizable events yields
/// `Ok` with an empty list.
pub async fn scrape_events(client: &Client, url: &str) -> Result<Vec<Event>, ScrapeError> {
    let html = fetch::fetch_page(client, url).await?;
    let events = extract::extract_events(&html);
    info!(url, count = events.len(), "extraction finished");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scrapes_one_event_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/calendar")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(
                r#"<html><body>
                <article>
                  <h2>Spring Fair</h2>
                  <span class="date">03/21/2024</span>
                  <span class="location">Town Hall</span>
                </article>
                </body></html>"#,
            )
            .create_async()
            .await;

        let client = fetch::build_client().unwrap();
        let events = scrape_events(&client, &format!("{}/calendar", server.url()))
            .await
            .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Spring Fair");
        assert_eq!(events[0].date, "2024-03-21");
        assert_eq!(events[0].location.as_deref(), Some("Town Hall"));
    }

    #[tokio::test]
    async fn unreachable_host_surfaces_a_transport_error() {
        let client = fetch::build_client().unwrap();
        let err = scrape_events(&client, "http://127.0.0.1:1/")
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Http(_)));
    }
}
