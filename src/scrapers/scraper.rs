use crate::{HttpRequest, HttpResponse, ScraperResult, StatsTracker};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};

/// Fetches the rendered HTML of one page.
///
/// Implementations only do transport; status handling is left to the
/// caller. `fetch` wraps `fetch_single` with logging and request stats.
#[async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch_single(&self, request: HttpRequest) -> ScraperResult<HttpResponse>;
    fn stats(&self) -> &StatsTracker;
    fn set_stats(&mut self, stats: StatsTracker);

    async fn fetch(&self, request: HttpRequest) -> ScraperResult<HttpResponse> {
        let start_time = Utc::now();
        info!("Fetching URL: {}", request.url);

        let response = self.fetch_single(request).await?;
        let duration = Utc::now().signed_duration_since(start_time);
        debug!(
            "Received response: url={}, status={}, body_length={}, elapsed={}ms",
            response.url,
            response.status,
            response.body.len(),
            duration.num_milliseconds()
        );

        self.stats()
            .record_request(response.status, response.body.len(), duration);
        Ok(response)
    }
}
