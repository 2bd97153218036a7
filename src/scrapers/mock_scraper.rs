use crate::{HttpRequest, HttpResponse, ScraperError, ScraperResult, StatsTracker};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use super::Scraper;

#[derive(Clone)]
pub enum MockResponse {
    Page {
        status: u16,
        body: String,
        delay: Option<Duration>,
    },
    /// Simulates a transport failure (connection refused, timeout).
    Unreachable,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        MockResponse::Page {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        MockResponse::Page {
            status,
            body: String::new(),
            delay: None,
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        match self {
            MockResponse::Page { status, body, .. } => MockResponse::Page {
                status,
                body,
                delay: Some(delay),
            },
            other => other,
        }
    }
}

/// Serves canned pages keyed by URL and records the order URLs were
/// requested in. Unknown URLs answer 404.
#[derive(Clone)]
pub struct MockScraper {
    responses: Arc<HashMap<String, MockResponse>>,
    requested: Arc<RwLock<Vec<Url>>>,
    stats: StatsTracker,
}

impl MockScraper {
    pub fn new(responses: Vec<(&str, MockResponse)>) -> Self {
        Self {
            responses: Arc::new(
                responses
                    .into_iter()
                    .map(|(url, response)| (url.to_string(), response))
                    .collect(),
            ),
            requested: Arc::new(RwLock::new(Vec::new())),
            stats: StatsTracker::new(),
        }
    }

    pub fn requested(&self) -> Vec<Url> {
        self.requested.read().clone()
    }
}

#[async_trait]
impl Scraper for MockScraper {
    async fn fetch_single(&self, request: HttpRequest) -> ScraperResult<HttpResponse> {
        self.requested.write().push(request.url.clone());

        let (status, body, delay) = match self.responses.get(request.url.as_str()) {
            Some(MockResponse::Page {
                status,
                body,
                delay,
            }) => (*status, body.clone(), *delay),
            Some(MockResponse::Unreachable) => {
                return Err(ScraperError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    format!("unreachable: {}", request.url),
                )))
            }
            None => (404, String::new(), None),
        };

        if let Some(delay) = delay {
            sleep(delay).await;
        }

        Ok(HttpResponse {
            url: request.url,
            kind: request.kind,
            status,
            headers: HashMap::new(),
            body,
        })
    }

    fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    fn set_stats(&mut self, stats: StatsTracker) {
        self.stats = stats;
    }
}
