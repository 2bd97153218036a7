use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder};
use std::collections::HashMap;
use thiserror::Error;

use super::Scraper;
use crate::core::PipelineConfig;
use crate::{HttpRequest, HttpResponse, ScraperResult, StatsTracker};

#[derive(Debug, Error)]
pub enum HttpScraperError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid header name: {0}")]
    InvalidHeaderName(#[from] header::InvalidHeaderName),
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

/// Plain HTTP page fetcher. Good enough for server-rendered catalogue pages.
#[derive(Clone)]
pub struct HttpScraper {
    client: Client,
    stats: StatsTracker,
}

impl HttpScraper {
    pub fn new() -> Result<Self, HttpScraperError> {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, HttpScraperError> {
        let mut header_map = header::HeaderMap::new();
        header_map.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        for (key, value) in &config.headers {
            let name = header::HeaderName::from_bytes(key.as_bytes())?;
            let value = header::HeaderValue::from_str(value)?;
            header_map.insert(name, value);
        }

        let client = ClientBuilder::new()
            .default_headers(header_map)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            stats: StatsTracker::new(),
        })
    }

    fn extract_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect()
    }
}

#[async_trait]
impl Scraper for HttpScraper {
    async fn fetch_single(&self, request: HttpRequest) -> ScraperResult<HttpResponse> {
        let response = self.client.get(request.url.clone()).send().await?;

        let status = response.status().as_u16();
        let headers = Self::extract_headers(&response);
        let body = response.text().await?;

        Ok(HttpResponse {
            url: request.url,
            kind: request.kind,
            status,
            headers,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::PageKind;
    use crate::ScraperError;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> Result<(HttpScraper, MockServer), HttpScraperError> {
        let server = MockServer::start().await;
        let scraper = HttpScraper::new()?;
        Ok((scraper, server))
    }

    #[tokio::test]
    async fn test_get_course_page() {
        let (scraper, mock_server) = setup().await.unwrap();

        Mock::given(method("GET"))
            .and(path("/courses/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><h1>Pine Valley</h1></html>")
                    .insert_header("content-type", "text/html"),
            )
            .mount(&mock_server)
            .await;

        let url = Url::parse(&mock_server.uri())
            .unwrap()
            .join("/courses/1")
            .unwrap();
        let response = scraper
            .fetch(HttpRequest::new(url, PageKind::Course))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.kind, PageKind::Course);
        assert_eq!(response.body, "<html><h1>Pine Valley</h1></html>");
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("text/html")
        );
        assert_eq!(scraper.stats().get_stats().total_requests, 1);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let (scraper, mock_server) = setup().await.unwrap();

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&mock_server.uri())
            .unwrap()
            .join("/missing")
            .unwrap();
        let response = scraper
            .fetch(HttpRequest::new(url, PageKind::Course))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert_eq!(scraper.stats().get_stats().failed_requests, 1);
    }

    #[tokio::test]
    async fn test_config_headers_are_sent() {
        let mock_server = MockServer::start().await;
        let config = PipelineConfig::default()
            .with_user_agent("CourseBot/1.0")
            .with_headers(vec![("accept-language", "en-US")]);
        let scraper = HttpScraper::from_config(&config).unwrap();

        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", "CourseBot/1.0"))
            .and(header("accept-language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&mock_server.uri()).unwrap();
        let response = scraper
            .fetch(HttpRequest::new(url, PageKind::Listing))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "ok");
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_http_error() {
        let mock_server = MockServer::start().await;
        let config = PipelineConfig::default().with_timeout(Duration::from_millis(50));
        let scraper = HttpScraper::from_config(&config).unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&mock_server.uri()).unwrap();
        let result = scraper.fetch(HttpRequest::new(url, PageKind::Course)).await;

        assert!(matches!(result, Err(ScraperError::HttpError(_))));
    }

    #[test]
    fn test_invalid_headers() {
        let config = PipelineConfig::default().with_headers(vec![("invalid\0header", "value")]);
        assert!(HttpScraper::from_config(&config).is_err());
    }
}
