use crate::parser::Selectors;
use std::time::Duration;
use url::Url;

pub const DEFAULT_LISTING_URL: &str = "https://www.global.golfzon.com/courses/about-course";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub listing_url: Url,
    /// Pause between two course fetches.
    pub delay: Duration,
    pub timeout: Duration,
    pub max_listing_pages: usize,
    pub user_agent: String,
    pub headers: Vec<(String, String)>,
    pub selectors: Selectors,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            listing_url: Url::parse(DEFAULT_LISTING_URL).expect("default listing URL is valid"),
            delay: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            max_listing_pages: 50,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
            selectors: Selectors::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_listing_url(mut self, url: Url) -> Self {
        self.listing_url = url;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_listing_pages(mut self, pages: usize) -> Self {
        self.max_listing_pages = pages.max(1);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_headers(mut self, headers: Vec<(&str, &str)>) -> Self {
        self.headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = PipelineConfig::default()
            .with_listing_url(Url::parse("http://localhost/list").unwrap())
            .with_delay(Duration::ZERO)
            .with_max_listing_pages(0)
            .with_headers(vec![("Accept-Language", "en")]);

        assert_eq!(config.listing_url.path(), "/list");
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.max_listing_pages, 1);
        assert_eq!(config.headers, vec![("Accept-Language".to_string(), "en".to_string())]);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
