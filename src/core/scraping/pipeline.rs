use crate::core::PipelineConfig;
use crate::model::Course;
use crate::parser::{CourseParser, ListingEntry, ListingParser};
use crate::storage::DiskStorage;
use crate::{HttpRequest, HttpResponse, PageKind, Scraper, ScraperError, ScraperResult, StatsTracker};
use log::{debug, info, warn};
use std::collections::HashSet;
use tokio::time::sleep;

/// Listing -> course pages -> JSON file, one page at a time.
pub struct ScrapePipeline {
    scraper: Box<dyn Scraper>,
    config: PipelineConfig,
    listing_parser: ListingParser,
    course_parser: CourseParser,
    stats: StatsTracker,
}

impl ScrapePipeline {
    pub fn new(scraper: Box<dyn Scraper>, config: PipelineConfig) -> ScraperResult<Self> {
        info!("Initializing scrape pipeline for {}", config.listing_url);
        let stats = StatsTracker::new();
        let mut scraper = scraper;
        scraper.set_stats(stats.clone());

        Ok(Self {
            listing_parser: ListingParser::new(&config.selectors)?,
            course_parser: CourseParser::new(&config.selectors)?,
            scraper,
            config,
            stats,
        })
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    async fn fetch_page(&self, request: HttpRequest) -> ScraperResult<HttpResponse> {
        let response = self.scraper.fetch(request).await?;
        if !response.is_success() {
            return Err(ScraperError::FetchError {
                url: response.url,
                status: response.status,
            });
        }
        Ok(response)
    }

    /// Course links in listing order, following "next page" links until
    /// the listing runs out, loops back, hits `max_listing_pages`, or
    /// already holds `limit` links.
    pub async fn collect_listing(&self, limit: Option<usize>) -> ScraperResult<Vec<ListingEntry>> {
        let mut entries = Vec::new();
        let mut seen_courses = HashSet::new();
        let mut visited_pages = HashSet::new();
        let mut next = Some(self.config.listing_url.clone());

        while let Some(page_url) = next.take() {
            if visited_pages.len() >= self.config.max_listing_pages {
                debug!(
                    "Stopping at {} listing pages (max {})",
                    visited_pages.len(),
                    self.config.max_listing_pages
                );
                break;
            }
            if !visited_pages.insert(page_url.to_string()) {
                debug!("Listing page {} already visited", page_url);
                break;
            }

            let response = self
                .fetch_page(HttpRequest::new(page_url, PageKind::Listing))
                .await?;
            let page = self.listing_parser.parse(&response.body, &response.url);
            info!(
                "Listing page {} has {} course links",
                response.url,
                page.entries.len()
            );

            for entry in page.entries {
                if seen_courses.insert(entry.url.to_string()) {
                    entries.push(entry);
                }
            }

            if limit.is_some_and(|limit| entries.len() >= limit) {
                break;
            }
            next = page.next_page;
        }

        if entries.is_empty() {
            return Err(ScraperError::ExtractionError(format!(
                "no course links found on listing {}",
                self.config.listing_url
            )));
        }
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        Ok(entries)
    }

    async fn scrape_course(&self, entry: &ListingEntry) -> ScraperResult<Course> {
        let response = self
            .fetch_page(HttpRequest::new(entry.url.clone(), PageKind::Course))
            .await?;
        let course = self
            .course_parser
            .parse(&response.body, &response.url, Some(entry))?;
        Ok(course)
    }

    /// Scrapes up to `limit` courses in listing order. A course that fails
    /// to fetch or parse is logged and left out; only a listing failure
    /// aborts the run.
    pub async fn scrape(&self, limit: Option<usize>) -> ScraperResult<Vec<Course>> {
        let entries = self.collect_listing(limit).await?;
        let total = entries.len();
        info!("Found {} course links", total);

        let mut courses = Vec::with_capacity(total);
        for (idx, entry) in entries.iter().enumerate() {
            if idx > 0 && !self.config.delay.is_zero() {
                sleep(self.config.delay).await;
            }

            let label = entry.name.as_deref().unwrap_or(entry.url.as_str());
            match self.scrape_course(entry).await {
                Ok(course) => {
                    info!("[{}/{}] {} scraped", idx + 1, total, course.name);
                    self.stats.record_course();
                    courses.push(course);
                }
                Err(ScraperError::ParsingError(e)) => {
                    warn!("[{}/{}] {} skipped, parse failure: {}", idx + 1, total, label, e);
                    self.stats.record_parse_failure();
                }
                Err(e) => {
                    warn!("[{}/{}] {} skipped, fetch failure: {}", idx + 1, total, label, e);
                    self.stats.record_fetch_failure();
                }
            }
        }

        self.stats.finish();
        info!(
            "Scraped {} courses total ({} skipped)",
            courses.len(),
            total - courses.len()
        );
        Ok(courses)
    }

    /// `scrape`, then replace the stored file with the result.
    pub async fn run(&self, limit: Option<usize>, storage: &DiskStorage) -> ScraperResult<Vec<Course>> {
        let courses = self.scrape(limit).await?;
        storage.save(&courses)?;
        info!("Data saved to {}", storage.path().display());
        Ok(courses)
    }
}
