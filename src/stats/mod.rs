use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ScrapingStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub bytes_downloaded: usize,
    pub status_codes: BTreeMap<u16, usize>,
    pub average_response_time: f64, // in milliseconds
    pub courses_scraped: usize,
    pub fetch_failures: usize,
    pub parse_failures: usize,
}

impl ScrapingStats {
    pub fn courses_skipped(&self) -> usize {
        self.fetch_failures + self.parse_failures
    }
}

/// Shared counters for one scrape run. Clones share the same numbers.
#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<ScrapingStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(ScrapingStats {
                start_time: Utc::now(),
                end_time: None,
                total_requests: 0,
                successful_requests: 0,
                failed_requests: 0,
                bytes_downloaded: 0,
                status_codes: BTreeMap::new(),
                average_response_time: 0.0,
                courses_scraped: 0,
                fetch_failures: 0,
                parse_failures: 0,
            })),
        }
    }

    pub fn record_request(&self, status: u16, size: usize, duration: Duration) {
        let mut stats = self.stats.write();
        stats.total_requests += 1;

        if status < 400 {
            stats.successful_requests += 1;
        } else {
            stats.failed_requests += 1;
        }

        *stats.status_codes.entry(status).or_insert(0) += 1;
        stats.bytes_downloaded += size;

        let current_total = stats.average_response_time * (stats.total_requests - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_response_time = (current_total + new_duration) / stats.total_requests as f64;
    }

    pub fn record_course(&self) {
        self.stats.write().courses_scraped += 1;
    }

    pub fn record_fetch_failure(&self) {
        self.stats.write().fetch_failures += 1;
    }

    pub fn record_parse_failure(&self) {
        self.stats.write().parse_failures += 1;
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn get_stats(&self) -> ScrapingStats {
        self.stats.read().clone()
    }

    pub fn print_summary(&self) {
        let stats = self.stats.read();
        let duration = stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time);
        let seconds = duration.num_milliseconds() as f64 / 1000.0;

        println!("\nScraping Statistics:");
        println!("===================");
        println!("Duration: {:.2} seconds ({:.2} minutes)", seconds, seconds / 60.0);
        println!("Courses Scraped: {}", stats.courses_scraped);
        println!(
            "Courses Skipped: {} (fetch: {}, parse: {})",
            stats.courses_skipped(),
            stats.fetch_failures,
            stats.parse_failures
        );
        println!("Total Requests: {}", stats.total_requests);
        println!("Failed Requests: {}", stats.failed_requests);
        println!(
            "Data Downloaded: {:.2} MB",
            stats.bytes_downloaded as f64 / 1_000_000.0
        );
        println!(
            "Average Response Time: {:.2}ms",
            stats.average_response_time
        );

        println!("\nStatus Codes:");
        for (code, count) in &stats.status_codes {
            println!("  {}: {}", code, count);
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_counters_and_average() {
        let tracker = StatsTracker::new();
        tracker.record_request(200, 100, Duration::milliseconds(10));
        tracker.record_request(404, 50, Duration::milliseconds(30));

        let stats = tracker.get_stats();
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.successful_requests, 1);
        assert_eq!(stats.failed_requests, 1);
        assert_eq!(stats.bytes_downloaded, 150);
        assert_eq!(stats.status_codes.get(&404), Some(&1));
        assert!((stats.average_response_time - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clones_share_counters() {
        let tracker = StatsTracker::new();
        let other = tracker.clone();
        other.record_course();
        other.record_parse_failure();
        tracker.record_fetch_failure();

        let stats = tracker.get_stats();
        assert_eq!(stats.courses_scraped, 1);
        assert_eq!(stats.courses_skipped(), 2);
    }
}
