mod config;
mod errors;
mod scraping;

pub use config::{PipelineConfig, DEFAULT_LISTING_URL, DEFAULT_USER_AGENT};
pub use errors::{ScraperError, ScraperResult};
pub use scraping::ScrapePipeline;
