pub mod cli;
pub mod core;
pub mod http;
pub mod model;
pub mod parser;
pub mod scrapers;
pub mod search;
pub mod shell;
pub mod stats;
pub mod storage;

pub use core::{PipelineConfig, ScrapePipeline};
pub use core::{ScraperError, ScraperResult};
pub use http::{HttpRequest, HttpResponse, PageKind};
pub use model::{Course, Hole};
pub use parser::{CourseParser, ListingParser};
pub use scrapers::Scraper;
pub use search::SearchEngine;
pub use stats::StatsTracker;
pub use storage::{CourseStore, DiskStorage};
