use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::core::{PipelineConfig, DEFAULT_LISTING_URL, DEFAULT_USER_AGENT};
use crate::search::{Query, QueryError, YardageRange};
use crate::storage::DEFAULT_COURSES_FILE;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape golf course tee data and search it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape the course catalogue into a JSON file
    Scrape(ScrapeArgs),
    /// Search a scraped JSON file
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Only scrape the first N courses of the listing
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output file; replaced on every run
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_COURSES_FILE)]
    pub out: PathBuf,

    #[arg(long, value_name = "URL", default_value = DEFAULT_LISTING_URL)]
    pub listing_url: Url,

    /// Pause between course page fetches
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pub delay_ms: u64,

    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, value_name = "N", default_value_t = 50)]
    pub max_listing_pages: usize,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl ScrapeArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_listing_url(self.listing_url.clone())
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_listing_pages(self.max_listing_pages)
            .with_user_agent(self.user_agent.clone())
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Course file written by `scrape`
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_COURSES_FILE)]
    pub path: PathBuf,

    /// Name substring; any filter flag runs one query instead of the shell
    #[arg(long)]
    pub name: Option<String>,

    /// Country name or 3-letter code
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub tee: Option<String>,

    /// Yardage range such as 6000-6500, >=6000 or <=6500
    #[arg(long)]
    pub yardage: Option<String>,
}

impl SearchArgs {
    /// The one-shot query, if any filter flag was given.
    pub fn query(&self) -> Result<Option<Query>, QueryError> {
        if self.name.is_none()
            && self.country.is_none()
            && self.tee.is_none()
            && self.yardage.is_none()
        {
            return Ok(None);
        }

        let range = match &self.yardage {
            Some(text) => YardageRange::parse(text)?,
            None => YardageRange::default(),
        };
        Ok(Some(
            Query::default()
                .with_name(self.name.as_deref().unwrap_or_default())
                .with_country(self.country.as_deref().unwrap_or_default())
                .with_tee(self.tee.as_deref().unwrap_or_default())
                .with_yardage(range),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_defaults() {
        let cli = Cli::try_parse_from(["fairway", "scrape"]).unwrap();
        let Command::Scrape(args) = cli.command else {
            panic!("expected scrape");
        };
        assert_eq!(args.limit, None);
        assert_eq!(args.out, PathBuf::from("golf_courses.json"));

        let config = args.pipeline_config();
        assert_eq!(config.listing_url.as_str(), DEFAULT_LISTING_URL);
        assert_eq!(config.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_scrape_limit_and_overrides() {
        let cli = Cli::try_parse_from([
            "fairway",
            "scrape",
            "--limit",
            "2",
            "--delay-ms",
            "0",
            "--listing-url",
            "http://localhost:8080/list",
        ])
        .unwrap();
        let Command::Scrape(args) = cli.command else {
            panic!("expected scrape");
        };
        assert_eq!(args.limit, Some(2));
        assert_eq!(args.pipeline_config().delay, Duration::ZERO);
        assert_eq!(args.listing_url.port(), Some(8080));
    }

    #[test]
    fn test_bad_limit_rejected() {
        assert!(Cli::try_parse_from(["fairway", "scrape", "--limit", "two"]).is_err());
    }

    #[test]
    fn test_search_interactive_by_default() {
        let cli = Cli::try_parse_from(["fairway", "search", "--path", "data.json"]).unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.path, PathBuf::from("data.json"));
        assert_eq!(args.query(), Ok(None));
    }

    #[test]
    fn test_search_one_shot_query() {
        let cli = Cli::try_parse_from([
            "fairway", "search", "--tee", "White", "--yardage", "6000-6500",
        ])
        .unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        let query = args.query().unwrap().unwrap();
        assert_eq!(query.tee.as_deref(), Some("White"));
        assert_eq!(query.yardage, YardageRange::new(6000, 6500).unwrap());
        assert_eq!(query.name, None);
    }
}
