use anyhow::{Context, Result};
use clap::Parser;
use rustyline::DefaultEditor;

use fairway::cli::{Cli, Command, ScrapeArgs, SearchArgs};
use fairway::scrapers::HttpScraper;
use fairway::shell::{print_query, Shell};
use fairway::{CourseStore, DiskStorage, ScrapePipeline};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("fairway", log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .parse_default_env()
        .init();

    match Cli::parse().command {
        Command::Scrape(args) => scrape(args).await,
        Command::Search(args) => search(args),
    }
}

async fn scrape(args: ScrapeArgs) -> Result<()> {
    let config = args.pipeline_config();
    let scraper = HttpScraper::from_config(&config).context("build HTTP client")?;
    let pipeline = ScrapePipeline::new(Box::new(scraper), config)?;
    let storage = DiskStorage::new(&args.out);

    let courses = pipeline
        .run(args.limit, &storage)
        .await
        .with_context(|| format!("scrape into {}", args.out.display()))?;

    println!("\nScraped {} courses total", courses.len());
    println!("Data saved to {}", storage.path().display());
    pipeline.stats().print_summary();
    Ok(())
}

fn search(args: SearchArgs) -> Result<()> {
    let store = CourseStore::load(&args.path)
        .with_context(|| format!("load courses from {}", args.path.display()))?;

    let mut stdout = std::io::stdout();
    match args.query()? {
        Some(query) => print_query(&store, &query, &mut stdout),
        None => {
            let editor = DefaultEditor::new().context("start line editor")?;
            Shell::new(&store, editor, stdout).run()
        }
    }
}
