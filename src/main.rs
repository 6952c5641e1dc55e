use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use url::Url;

use mate_scraper::assemble;
use mate_scraper::config::{CatalogConfig, SelectorSet, Selectors, DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT};
use mate_scraper::fetch::{Fetch, HttpFetcher};
use mate_scraper::output::{csv, table};
use mate_scraper::record::FieldShape;

#[derive(Parser)]
#[command(name = "mate_scraper", about = "Course catalog scraper for mate.academy")]
struct Cli {
    /// Listing-page origin to scrape
    #[arg(long, default_value = DEFAULT_BASE_URL, global = true)]
    base_url: Url,
    /// JSON file overriding the built-in CSS selector table
    #[arg(long, global = true)]
    selectors: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: discover, fetch, render table, write CSV
    Run {
        /// Output CSV path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
        /// Max courses to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Emit the 3-field record shape (name, description, study options)
        #[arg(long)]
        basic: bool,
        /// Concurrent detail fetches
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,
        /// Skip the CSV sink
        #[arg(long)]
        no_save: bool,
    },
    /// Discovery only: list course names and detail URLs, fetch nothing else
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let selectors = match &cli.selectors {
        Some(path) => Selectors::from_file(path)?,
        None => Selectors::default(),
    };

    match cli.command {
        Commands::Run {
            out,
            limit,
            basic,
            concurrency,
            no_save,
        } => {
            let config = CatalogConfig {
                base_url: cli.base_url,
                output: out,
                shape: if basic { FieldShape::BASIC } else { FieldShape::FULL },
                concurrency,
                limit,
                save_csv: !no_save,
                selectors,
            };
            run_pipeline(&config).await?;
        }
        Commands::List => {
            list_entries(&cli.base_url, &selectors).await?;
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

async fn run_pipeline(config: &CatalogConfig) -> anyhow::Result<()> {
    let fetcher = Arc::new(HttpFetcher::new()?);
    let catalog = assemble::build_catalog(fetcher, config).await?;

    print!("{}", table::render(&catalog));

    if config.save_csv {
        csv::write_catalog(&catalog, &config.output)?;
        println!("Saved {} courses to {}", catalog.len(), config.output.display());
    }

    Ok(())
}

async fn list_entries(base_url: &Url, selectors: &Selectors) -> anyhow::Result<()> {
    let sel = SelectorSet::compile(selectors)?;
    let fetcher = HttpFetcher::new()?;
    let listing = fetcher.get(base_url.as_str()).await?;
    let entries = assemble::discover(&listing, &sel, base_url)?;

    for entry in &entries {
        println!("{:<24} {}", entry.name, entry.url);
    }
    println!("\n{} courses", entries.len());
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
