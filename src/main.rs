mod categorizer;
mod config;
mod model;
mod normalizer;
mod parser;
mod source;
mod storage;
mod utils;

use categorizer::categorize_products;
use config::{load_config, AppConfig};
use model::RawProduct;
use source::{load_all, HttpListingSource, JsonFileSource, ProductSource};
use std::env;
use std::error::Error;
use std::process::ExitCode;
use storage::write_json_atomic;
use tracing::{error, info};

const DEFAULT_CONFIG: &str = "config.json";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map_or("categorize", |s| s.as_str());
    let config_path = args.get(2).map_or(DEFAULT_CONFIG, |s| s.as_str());

    let config = match load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        "categorize" => run_categorize(&config).await,
        "scrape" => run_scrape(&config).await,
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{} failed: {}", command, e);
            ExitCode::FAILURE
        }
    }
}

/// Reads every configured input, groups the products and writes the categories.
async fn run_categorize(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let sources: Vec<Box<dyn ProductSource>> = config
        .inputs
        .iter()
        .map(|path| Box::new(JsonFileSource::new(path)) as Box<dyn ProductSource>)
        .collect();

    let products = load_all(&sources).await?;
    info!("Categorizing {} products", products.len());

    let categories = categorize_products(&products);
    info!("Built {} categories", categories.len());

    match &config.output {
        Some(path) => write_json_atomic(path, &categories).await?,
        None => println!("{}", serde_json::to_string_pretty(&categories)?),
    }
    Ok(())
}

/// Collects listing pages and saves them, plus the derived product list when configured.
async fn run_scrape(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let scrape = &config.scrape;
    let source = HttpListingSource::new(scrape.clone())?;

    let listings = source.scrape().await?;
    write_json_atomic(&scrape.listings_output, &listings).await?;
    info!(
        "Scraping done: {} products saved to {}",
        listings.len(),
        scrape.listings_output.display()
    );

    if let Some(path) = &scrape.products_output {
        let products: Vec<RawProduct> = listings
            .into_iter()
            .map(|l| l.into_product(&scrape.supermarket))
            .collect();
        write_json_atomic(path, &products).await?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: mercado-categorizer [categorize|scrape] [config.json]");
    eprintln!("  categorize  Group products from the configured inputs into categories");
    eprintln!("  scrape      Collect listing pages into a JSON file");
}
