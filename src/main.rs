use clap::Parser;
use oasis_entries_duplicates::{duplicates, fetch, oasis, report, ScrapeError};
use scraper::Html;
use std::path::Path;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

const CACHE_RESPONSE_PATH: &str = "cache_response.txt";

#[derive(Debug, Parser)]
#[command(about = "Report duplicated runner registrations of an orioasis event")]
struct Args {
    /// Event id to check for duplicated entries
    #[arg(long)]
    event: String,

    /// Cache the entries per club page next to the binary
    #[arg(long)]
    cache_page: bool,

    /// Print the duplicates instead of emailing them
    #[arg(long)]
    skip_send_email: bool,

    /// Comma-separated list of runner names to ignore duplicates
    #[arg(long, value_delimiter = ',')]
    runner_names_to_ignore_duplicates: Vec<String>,
}

async fn run(args: Args) -> Result<(), ScrapeError> {
    let client = reqwest::Client::new();

    let cache_path = args.cache_page.then(|| Path::new(CACHE_RESPONSE_PATH));
    let html = fetch::entries_page(&client, &args.event, cache_path).await?;

    let entries = {
        let doc = Html::parse_document(&html);
        oasis::extract_runner_entries(&doc, &args.event)?
    };
    info!("Extracted {} runner entries", entries.len());

    let duplicates = duplicates::find_duplicates(entries, &args.runner_names_to_ignore_duplicates);

    if args.skip_send_email {
        println!("{}", serde_json::to_string_pretty(&duplicates)?);
        return Ok(());
    }

    if duplicates.is_empty() {
        println!("No duplicates found");
        return Ok(());
    }

    info!("Emailing {} duplicated entries", duplicates.len());
    let config = report::MailgunConfig::from_env()?;
    report::send_duplicates_email(&client, &config, &duplicates).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!("{}", err);
        std::process::exit(1);
    }
}
