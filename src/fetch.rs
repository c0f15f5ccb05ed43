use crate::{ScrapeError, OASIS_ENTRIES_URL};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Resolve the entries-per-club page for an event.
///
/// With a cache path, an existing file short-circuits the network entirely;
/// a missing file is populated verbatim with the fetched body. Without one,
/// every call hits the network.
pub async fn entries_page(
    client: &reqwest::Client,
    event_id: &str,
    cache_path: Option<&Path>,
) -> Result<String, ScrapeError> {
    match cache_path {
        Some(path) if path.exists() => {
            debug!("Reading cached entries page from {}", path.display());
            read_cache(path)
        }
        Some(path) => {
            let html = fetch_entries_page(client, event_id).await?;
            write_cache(path, &html)?;
            debug!("Cached entries page to {}", path.display());
            Ok(html)
        }
        None => fetch_entries_page(client, event_id).await,
    }
}

async fn fetch_entries_page(
    client: &reqwest::Client,
    event_id: &str,
) -> Result<String, ScrapeError> {
    let url = format!(
        "{}?eventid={}&action=club_class&order=clubs.nick&task=&sh=&show_details=",
        OASIS_ENTRIES_URL, event_id
    );

    debug!("Fetching {}", url);
    let response = client.get(&url).send().await?;

    let status = response.status();
    let body = response.text().await?;
    if status != reqwest::StatusCode::OK {
        return Err(ScrapeError::FetchFailed { status, body });
    }

    info!("Fetched entries page ({} bytes)", body.len());
    Ok(body)
}

fn read_cache(path: &Path) -> Result<String, ScrapeError> {
    Ok(fs::read_to_string(path)?)
}

fn write_cache(path: &Path, html: &str) -> Result<(), ScrapeError> {
    fs::write(path, html)?;
    Ok(())
}
