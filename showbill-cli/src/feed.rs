//! Feed fetching.
//!
//! One unauthenticated GET per invocation: no retries, no caching. A
//! failed fetch is logged and the listing renders its empty state.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use showbill_core::{Event, parse_feed};
use tracing::{debug, warn};
use url::Url;

/// Overall request timeout. The feed is a small static file.
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Fetch the feed, falling back to an empty collection on any failure.
pub async fn fetch_events(url: &Url) -> Vec<Event> {
    match try_fetch(url).await {
        Ok(events) => {
            debug!(url = %url, count = events.len(), "fetched feed");
            events
        }
        Err(e) => {
            warn!(url = %url, "feed fetch failed, listing will be empty: {e:#}");
            Vec::new()
        }
    }
}

async fn try_fetch(url: &Url) -> Result<Vec<Event>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;

    if !response.status().is_success() {
        bail!("Feed request returned {}", response.status());
    }

    let body = response.text().await.context("Failed to read feed body")?;

    Ok(parse_feed(&body)?)
}
