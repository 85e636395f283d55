use crate::extract;
use crate::fetch::{HttpFetcher, PageSource};
use crate::output;
use crate::types::{Extracted, ScrapeConfig, ScrapeSummary};
use anyhow::Result;
use noi_model::snapshot::{DATA_JS, DATA_JSON};
use noi_model::{PageResult, Target};
use std::path::Path;

/// Scrape every configured page and write `data.json` and `data.js` into `output_dir`.
///
/// Page failures are logged and recorded as empty results; only a failure to
/// build the HTTP client or to write the output files is returned as an error.
pub async fn run(config: &ScrapeConfig, output_dir: &Path) -> Result<ScrapeSummary> {
    let fetcher = HttpFetcher::new(&config.fetch)?;
    let results = scrape(&fetcher, config).await;

    output::write_snapshot(&results, output_dir)?;

    let summary = ScrapeSummary {
        pages: results.len(),
        empty: results.iter().filter(|r| r.is_empty()).count(),
    };
    tracing::info!(
        empty = summary.empty,
        "Done! Saved {} pages to {DATA_JSON} and {DATA_JS}",
        summary.pages
    );

    Ok(summary)
}

/// Fetch and extract each target in order, one at a time.
///
/// Always returns one result per target, in target order.
pub async fn scrape<S: PageSource>(source: &S, config: &ScrapeConfig) -> Vec<PageResult> {
    let total = config.targets.len();
    let mut results = Vec::with_capacity(total);

    tracing::info!("Scraping {total} pages...");

    for (i, target) in config.targets.iter().enumerate() {
        let n = i + 1;
        tracing::info!(id = %target.id, "[{n}/{total}] Fetching {}...", target.title);

        match fetch_and_extract(source, target).await {
            Ok(content) => {
                tracing::info!(
                    id = %target.id,
                    "OK - {} characters",
                    content.full_text.chars().count()
                );
                results.push(PageResult::from_target(
                    target,
                    content.full_text,
                    content.translation,
                ));
            }
            Err(e) => {
                tracing::error!(id = %target.id, url = %target.url, "ERROR: {e:#}");
                results.push(PageResult::empty(target));
            }
        }

        if n < total && !config.delay.is_zero() {
            tokio::time::sleep(config.delay).await;
        }
    }

    results
}

async fn fetch_and_extract<S: PageSource>(source: &S, target: &Target) -> Result<Extracted> {
    let html = source.fetch(&target.url).await?;
    Ok(extract::extract_content(&html, &target.id))
}
