//! Human-readable run summary, written through `tracing`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::report::Report;
use crate::{CategoryTag, Listing};

/// Count listings per category tag.
pub fn category_counts(listings: &[Listing]) -> BTreeMap<CategoryTag, usize> {
    let mut counts = BTreeMap::new();
    for listing in listings {
        for &tag in listing.categories() {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}

/// Log totals, per-region category counts and the top `top_n` listings.
pub fn log_summary(report: &Report, saved_to: Option<&Path>, top_n: usize) {
    tracing::info!("Search Summary:");
    tracing::info!("Total unique gigs found: {}", report.total_results);
    tracing::info!("Duplicate listings skipped: {}", report.total_duplicates_skipped);
    tracing::info!("Search duration: {:.2} seconds", report.search_duration);
    if let Some(path) = saved_to {
        tracing::info!("Results saved to: {}", path.display());
    }

    for (region, listings) in &report.results_by_region {
        tracing::info!("{} - {} gigs found", region, listings.len());
        for (tag, count) in category_counts(listings) {
            tracing::info!("  {}: {} gigs", tag, count);
        }
    }

    if top_n == 0 || report.all_results.is_empty() {
        return;
    }

    tracing::info!("Top matching gigs:");
    for listing in report.all_results.iter().take(top_n) {
        let categories: Vec<&str> = listing.categories().iter().map(|c| c.as_str()).collect();
        let date = listing.posting_date.as_ref();
        let posted = date.and_then(|d| d.datetime.as_deref()).unwrap_or("unknown");
        let relative = date.and_then(|d| d.relative.as_deref()).unwrap_or("unknown");

        tracing::info!("{}", "=".repeat(50));
        tracing::info!("Site: {} ({})", listing.source_name, listing.section);
        tracing::info!("Title: {}", listing.title);
        tracing::info!("Categories: {}", categories.join(", "));
        tracing::info!("Location: {}", listing.location);
        tracing::info!("Posted: {} ({})", posted, relative);
        tracing::info!("Link: {}", listing.link);
    }
}
