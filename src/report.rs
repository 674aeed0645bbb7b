//! Final result set and its JSON file.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::aggregate;
use crate::region::Region;
use crate::search::SearchOutcome;
use crate::{Error, Listing};

/// The aggregated result of one search run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub total_results: usize,
    pub total_duplicates_skipped: usize,
    /// Seconds spent searching
    pub search_duration: f64,
    pub results_by_region: BTreeMap<Region, Vec<Listing>>,
    pub all_results: Vec<Listing>,
}

impl Report {
    pub fn from_outcome(outcome: SearchOutcome) -> Self {
        let total_results = outcome.listings.len();
        let aggregated = aggregate(outcome.listings);

        Self {
            timestamp: Utc::now(),
            total_results,
            total_duplicates_skipped: outcome.duplicates,
            search_duration: outcome.duration.as_secs_f64(),
            results_by_region: aggregated.by_region,
            all_results: aggregated.ranked,
        }
    }

    /// Write the report as `tech_gigs_<YYYYMMDD_HHMMSS>.json` under `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, Error> {
        fs::create_dir_all(dir)?;

        let stamp = self.timestamp.with_timezone(&Local).format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("tech_gigs_{}.json", stamp));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;

        Ok(path)
    }
}
