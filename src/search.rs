//! Whole-run orchestration.
//!
//! Every site × section pair is fetched in directory order and all raw
//! listings are funneled through one [`Pipeline`] sharing one
//! [`DedupeState`], so duplicate suppression sees every earlier listing of
//! the run.

use std::time::{Duration, Instant};

use crate::dedupe::DedupeState;
use crate::fetch::SourceFetcher;
use crate::pipeline::Pipeline;
use crate::sites::{select_sites, Section};
use crate::{Error, Listing};

/// What to search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Site names or identifiers; empty means every site
    pub sites: Vec<String>,
    pub sections: Vec<Section>,
    /// Look up posting dates for emitted listings
    pub enrich_dates: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            sections: Section::ALL.to_vec(),
            enrich_dates: true,
        }
    }
}

/// Result of one run, before aggregation.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Emitted listings in encounter order
    pub listings: Vec<Listing>,
    /// Raw listings fed to the pipeline
    pub evaluated: usize,
    /// Final duplicate count
    pub duplicates: usize,
    pub duration: Duration,
}

/// A single search run.
pub struct Search {
    pipeline: Pipeline,
}

impl Search {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Fetch and process every selected site and section.
    ///
    /// A fetch failure for one site/section is logged and skipped.
    pub fn run<F: SourceFetcher>(
        &self,
        fetcher: &mut F,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, Error> {
        let started = Instant::now();
        let sites = select_sites(&config.sites)?;
        let mut state = DedupeState::new();
        let mut listings = Vec::new();
        let mut evaluated = 0;

        tracing::info!(sites = sites.len(), "Starting search");

        for site in &sites {
            for &section in &config.sections {
                tracing::info!("Searching {} - {}", site.name, section.label());

                let raws = match fetcher.fetch_listings(site, section) {
                    Ok(raws) => raws,
                    Err(e) => {
                        tracing::warn!("Error searching {} - {}: {}", site.name, section, e);
                        continue;
                    }
                };

                for raw in &raws {
                    evaluated += 1;
                    let listing = if config.enrich_dates {
                        self.pipeline
                            .process(raw, &mut state, |link| fetcher.posting_date(link))
                    } else {
                        self.pipeline.process(raw, &mut state, |_| None)
                    };
                    listings.extend(listing);
                }
            }
        }

        Ok(SearchOutcome {
            listings,
            evaluated,
            duplicates: state.duplicate_count(),
            duration: started.elapsed(),
        })
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new(Pipeline::default())
    }
}
