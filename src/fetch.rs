//! Source fetching seam.
//!
//! Network access, markup parsing and rate limiting belong to a
//! [`SourceFetcher`]. The crate ships [`DumpFetcher`], which serves
//! listings from a JSON dump of an earlier scrape.
//!
//! Dump layout:
//!
//! ```json
//! {
//!   "listings": [
//!     {"site_code": "sfbay", "section": "cpg", "title": "...", "link": "...",
//!      "location": "...", "price": "..."}
//!   ],
//!   "dates": {
//!     "https://...": {"datetime": "...", "formatted": "...", "relative": "..."}
//!   }
//! }
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::sites::{find_site, Section, Site};
use crate::{Error, PostingDate, RawListing};

/// Provider of raw listings and posting dates.
pub trait SourceFetcher {
    /// Raw listings for one source and section, in page order.
    fn fetch_listings(&mut self, site: &Site, section: Section) -> Result<Vec<RawListing>, Error>;

    /// Posting date from a listing's detail page.
    ///
    /// `None` covers both network failures and pages without a date.
    fn posting_date(&mut self, link: &str) -> Option<PostingDate>;
}

#[derive(Debug, Deserialize)]
struct Dump {
    #[serde(default)]
    listings: Vec<DumpRecord>,
    #[serde(default)]
    dates: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DumpRecord {
    site_code: String,
    section: String,
    title: Option<String>,
    link: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    price: Option<String>,
}

#[derive(Debug, Clone)]
struct StoredListing {
    title: String,
    link: String,
    location: String,
    price: String,
}

/// Fetcher backed by a JSON dump of scraped listings.
#[derive(Debug, Default)]
pub struct DumpFetcher {
    listings: HashMap<(&'static str, Section), Vec<StoredListing>>,
    dates: HashMap<String, PostingDate>,
    skipped: usize,
}

impl DumpFetcher {
    /// Load a dump file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a dump from a JSON string.
    ///
    /// A record with a missing or `null` title or link is rejected: that is
    /// a broken scrape, not an empty listing. Records whose `site_code` is not
    /// in the site directory are skipped with a warning and not counted.
    /// A date block that does not parse is dropped for that link only.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let dump: Dump = serde_json::from_str(json)?;
        let mut listings: HashMap<(&'static str, Section), Vec<StoredListing>> = HashMap::new();
        let mut skipped = 0;

        for (index, record) in dump.listings.into_iter().enumerate() {
            let section = Section::from_code(&record.section).ok_or_else(|| {
                Error::InvalidInput(format!(
                    "listing {}: unknown section {:?}",
                    index, record.section
                ))
            })?;
            let title = record
                .title
                .ok_or_else(|| Error::InvalidInput(format!("listing {}: title is null", index)))?;
            let link = record
                .link
                .ok_or_else(|| Error::InvalidInput(format!("listing {}: link is null", index)))?;

            let Some(site) = find_site(&record.site_code) else {
                tracing::warn!(
                    index,
                    site_code = %record.site_code,
                    "Skipping listing from unknown site"
                );
                skipped += 1;
                continue;
            };

            listings
                .entry((site.code, section))
                .or_default()
                .push(StoredListing {
                    title,
                    link,
                    location: record.location.unwrap_or_default(),
                    price: record.price.unwrap_or_default(),
                });
        }

        let mut dates = HashMap::with_capacity(dump.dates.len());
        for (link, value) in dump.dates {
            match serde_json::from_value::<PostingDate>(value) {
                Ok(date) if date.is_empty() => {
                    tracing::debug!(%link, "empty posting date block");
                }
                Ok(date) => {
                    dates.insert(link, date);
                }
                Err(e) => {
                    tracing::debug!(%link, error = %e, "unreadable posting date block");
                }
            }
        }

        Ok(Self {
            listings,
            dates,
            skipped,
        })
    }

    /// Total number of listings in the dump.
    pub fn len(&self) -> usize {
        self.listings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records dropped at load because their site is unknown.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl SourceFetcher for DumpFetcher {
    fn fetch_listings(&mut self, site: &Site, section: Section) -> Result<Vec<RawListing>, Error> {
        let stored = match self.listings.get(&(site.code, section)) {
            Some(stored) => stored,
            None => return Ok(Vec::new()),
        };

        Ok(stored
            .iter()
            .map(|l| {
                RawListing::new(l.title.clone(), l.link.clone())
                    .with_source(site.name, site.code)
                    .with_section(section.as_str())
                    .with_location(l.location.clone())
                    .with_price(l.price.clone())
            })
            .collect())
    }

    fn posting_date(&mut self, link: &str) -> Option<PostingDate> {
        self.dates.get(link).cloned()
    }
}
