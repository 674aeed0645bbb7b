//! Region grouping and relevance ranking.

use std::collections::BTreeMap;

use crate::region::{region_for, Region};
use crate::Listing;

/// Listings grouped by region plus the global ranking.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Region → listings in encounter order; only non-empty regions
    pub by_region: BTreeMap<Region, Vec<Listing>>,
    /// All listings, most category tags first
    pub ranked: Vec<Listing>,
}

/// Group listings by the region of their source and rank them.
pub fn aggregate(listings: Vec<Listing>) -> Aggregate {
    let mut by_region: BTreeMap<Region, Vec<Listing>> = BTreeMap::new();
    for listing in &listings {
        by_region
            .entry(region_for(&listing.source_id))
            .or_default()
            .push(listing.clone());
    }

    let mut ranked = listings;
    rank(&mut ranked);

    Aggregate { by_region, ranked }
}

/// Sort by number of category tags, descending.
///
/// The sort is stable: listings with the same number of tags keep their
/// encounter order.
pub fn rank(listings: &mut [Listing]) {
    listings.sort_by(|a, b| b.categories().len().cmp(&a.categories().len()));
}
