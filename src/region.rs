//! Coarse region lookup for source identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

const WEST_COAST: &[&str] = &[
    "sfbay",
    "losangeles",
    "sandiego",
    "seattle",
    "portland",
    "sacramento",
    "lasvegas",
    "phoenix",
];

const MOUNTAIN: &[&str] = &["denver", "boulder", "saltlakecity", "albuquerque", "boise"];

const CENTRAL: &[&str] = &[
    "austin",
    "dallas",
    "houston",
    "chicago",
    "minneapolis",
    "kansascity",
];

/// Reporting region. Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "West Coast")]
    WestCoast,
    #[serde(rename = "Mountain")]
    Mountain,
    #[serde(rename = "Central")]
    Central,
    #[serde(rename = "East Coast")]
    EastCoast,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::WestCoast => "West Coast",
            Region::Mountain => "Mountain",
            Region::Central => "Central",
            Region::EastCoast => "East Coast",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Region for a source identifier.
///
/// Only the explicit West Coast, Mountain and Central lists are
/// geographic. Every other identifier, including Alaska, Hawaii, Canada,
/// territories and unknown codes, falls through to `EastCoast`.
pub fn region_for(source_id: &str) -> Region {
    if WEST_COAST.contains(&source_id) {
        Region::WestCoast
    } else if MOUNTAIN.contains(&source_id) {
        Region::Mountain
    } else if CENTRAL.contains(&source_id) {
        Region::Central
    } else {
        Region::EastCoast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_regions() {
        assert_eq!(region_for("sfbay"), Region::WestCoast);
        assert_eq!(region_for("phoenix"), Region::WestCoast);
        assert_eq!(region_for("boise"), Region::Mountain);
        assert_eq!(region_for("chicago"), Region::Central);
        assert_eq!(region_for("kansascity"), Region::Central);
    }

    #[test]
    fn test_unlisted_defaults_to_east_coast() {
        assert_eq!(region_for("boston"), Region::EastCoast);
        assert_eq!(region_for("honolulu"), Region::EastCoast);
        assert_eq!(region_for("eugene"), Region::EastCoast);
        assert_eq!(region_for("not-a-source"), Region::EastCoast);
        assert_eq!(region_for(""), Region::EastCoast);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(region_for("SFBAY"), Region::EastCoast);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Region::WestCoast.label(), "West Coast");
        assert_eq!(Region::EastCoast.to_string(), "East Coast");
        assert_eq!(
            serde_json::to_string(&Region::Mountain).unwrap(),
            "\"Mountain\""
        );
    }
}
