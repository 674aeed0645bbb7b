//! Category tags assigned by the keyword classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The technical domain a listing title matched.
///
/// Declaration order is the canonical order of tags in a listing's
/// category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    WebDev,
    SoftwareDev,
    MobileDev,
    TechMisc,
}

impl CategoryTag {
    pub const ALL: [CategoryTag; 4] = [
        CategoryTag::WebDev,
        CategoryTag::SoftwareDev,
        CategoryTag::MobileDev,
        CategoryTag::TechMisc,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryTag::WebDev => "web_dev",
            CategoryTag::SoftwareDev => "software_dev",
            CategoryTag::MobileDev => "mobile_dev",
            CategoryTag::TechMisc => "tech_misc",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "web_dev" => Some(CategoryTag::WebDev),
            "software_dev" => Some(CategoryTag::SoftwareDev),
            "mobile_dev" => Some(CategoryTag::MobileDev),
            "tech_misc" => Some(CategoryTag::TechMisc),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_as_str() {
        assert_eq!(CategoryTag::WebDev.as_str(), "web_dev");
        assert_eq!(CategoryTag::SoftwareDev.as_str(), "software_dev");
        assert_eq!(CategoryTag::MobileDev.as_str(), "mobile_dev");
        assert_eq!(CategoryTag::TechMisc.as_str(), "tech_misc");
    }

    #[test]
    fn test_tag_from_str() {
        assert_eq!(CategoryTag::from_str("web_dev"), Some(CategoryTag::WebDev));
        assert_eq!(CategoryTag::from_str("TECH_MISC"), Some(CategoryTag::TechMisc));
        assert_eq!(CategoryTag::from_str("devops"), None);
    }

    #[test]
    fn test_tag_round_trips_through_all() {
        for tag in CategoryTag::ALL {
            assert_eq!(CategoryTag::from_str(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_tag_serializes_snake_case() {
        let json = serde_json::to_string(&CategoryTag::MobileDev).unwrap();
        assert_eq!(json, "\"mobile_dev\"");
    }
}
