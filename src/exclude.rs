//! False-positive exclusion for listing titles.
//!
//! Gig sections are full of postings that mention tech terms but are not
//! tech work: modeling and casting calls, paid studies and surveys, and
//! manual labor. Any single match drops the listing before it is
//! classified or recorded by the duplicate detector.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::Error;

/// Built-in exclusion patterns, checked in order.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    r"\bapply\s+(?:now|today)\b",
    r"\begg\s+donor\b",
    r"\bresearch\s+study\b",
    r"\bsurvey\b",
    r"\bfocus\s+group\b",
    r"\bmodels?\b",
    r"\bactors?\b",
    r"\bcastings?\b",
    r"\bphoto\s*shoot\b",
    r"hiring\s+immediately",
    r"start\s+tomorrow",
    r"\bclean(?:er|ing)\b",
    r"\broom\s+attendant\b",
    r"\bwarehouse\b",
    r"\bdriver\b",
    r"\bmoving\b",
    r"\bcaregiver\b",
    r"\btest\s+(?:study|survey)\b",
    r"\bonline\s+survey\b",
    r"\bbeta\s+test",
    r"\bpaid\s+study\b",
    r"\bresearch\s+participant\b",
];

static DEFAULT_FILTER: Lazy<ExclusionFilter> = Lazy::new(ExclusionFilter::default);

/// Check a title against the built-in exclusion patterns.
pub fn should_exclude(title: &str) -> bool {
    DEFAULT_FILTER.should_exclude(title)
}

/// Stateless predicate rejecting false-positive gig titles.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    patterns: Vec<Regex>,
}

impl ExclusionFilter {
    pub fn new(patterns: &[&str]) -> Result<Self, Error> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| Error::Pattern {
                        group: "exclude".to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// The first exclusion pattern that matches the title, if any.
    pub fn matched_pattern(&self, title: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.is_match(title))
            .map(|p| p.as_str())
    }

    pub fn should_exclude(&self, title: &str) -> bool {
        self.matched_pattern(title).is_some()
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(EXCLUDE_PATTERNS).expect("built-in exclusion patterns compile")
    }
}
