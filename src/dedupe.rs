//! Title normalization and duplicate detection.
//!
//! A listing is a duplicate when its normalized title or its raw link has
//! already been seen in the current run. Title matching catches re-posts
//! under new links; link matching catches the same posting scraped twice
//! (for example from two sections). Links are compared as exact strings.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

/// Canonicalize a title for duplicate comparison.
///
/// Lower-cases the title and strips every non-word character, so
/// whitespace, punctuation and case differences do not affect equality.
pub fn normalize_title(title: &str) -> String {
    NON_WORD.replace_all(&title.to_lowercase(), "").into_owned()
}

/// Seen-sets and duplicate counter for one pipeline run.
///
/// Mutations must be serialized: each check has to observe every earlier
/// insertion. Create a fresh state per run.
#[derive(Debug, Default)]
pub struct DedupeState {
    seen_titles: HashSet<String>,
    seen_links: HashSet<String>,
    duplicate_count: usize,
}

impl DedupeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a listing and record it.
    ///
    /// Not a duplicate: both the normalized title and the link are recorded
    /// and `false` is returned. Duplicate: the counter is incremented,
    /// nothing is recorded, and `true` is returned.
    pub fn is_duplicate(&mut self, title: &str, link: &str) -> bool {
        let normalized = normalize_title(title);

        if self.seen_titles.contains(&normalized) || self.seen_links.contains(link) {
            self.duplicate_count += 1;
            return true;
        }

        self.seen_titles.insert(normalized);
        self.seen_links.insert(link.to_string());
        false
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicate_count
    }

    /// Number of distinct listings recorded so far.
    pub fn seen_count(&self) -> usize {
        self.seen_titles.len()
    }

    pub fn has_seen_title(&self, title: &str) -> bool {
        self.seen_titles.contains(&normalize_title(title))
    }

    pub fn has_seen_link(&self, link: &str) -> bool {
        self.seen_links.contains(link)
    }
}
