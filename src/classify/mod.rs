//! Keyword classification of listing titles.
//!
//! The classifier holds an ordered list of keyword groups, one per
//! category tag. A title gets a tag when any of that group's patterns
//! matches; the remaining patterns of the group are skipped.
//!
//! Pattern compilation is separate from matching: a [`KeywordGroup`] is
//! compiled once from its pattern strings and can be tested on its own.
//!
//! # Example
//!
//! ```
//! use gigsift::classify::KeywordClassifier;
//! use gigsift::CategoryTag;
//!
//! let classifier = KeywordClassifier::default();
//! let tags = classifier.classify("Senior React developer, AWS experience");
//!
//! assert!(tags.contains(&CategoryTag::SoftwareDev));
//! assert!(tags.contains(&CategoryTag::TechMisc));
//! ```

pub mod patterns;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

use crate::{CategoryTag, Error};

static DEFAULT_CLASSIFIER: Lazy<KeywordClassifier> = Lazy::new(KeywordClassifier::default);

/// Classify text with the built-in pattern tables.
pub fn classify(text: &str) -> BTreeSet<CategoryTag> {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Compiled patterns for a single category tag.
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    tag: CategoryTag,
    patterns: Vec<Regex>,
}

impl KeywordGroup {
    /// Compile a group from pattern strings, keeping their order.
    pub fn compile(tag: CategoryTag, patterns: &[&str]) -> Result<Self, Error> {
        let patterns = patterns
            .iter()
            .map(|p| {
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| Error::Pattern {
                        group: tag.as_str().to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tag, patterns })
    }

    pub fn tag(&self) -> CategoryTag {
        self.tag
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern (in table order) that matches the text.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.is_match(text))
            .map(|p| p.as_str())
    }

    pub fn matches(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}

/// Maps listing text to the set of category tags it matches.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    groups: Vec<KeywordGroup>,
}

impl KeywordClassifier {
    /// Create a classifier with no groups (matches nothing).
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Compile a classifier from `(tag, patterns)` tables.
    pub fn from_tables(tables: &[(CategoryTag, &[&str])]) -> Result<Self, Error> {
        let groups = tables
            .iter()
            .map(|(tag, patterns)| KeywordGroup::compile(*tag, patterns))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups })
    }

    /// Add a group to the end of the classifier.
    ///
    /// A group whose tag is already present adds further alternatives for
    /// that tag.
    pub fn add_group(&mut self, group: KeywordGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Return every tag with at least one matching pattern.
    ///
    /// An empty set means the text is not relevant.
    pub fn classify(&self, text: &str) -> BTreeSet<CategoryTag> {
        let text = text.to_lowercase();
        let mut tags = BTreeSet::new();

        for group in &self.groups {
            if tags.contains(&group.tag) {
                continue;
            }
            if group.matches(&text) {
                tags.insert(group.tag);
            }
        }

        tags
    }
}

impl Default for KeywordClassifier {
    /// The classifier built from [`patterns::DEFAULT_TABLES`].
    fn default() -> Self {
        Self::from_tables(patterns::DEFAULT_TABLES).expect("built-in keyword patterns compile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(title: &str) -> BTreeSet<CategoryTag> {
        classify(title)
    }

    fn group(tag: CategoryTag) -> KeywordGroup {
        KeywordClassifier::default()
            .groups()
            .iter()
            .find(|g| g.tag() == tag)
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_default_tables_compile() {
        let classifier = KeywordClassifier::from_tables(patterns::DEFAULT_TABLES).unwrap();
        assert_eq!(classifier.groups().len(), 4);
        assert_eq!(classifier.groups()[0].len(), patterns::WEB_DEV.len());
        assert_eq!(classifier.groups()[3].len(), patterns::TECH_MISC.len());
    }

    #[test]
    fn test_invalid_pattern_reports_group() {
        let err = KeywordGroup::compile(CategoryTag::WebDev, &[r"\bweb(\b"]).unwrap_err();
        match err {
            Error::Pattern { group, .. } => assert_eq!(group, "web_dev"),
            other => panic!("unexpected error: {other}"),
        }
    }

    // Web dev
    #[test]
    fn test_web_developer() {
        assert_eq!(tags("Web Developer needed"), BTreeSet::from([CategoryTag::WebDev]));
    }

    #[test]
    fn test_wordpress_site() {
        assert!(tags("Need help fixing my WordPress site").contains(&CategoryTag::WebDev));
    }

    #[test]
    fn test_front_end_variants() {
        assert!(tags("Front-end help").contains(&CategoryTag::WebDev));
        assert!(tags("frontend tweaks").contains(&CategoryTag::WebDev));
        assert!(tags("Full Stack contractor").contains(&CategoryTag::WebDev));
    }

    #[test]
    fn test_ui_ux() {
        assert!(tags("UI/UX designer for landing page").contains(&CategoryTag::WebDev));
        assert!(tags("UX UI review").is_empty());
    }

    // Software dev
    #[test]
    fn test_python_programmer() {
        assert_eq!(tags("Python script needed"), BTreeSet::from([CategoryTag::SoftwareDev]));
    }

    #[test]
    fn test_java_needs_word_boundary() {
        let group = group(CategoryTag::SoftwareDev);
        assert_eq!(group.first_match("javascript tutor"), Some(r"\bjavascript\b"));
    }

    #[test]
    fn test_node_js_spellings() {
        assert!(tags("Node.js backend").contains(&CategoryTag::SoftwareDev));
        assert!(tags("nodejs scraper").contains(&CategoryTag::SoftwareDev));
    }

    // Mobile dev
    #[test]
    fn test_react_native_is_mobile() {
        let t = tags("React Native developer");
        assert!(t.contains(&CategoryTag::MobileDev));
        // "react" is also a software_dev alternative
        assert!(t.contains(&CategoryTag::SoftwareDev));
    }

    #[test]
    fn test_ios_developer() {
        assert_eq!(tags("iOS developer for small app"), BTreeSet::from([CategoryTag::MobileDev]));
    }

    #[test]
    fn test_flutter() {
        assert!(tags("Flutter freelancer").contains(&CategoryTag::MobileDev));
    }

    // Tech misc
    #[test]
    fn test_aws_devops() {
        assert_eq!(tags("AWS DevOps engineer"), BTreeSet::from([CategoryTag::TechMisc]));
    }

    #[test]
    fn test_react_and_aws() {
        assert_eq!(
            tags("React dashboard hosted on AWS"),
            BTreeSet::from([CategoryTag::SoftwareDev, CategoryTag::TechMisc])
        );
    }

    #[test]
    fn test_react_and_docker_per_tables() {
        // docker is listed under software_dev only
        assert_eq!(
            tags("React app in Docker"),
            BTreeSet::from([CategoryTag::SoftwareDev])
        );
    }

    #[test]
    fn test_ai_word_boundary() {
        let group = group(CategoryTag::TechMisc);
        assert!(!group.matches("this is a maintenance job"));
        assert!(group.matches("ai engineer wanted"));
        assert!(tags("This is a maintenance job").is_empty());
        assert_eq!(tags("AI Engineer wanted"), BTreeSet::from([CategoryTag::TechMisc]));
    }

    #[test]
    fn test_ml_and_api_boundaries() {
        assert!(tags("HTML email template").contains(&CategoryTag::WebDev));
        assert!(!tags("HTML email template").contains(&CategoryTag::TechMisc));
        assert!(tags("Rapid turnaround").is_empty());
    }

    #[test]
    fn test_ci_cd() {
        assert!(tags("Set up CI/CD pipeline").contains(&CategoryTag::TechMisc));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(tags("KUBERNETES CLUSTER HELP"), BTreeSet::from([CategoryTag::TechMisc]));
    }

    #[test]
    fn test_many_tags() {
        assert_eq!(
            tags("Full stack React developer, Flutter app, AWS"),
            BTreeSet::from([
                CategoryTag::WebDev,
                CategoryTag::SoftwareDev,
                CategoryTag::MobileDev,
                CategoryTag::TechMisc,
            ])
        );
    }

    #[test]
    fn test_no_match() {
        assert!(tags("Help me move a couch").is_empty());
        assert!(tags("").is_empty());
    }

    #[test]
    fn test_empty_classifier_matches_nothing() {
        assert!(KeywordClassifier::new().classify("python aws").is_empty());
    }

    #[test]
    fn test_extra_group_extends_tag() {
        let mut classifier = KeywordClassifier::default();
        classifier.add_group(KeywordGroup::compile(CategoryTag::TechMisc, &[r"\bterraform\b"]).unwrap());
        assert_eq!(
            classifier.classify("Terraform modules"),
            BTreeSet::from([CategoryTag::TechMisc])
        );
    }
}
