//! Sample-based regression tests for the listing pipeline.
//!
//! Titles are taken from real gig sections. Each sample runs through a
//! fresh dedupe state so only the exclude/classify decision is checked.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::dedupe::DedupeState;
use crate::pipeline::Pipeline;
use crate::{CategoryTag, RawListing};

use CategoryTag::{MobileDev, SoftwareDev, TechMisc, WebDev};

static PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::default);

fn run(title: &str) -> Option<BTreeSet<CategoryTag>> {
    let mut state = DedupeState::new();
    let raw = RawListing::new(title, "https://sample.example/post/1")
        .with_source("Seattle", "seattle")
        .with_section("cpg");
    PIPELINE
        .process(&raw, &mut state, |_| None)
        .map(|listing| listing.categories().clone())
}

fn assert_tags(title: &str, expected: &[CategoryTag]) {
    let expected: BTreeSet<CategoryTag> = expected.iter().copied().collect();
    assert_eq!(run(title), Some(expected), "sample: {title}");
}

fn assert_dropped(title: &str) {
    assert_eq!(run(title), None, "sample: {title}");
}

#[test]
fn sample_001() {
    assert_tags("Need a WordPress expert to fix my site", &[WebDev]);
}

#[test]
fn sample_002() {
    assert_tags("Shopify store setup - quick job", &[WebDev]);
}

#[test]
fn sample_003() {
    assert_tags("Looking for Squarespace designer", &[WebDev]);
}

#[test]
fn sample_004() {
    assert_tags("Website developer for small restaurant", &[WebDev]);
}

#[test]
fn sample_005() {
    assert_tags("Full-stack dev (React / Node.js)", &[WebDev, SoftwareDev]);
}

#[test]
fn sample_006() {
    assert_tags("Junior developer - PHP/Laravel", &[SoftwareDev]);
}

#[test]
fn sample_007() {
    assert_tags("Django + Postgres help needed", &[SoftwareDev, TechMisc]);
}

#[test]
fn sample_008() {
    assert_tags("Build an iOS app in Swift", &[MobileDev]);
}

#[test]
fn sample_009() {
    assert_tags("Android developer for Kotlin rewrite", &[MobileDev]);
}

#[test]
fn sample_010() {
    assert_tags("Mobile app prototype in Flutter", &[MobileDev]);
}

#[test]
fn sample_011() {
    assert_tags("Machine learning consultant", &[TechMisc]);
}

#[test]
fn sample_012() {
    assert_tags("SQL database cleanup, one week", &[TechMisc]);
}

#[test]
fn sample_013() {
    assert_tags("Linux sysadmin - part time", &[TechMisc]);
}

#[test]
fn sample_014() {
    assert_tags("Data scientist for sports analytics", &[TechMisc]);
}

#[test]
fn sample_015() {
    assert_tags("Tailwind + React landing page, hosted on Azure", &[WebDev, SoftwareDev, TechMisc]);
}

#[test]
fn sample_016() {
    assert_tags("Coding tutor for high schooler (Python)", &[SoftwareDev]);
}

#[test]
fn sample_017() {
    assert_tags("Need REST API integration for CRM", &[SoftwareDev]);
}

#[test]
fn sample_018() {
    assert_tags("Kubernetes / k8s migration", &[TechMisc]);
}

// Excluded even though tech terms appear
#[test]
fn sample_019() {
    assert_dropped("Photo shoot model needed - must know Photoshop");
}

#[test]
fn sample_020() {
    assert_dropped("Paid study: software engineers who use Python");
}

#[test]
fn sample_021() {
    assert_dropped("Online survey for AWS users - $50 gift card");
}

#[test]
fn sample_022() {
    assert_dropped("Delivery driver - must have app on phone");
}

#[test]
fn sample_023() {
    assert_dropped("Egg donor needed, compensation $8000");
}

#[test]
fn sample_024() {
    assert_dropped("Warehouse SQL inventory clerk");
}

// Not tech at all
#[test]
fn sample_025() {
    assert_dropped("Yard work this Saturday");
}

#[test]
fn sample_026() {
    assert_dropped("Maintenance handyman, paint and drywall");
}

#[test]
fn sample_027() {
    assert_dropped("Email marketing assistant");
}

#[test]
fn sample_028() {
    assert_dropped("Rapid sign spinner needed");
}
