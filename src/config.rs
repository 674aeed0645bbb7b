//! Command-line configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::search::SearchConfig;
use crate::sites::Section;

/// Run log appended to inside the results directory.
pub const LOG_FILE_NAME: &str = "gig_finder.log";

#[derive(Parser, Debug)]
#[command(name = "gigsift")]
#[command(about = "Find tech gigs in scraped classified-ad listings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON dump of scraped listings
    #[arg(env = "GIGSIFT_INPUT")]
    pub input: PathBuf,

    /// Directory for result files
    #[arg(long, env = "GIGSIFT_RESULTS_DIR", default_value = "gig_finder_results")]
    pub results_dir: PathBuf,

    /// Only search these sites (name or identifier)
    #[arg(long = "site", value_delimiter = ',')]
    pub sites: Vec<String>,

    /// Sections to search
    #[arg(
        long = "section",
        value_enum,
        value_delimiter = ',',
        default_values = ["cpg", "crg", "ggg"]
    )]
    pub sections: Vec<Section>,

    /// Number of top-ranked gigs in the summary
    #[arg(long, env = "GIGSIFT_TOP", default_value = "5")]
    pub top: usize,

    /// Skip posting-date lookups
    #[arg(long)]
    pub no_dates: bool,

    /// Debug logging for this crate
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            sites: self.sites.clone(),
            sections: self.sections.clone(),
            enrich_dates: !self.no_dates,
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.results_dir.join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gigsift", "dump.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("dump.json"));
        assert_eq!(cli.results_dir, PathBuf::from("gig_finder_results"));
        assert_eq!(cli.sections, Section::ALL.to_vec());
        assert_eq!(cli.top, 5);
        assert_eq!(cli.log_path(), PathBuf::from("gig_finder_results/gig_finder.log"));

        let config = cli.search_config();
        assert!(config.sites.is_empty());
        assert!(config.enrich_dates);
    }

    #[test]
    fn test_filters() {
        let cli = Cli::try_parse_from([
            "gigsift",
            "dump.json",
            "--site",
            "sfbay,boston",
            "--section",
            "cpg",
            "--no-dates",
            "--top",
            "10",
        ])
        .unwrap();

        let config = cli.search_config();
        assert_eq!(config.sites, ["sfbay", "boston"]);
        assert_eq!(config.sections, [Section::ComputerGigs]);
        assert!(!config.enrich_dates);
        assert_eq!(cli.top, 10);
    }

    #[test]
    fn test_log_path_follows_results_dir() {
        let cli = Cli::try_parse_from(["gigsift", "dump.json", "--results-dir", "/tmp/out"]).unwrap();
        assert_eq!(cli.log_path(), PathBuf::from("/tmp/out/gig_finder.log"));
    }

    #[test]
    fn test_rejects_unknown_section() {
        assert!(Cli::try_parse_from(["gigsift", "dump.json", "--section", "jjj"]).is_err());
    }
}
