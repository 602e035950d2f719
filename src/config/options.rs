// src/config/options.rs
//
// Run options, grouped the way the pipeline consumes them:
// rank (what to build), scrape (how to fetch), export (where and how to write).
// Every section can be partially specified in a TOML file; missing keys keep
// their defaults. CLI flags are applied on top by the frontends.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::consts::*;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub rank: RankOptions,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let opts = Self::from_toml(&text)?;
        debug!(path = %path.display(), "loaded options");
        Ok(opts)
    }

    /// Explicit path must exist; otherwise fall back to `gs_scrape.toml` in the
    /// working directory when present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.is_file() { Self::load(p) } else { Ok(Self::default()) }
            }
        }
    }
}

/* ---------------- Rank ---------------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    pub by_citations: bool,
    pub by_year: bool,
    /// Target length of each ranked list.
    pub max: usize,
    /// Papers dated before this year are dropped at retrieval.
    pub first_year: i32,
    /// Per-member list length fetched for group runs.
    pub member_list_size: usize,
    /// Year the allocator starts from; the present year when unset.
    pub start_year: Option<i32>,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            by_citations: true,
            by_year: true,
            max: DEFAULT_MAX_HITS,
            first_year: DEFAULT_FIRST_YEAR,
            member_list_size: GROUP_MEMBER_LIST_SIZE,
            start_year: None,
        }
    }
}

impl RankOptions {
    pub fn cited_size(&self) -> usize {
        if self.by_citations { self.max } else { 0 }
    }

    pub fn recent_size(&self) -> usize {
        if self.by_year { self.max } else { 0 }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year.unwrap_or_else(current_year)
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub host: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub pause_min_secs: f64,
    pub pause_max_secs: f64,
    /// Read pages from / save pages to `cache_dir` instead of always fetching.
    pub page_cache: bool,
    pub cache_dir: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            host: s!(HOST),
            user_agent: s!(USER_AGENT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            pause_min_secs: PAUSE_MIN_SECS,
            pause_max_secs: PAUSE_MAX_SECS,
            page_cache: false,
            cache_dir: PathBuf::from(STORE_DIR).join(PAGE_CACHE_SUBDIR),
        }
    }
}

impl ScrapeOptions {
    /// Absolute URL for a site-relative link.
    pub fn absolute(&self, href: &str) -> String {
        if href.starts_with("http://") || href.starts_with("https://") {
            s!(href)
        } else if href.starts_with('/') {
            join!(&self.host, href)
        } else {
            join!(&self.host, "/", href)
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Html,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Html | ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub include_headers: bool,
    /// Heading lines at the top of HTML reports.
    pub banner: Vec<String>,
    /// Group link used when a group file names no URL.
    pub homepage: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_headers: true,
            banner: REPORT_BANNER.iter().map(|s| s!(*s)).collect(),
            homepage: s!(DEFAULT_HOMEPAGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let opts = AppOptions::from_toml(
            r#"
            [rank]
            max = 5
            by_year = false

            [scrape]
            page_cache = true
            pause_min_secs = 0.0
            pause_max_secs = 0.0

            [export]
            format = "tsv"
            "#,
        )
        .unwrap();

        assert_eq!(opts.rank.max, 5);
        assert_eq!(opts.rank.cited_size(), 5);
        assert_eq!(opts.rank.recent_size(), 0);
        assert_eq!(opts.rank.first_year, DEFAULT_FIRST_YEAR);
        assert!(opts.scrape.page_cache);
        assert_eq!(opts.scrape.host, HOST);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.format.delim(), Some('\t'));
        assert_eq!(opts.export.banner.len(), REPORT_BANNER.len());
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = AppOptions::from_toml("[rank]\nmax = \"ten\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn start_year_override() {
        let mut rank = RankOptions::default();
        assert_eq!(rank.start_year(), current_year());
        rank.start_year = Some(2015);
        assert_eq!(rank.start_year(), 2015);
    }

    #[test]
    fn absolute_links() {
        let s = ScrapeOptions::default();
        assert_eq!(s.absolute("/citations?user=x"), "https://scholar.google.com/citations?user=x");
        assert_eq!(s.absolute("citations?user=x"), "https://scholar.google.com/citations?user=x");
        assert_eq!(s.absolute("http://a.b/c"), "http://a.b/c");
    }
}
