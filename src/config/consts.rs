// src/config/consts.rs

// Net config
pub const HOST: &str = "https://scholar.google.com";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:41.0) Gecko/20100101 Firefox/41.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Courtesy delay before every network fetch, in seconds
pub const PAUSE_MIN_SECS: f64 = 75.0;
pub const PAUSE_MAX_SECS: f64 = 150.0;

// Local files
pub const DEFAULT_ROSTER_FILE: &str = "faculty_info.txt";
pub const DEFAULT_CONFIG_FILE: &str = "gs_scrape.toml";
pub const STORE_DIR: &str = ".store";
pub const PAGE_CACHE_SUBDIR: &str = "pages";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_HOMEPAGE: &str = "http://www.cs.odu.edu";
pub const REPORT_BANNER: &[&str] = &[
    "Old Dominion University",
    "Department of Computer Science",
    "Faculty Google Scholar Page Data",
];

// Ranking
pub const DEFAULT_MAX_HITS: usize = 10;
pub const GROUP_MEMBER_LIST_SIZE: usize = 20;
pub const DEFAULT_FIRST_YEAR: i32 = 1900;

// Year allocator
pub const LOOKBACK_YEARS: i32 = 10;
pub const INITIAL_PER_PERSON_CAP: usize = 1;
pub const PER_PERSON_CAP_STEP: usize = 1;
